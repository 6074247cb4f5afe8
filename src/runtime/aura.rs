///////////////////////////////////////////////////////////////////////////////
//
//  Copyright 2018-2026 Robonomics Network <research@robonomics.network>
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//
///////////////////////////////////////////////////////////////////////////////
//! `Aura` pallet.

use crate::storage::Address;

/// Pallet name.
pub const PALLET: &str = "Aura";

/// Sr25519 authority public key.
pub type AuthorityId = [u8; 32];

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Current authority set.
    pub fn authorities(&self) -> Address<Vec<AuthorityId>> {
        Address::plain(PALLET, "Authorities")
    }

    /// Current slot number.
    pub fn current_slot(&self) -> Address<u64> {
        Address::plain(PALLET, "CurrentSlot")
    }
}
