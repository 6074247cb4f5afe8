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
//! `Timestamp` pallet.

use super::RuntimeCall;
use crate::storage::Address;
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "Timestamp";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Set the current time, inherent only.
    #[codec(index = 0)]
    Set {
        /// Unix time in milliseconds
        #[codec(compact)]
        now: u64,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `Timestamp::set`.
    pub fn set(&self, now: u64) -> RuntimeCall {
        RuntimeCall::Timestamp(Call::Set { now })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Current time in milliseconds.
    pub fn now(&self) -> Address<u64> {
        Address::plain(PALLET, "Now")
    }
}
