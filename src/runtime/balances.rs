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
//! `Balances` pallet.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{AccountId32, Balance, MultiAddress};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "Balances";

/// Transfer destination.
pub type Destination = MultiAddress<AccountId32, ()>;

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Transfer, allowing the sender account to be reaped.
    #[codec(index = 0)]
    TransferAllowDeath {
        /// Receiver
        dest: Destination,
        /// Amount
        #[codec(compact)]
        value: Balance,
    },
    /// Transfer, keeping the sender account alive.
    #[codec(index = 3)]
    TransferKeepAlive {
        /// Receiver
        dest: Destination,
        /// Amount
        #[codec(compact)]
        value: Balance,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `Balances::transfer_allow_death`.
    pub fn transfer_allow_death(&self, dest: Destination, value: Balance) -> RuntimeCall {
        RuntimeCall::Balances(Call::TransferAllowDeath { dest, value })
    }

    /// Build `Balances::transfer_keep_alive`.
    pub fn transfer_keep_alive(&self, dest: Destination, value: Balance) -> RuntimeCall {
        RuntimeCall::Balances(Call::TransferKeepAlive { dest, value })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Total issuance of the native token.
    pub fn total_issuance(&self) -> Address<Balance> {
        Address::plain(PALLET, "TotalIssuance")
    }
}
