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
//! `WeteeBridge` pallet: contract calls into TEE workloads.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{TeeCall, WorkId};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "WeteeBridge";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Queue a call to a TEE workload.
    #[codec(index = 0)]
    CallTee {
        /// Target workload
        work_id: WorkId,
        /// Method selector
        method: u16,
        /// Encoded parameters
        params: Vec<u8>,
        /// Encoded callback selector
        callback: Option<Vec<u8>>,
    },
    /// Answer a queued call from inside the workload.
    #[codec(index = 1)]
    Respond {
        /// Queued call id
        call_id: u128,
        /// Encoded result
        result: Vec<u8>,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `WeteeBridge::call_tee`.
    pub fn call_tee(
        &self,
        work_id: WorkId,
        method: u16,
        params: Vec<u8>,
        callback: Option<Vec<u8>>,
    ) -> RuntimeCall {
        RuntimeCall::WeteeBridge(Call::CallTee {
            work_id,
            method,
            params,
            callback,
        })
    }

    /// Build `WeteeBridge::respond`.
    pub fn respond(&self, call_id: u128, result: Vec<u8>) -> RuntimeCall {
        RuntimeCall::WeteeBridge(Call::Respond { call_id, result })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Id the next queued call gets.
    pub fn next_tee_call_id(&self) -> Address<u128> {
        Address::plain(PALLET, "NextTeeCallId")
    }

    /// Queued call by id.
    pub fn tee_calls(&self, call_id: u128) -> Address<TeeCall> {
        Address::map(PALLET, "TEECalls", vec![call_id.encode()])
    }
}
