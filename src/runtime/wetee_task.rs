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
//! `WeteeTask` pallet: run-to-completion TEE tasks.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{AccountId32, Balance, Price, TeeApp, WorkloadSpec, WorkloadUpdate};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "WeteeTask";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Create a workload.
    #[codec(index = 0)]
    Create(WorkloadSpec),
    /// Update a workload.
    #[codec(index = 1)]
    Update(WorkloadUpdate),
    /// Run a finished task again.
    #[codec(index = 2)]
    Rerun {
        /// Task id
        id: u64,
    },
    /// Set the price of a service level.
    #[codec(index = 3)]
    UpdatePrice {
        /// Service level
        level: u8,
        /// Unit prices
        price: Price,
    },
    /// Top up the deposit of a workload.
    #[codec(index = 4)]
    Charge {
        /// Workload id
        id: u64,
        /// Amount
        deposit: Balance,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `WeteeTask::create`.
    pub fn create(&self, spec: WorkloadSpec) -> RuntimeCall {
        RuntimeCall::WeteeTask(Call::Create(spec))
    }

    /// Build `WeteeTask::update`.
    pub fn update(&self, update: WorkloadUpdate) -> RuntimeCall {
        RuntimeCall::WeteeTask(Call::Update(update))
    }

    /// Build `WeteeTask::rerun`.
    pub fn rerun(&self, id: u64) -> RuntimeCall {
        RuntimeCall::WeteeTask(Call::Rerun { id })
    }

    /// Build `WeteeTask::update_price`.
    pub fn update_price(&self, level: u8, price: Price) -> RuntimeCall {
        RuntimeCall::WeteeTask(Call::UpdatePrice { level, price })
    }

    /// Build `WeteeTask::charge`.
    pub fn charge(&self, id: u64, deposit: Balance) -> RuntimeCall {
        RuntimeCall::WeteeTask(Call::Charge { id, deposit })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Id the next created task gets.
    pub fn next_tee_id(&self) -> Address<u64> {
        Address::plain(PALLET, "NextTeeId")
    }

    /// Task owned by an account.
    pub fn tee_tasks(&self, owner: &AccountId32, task_id: u64) -> Address<TeeApp> {
        Address::map(PALLET, "TEETasks", vec![owner.encode(), task_id.encode()])
    }

    /// Owner of a task.
    pub fn task_id_accounts(&self, task_id: u64) -> Address<AccountId32> {
        Address::map(PALLET, "TaskIdAccounts", vec![task_id.encode()])
    }

    /// Unit prices of a service level.
    pub fn prices(&self, level: u8) -> Address<Price> {
        Address::map(PALLET, "Prices", vec![level.encode()])
    }
}
