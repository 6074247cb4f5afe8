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
//! `WeteeGpu` pallet: GPU workloads.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{AccountId32, Balance, Price, TeeApp, WorkloadSpec, WorkloadUpdate};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "WeteeGpu";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Create a workload.
    #[codec(index = 0)]
    Create(WorkloadSpec),
    /// Update a workload.
    #[codec(index = 1)]
    Update(WorkloadUpdate),
    /// Restart a GPU app.
    #[codec(index = 2)]
    Restart {
        /// App id
        app_id: u64,
    },
    /// Stop a GPU app.
    #[codec(index = 3)]
    Stop {
        /// App id
        app_id: u64,
    },
    /// Set the price of a service level.
    #[codec(index = 4)]
    UpdatePrice {
        /// Service level
        level: u8,
        /// Unit prices
        price: Price,
    },
    /// Top up the deposit of a workload.
    #[codec(index = 5)]
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
    /// Build `WeteeGpu::create`.
    pub fn create(&self, spec: WorkloadSpec) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::Create(spec))
    }

    /// Build `WeteeGpu::update`.
    pub fn update(&self, update: WorkloadUpdate) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::Update(update))
    }

    /// Build `WeteeGpu::restart`.
    pub fn restart(&self, app_id: u64) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::Restart { app_id })
    }

    /// Build `WeteeGpu::stop`.
    pub fn stop(&self, app_id: u64) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::Stop { app_id })
    }

    /// Build `WeteeGpu::update_price`.
    pub fn update_price(&self, level: u8, price: Price) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::UpdatePrice { level, price })
    }

    /// Build `WeteeGpu::charge`.
    pub fn charge(&self, id: u64, deposit: Balance) -> RuntimeCall {
        RuntimeCall::WeteeGpu(Call::Charge { id, deposit })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Id the next created GPU app gets.
    pub fn next_app_id(&self) -> Address<u64> {
        Address::plain(PALLET, "NextAppId")
    }

    /// GPU app owned by an account.
    pub fn gpu_apps(&self, owner: &AccountId32, app_id: u64) -> Address<TeeApp> {
        Address::map(PALLET, "GPUApps", vec![owner.encode(), app_id.encode()])
    }

    /// Owner of a GPU app.
    pub fn app_id_accounts(&self, app_id: u64) -> Address<AccountId32> {
        Address::map(PALLET, "AppIdAccounts", vec![app_id.encode()])
    }

    /// Unit prices of a service level.
    pub fn prices(&self, level: u8) -> Address<Price> {
        Address::map(PALLET, "Prices", vec![level.encode()])
    }
}
