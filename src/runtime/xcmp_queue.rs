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
//! `XcmpQueue` pallet: cross-chain message queue controls.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::QueueConfigData;
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "XcmpQueue";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Suspend execution of incoming XCM.
    #[codec(index = 1)]
    SuspendXcmExecution,
    /// Resume execution of incoming XCM.
    #[codec(index = 2)]
    ResumeXcmExecution,
    /// Set the page count at which channels get suspended.
    #[codec(index = 3)]
    UpdateSuspendThreshold {
        /// Threshold
        new: u32,
    },
    /// Set the page count at which messages get dropped.
    #[codec(index = 4)]
    UpdateDropThreshold {
        /// Threshold
        new: u32,
    },
    /// Set the page count at which suspended channels resume.
    #[codec(index = 5)]
    UpdateResumeThreshold {
        /// Threshold
        new: u32,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `XcmpQueue::suspend_xcm_execution`.
    pub fn suspend_xcm_execution(&self) -> RuntimeCall {
        RuntimeCall::XcmpQueue(Call::SuspendXcmExecution)
    }

    /// Build `XcmpQueue::resume_xcm_execution`.
    pub fn resume_xcm_execution(&self) -> RuntimeCall {
        RuntimeCall::XcmpQueue(Call::ResumeXcmExecution)
    }

    /// Build `XcmpQueue::update_suspend_threshold`.
    pub fn update_suspend_threshold(&self, new: u32) -> RuntimeCall {
        RuntimeCall::XcmpQueue(Call::UpdateSuspendThreshold { new })
    }

    /// Build `XcmpQueue::update_drop_threshold`.
    pub fn update_drop_threshold(&self, new: u32) -> RuntimeCall {
        RuntimeCall::XcmpQueue(Call::UpdateDropThreshold { new })
    }

    /// Build `XcmpQueue::update_resume_threshold`.
    pub fn update_resume_threshold(&self, new: u32) -> RuntimeCall {
        RuntimeCall::XcmpQueue(Call::UpdateResumeThreshold { new })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Whether incoming XCM execution is suspended.
    pub fn queue_suspended(&self) -> Address<bool> {
        Address::plain(PALLET, "QueueSuspended")
    }

    /// Queue thresholds.
    pub fn queue_config(&self) -> Address<QueueConfigData> {
        Address::plain(PALLET, "QueueConfig")
    }
}
