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
//! `System` pallet.

use super::RuntimeCall;
use crate::storage::Address;
use crate::types::{BlockHash, BlockNumber};
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "System";

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Make some on-chain remark.
    #[codec(index = 0)]
    Remark {
        /// Arbitrary bytes
        remark: Vec<u8>,
    },
    /// Make some on-chain remark and emit an event.
    #[codec(index = 7)]
    RemarkWithEvent {
        /// Arbitrary bytes
        remark: Vec<u8>,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `System::remark`.
    pub fn remark(&self, remark: Vec<u8>) -> RuntimeCall {
        RuntimeCall::System(Call::Remark { remark })
    }

    /// Build `System::remark_with_event`.
    pub fn remark_with_event(&self, remark: Vec<u8>) -> RuntimeCall {
        RuntimeCall::System(Call::RemarkWithEvent { remark })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Current block number.
    pub fn number(&self) -> Address<BlockNumber> {
        Address::plain(PALLET, "Number")
    }

    /// Hash of a known block.
    pub fn block_hash(&self, number: BlockNumber) -> Address<BlockHash> {
        Address::map(PALLET, "BlockHash", vec![number.encode()])
    }

    /// Extrinsics in the current block, absent outside block execution.
    pub fn extrinsic_count(&self) -> Address<u32> {
        Address::plain(PALLET, "ExtrinsicCount")
    }
}
