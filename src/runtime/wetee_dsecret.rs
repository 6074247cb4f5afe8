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
//! `WeteeDsecret` pallet: secret-sharing node registry.

use super::RuntimeCall;
use crate::storage::Address;
use parity_scale_codec::{Decode, Encode};

/// Pallet name.
pub const PALLET: &str = "WeteeDsecret";

/// Node public key.
pub type NodePubkey = [u8; 32];

/// Dispatchable calls.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Register a secret-sharing node.
    #[codec(index = 0)]
    RegisterNode {
        /// Node public key
        pubkey: NodePubkey,
    },
    /// Set the enclave measurements nodes must run.
    #[codec(index = 1)]
    UploadCodeMrenclave {
        /// Enclave measurement
        mrenclave: Vec<u8>,
        /// Signer measurement
        mrsigner: Vec<u8>,
    },
}

/// Call builders.
pub struct TransactionApi;

impl TransactionApi {
    /// Build `WeteeDsecret::register_node`.
    pub fn register_node(&self, pubkey: NodePubkey) -> RuntimeCall {
        RuntimeCall::WeteeDsecret(Call::RegisterNode { pubkey })
    }

    /// Build `WeteeDsecret::upload_code_mrenclave`.
    pub fn upload_code_mrenclave(&self, mrenclave: Vec<u8>, mrsigner: Vec<u8>) -> RuntimeCall {
        RuntimeCall::WeteeDsecret(Call::UploadCodeMrenclave {
            mrenclave,
            mrsigner,
        })
    }
}

/// Storage addresses.
pub struct StorageApi;

impl StorageApi {
    /// Id the next registered node gets.
    pub fn next_node_id(&self) -> Address<u64> {
        Address::plain(PALLET, "NextNodeId")
    }

    /// Node public key by id.
    pub fn nodes(&self, id: u64) -> Address<NodePubkey> {
        Address::map(PALLET, "Nodes", vec![id.encode()])
    }

    /// Expected enclave measurement.
    pub fn code_mrenclave(&self) -> Address<Vec<u8>> {
        Address::plain(PALLET, "CodeMrenclave")
    }

    /// Expected signer measurement.
    pub fn code_mrsigner(&self) -> Address<Vec<u8>> {
        Address::plain(PALLET, "CodeMrsigner")
    }
}
