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
//! Storage keys and typed storage access.
//!
//! A storage read is three steps: derive the key from an [`Address`],
//! fetch the raw bytes through a [`StateQuery`] and decode them into the
//! address value type. [`Storage`] does all three.
//!
//! ```
//! use wetee_client::metadata::Metadata;
//! use wetee_client::runtime::storage;
//! use wetee_client::storage::{MemoryState, Storage};
//!
//! # #[tokio::main]
//! # async fn main() -> wetee_client::Result<()> {
//! let reader = Storage::new(MemoryState::new(), Metadata::wetee());
//!
//! // Nothing stored: the registry default applies
//! let id = reader
//!     .fetch_or_default_latest(&storage().parachain_info().parachain_id())
//!     .await?;
//! assert_eq!(id, 100);
//! # Ok(())
//! # }
//! ```

mod address;
mod key;
mod memory;
mod state;

pub use address::Address;
pub use key::StorageKey;
pub use memory::MemoryState;
pub use state::StateQuery;

use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::types::BlockHash;
use log::{debug, trace};
use parity_scale_codec::{Decode, DecodeAll};
use std::sync::Arc;

/// Typed storage accessor over a state backend.
#[derive(Clone, Debug)]
pub struct Storage<S> {
    state: S,
    metadata: Arc<Metadata>,
}

impl<S: StateQuery> Storage<S> {
    /// Create an accessor.
    pub fn new(state: S, metadata: impl Into<Arc<Metadata>>) -> Self {
        Self {
            state,
            metadata: metadata.into(),
        }
    }

    /// Metadata registry used for key derivation and defaults.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// State backend.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch raw bytes stored under a key.
    pub async fn fetch_raw(
        &self,
        key: &StorageKey,
        at: Option<BlockHash>,
    ) -> Result<Option<Vec<u8>>> {
        self.state.storage(key, at).await
    }

    /// Fetch and decode a value at a block.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key.
    pub async fn fetch<V: Decode>(
        &self,
        address: &Address<V>,
        at: BlockHash,
    ) -> Result<Option<V>> {
        self.fetch_at(address, Some(at)).await
    }

    /// [`fetch`](Self::fetch) at the latest block.
    pub async fn fetch_latest<V: Decode>(&self, address: &Address<V>) -> Result<Option<V>> {
        self.fetch_at(address, None).await
    }

    /// Fetch and decode a value at a block, falling back to the registry default.
    ///
    /// Items without a default fail with [`Error::NoDefault`] when absent.
    pub async fn fetch_or_default<V: Decode>(
        &self,
        address: &Address<V>,
        at: BlockHash,
    ) -> Result<V> {
        self.fetch_or_default_at(address, Some(at)).await
    }

    /// [`fetch_or_default`](Self::fetch_or_default) at the latest block.
    pub async fn fetch_or_default_latest<V: Decode>(&self, address: &Address<V>) -> Result<V> {
        self.fetch_or_default_at(address, None).await
    }

    async fn fetch_at<V: Decode>(
        &self,
        address: &Address<V>,
        at: Option<BlockHash>,
    ) -> Result<Option<V>> {
        let key = address.to_key(&self.metadata)?;
        trace!(
            "Fetching {}::{} at {:?}",
            address.pallet_name(),
            address.item_name(),
            at
        );
        match self.fetch_raw(&key, at).await? {
            Some(bytes) => decode(address, &bytes).map(Some),
            None => {
                debug!(
                    "{}::{} is not present",
                    address.pallet_name(),
                    address.item_name()
                );
                Ok(None)
            }
        }
    }

    async fn fetch_or_default_at<V: Decode>(
        &self,
        address: &Address<V>,
        at: Option<BlockHash>,
    ) -> Result<V> {
        if let Some(value) = self.fetch_at(address, at).await? {
            return Ok(value);
        }

        let entry = self
            .metadata
            .storage_entry(address.pallet_name(), address.item_name())?;
        let bytes = entry.default_bytes().ok_or_else(|| Error::NoDefault {
            pallet: address.pallet_name().to_string(),
            item: address.item_name().to_string(),
        })?;

        trace!(
            "Using default value of {}::{}",
            address.pallet_name(),
            address.item_name()
        );
        V::decode_all(&mut &bytes[..]).map_err(|source| Error::DefaultDecode {
            pallet: address.pallet_name().to_string(),
            item: address.item_name().to_string(),
            source,
        })
    }
}

// Leftover input means the stored layout differs from `V`.
fn decode<V: Decode>(address: &Address<V>, bytes: &[u8]) -> Result<V> {
    V::decode_all(&mut &bytes[..]).map_err(|source| Error::Decode {
        pallet: address.pallet_name().to_string(),
        item: address.item_name().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::storage;
    use crate::types::{AccountId32, TeeCall, WorkId, H256};

    fn accessor(state: MemoryState) -> Storage<MemoryState> {
        Storage::new(state, Metadata::wetee())
    }

    fn key<V>(address: &Address<V>) -> StorageKey {
        address.to_key(&Metadata::wetee()).unwrap()
    }

    #[tokio::test]
    async fn test_parachain_id_default() {
        let reader = accessor(MemoryState::new());
        let address = storage().parachain_info().parachain_id();

        assert_eq!(reader.fetch_latest(&address).await.unwrap(), None);
        assert_eq!(reader.fetch_or_default_latest(&address).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_authorities_default_is_empty() {
        let reader = accessor(MemoryState::new());
        let authorities = reader
            .fetch_or_default_latest(&storage().aura().authorities())
            .await
            .unwrap();
        assert!(authorities.is_empty());
    }

    #[tokio::test]
    async fn test_stored_value_wins_over_default() {
        let address = storage().parachain_info().parachain_id();
        let mut state = MemoryState::new();
        state.insert(key(&address), &2000u32);

        let reader = accessor(state);
        assert_eq!(reader.fetch_latest(&address).await.unwrap(), Some(2000));
        assert_eq!(reader.fetch_or_default_latest(&address).await.unwrap(), 2000);
    }

    #[tokio::test]
    async fn test_queue_config_default() {
        let reader = accessor(MemoryState::new());
        let config = reader
            .fetch_or_default_latest(&storage().xcmp_queue().queue_config())
            .await
            .unwrap();
        assert_eq!(config.suspend_threshold, 32);
        assert_eq!(config.drop_threshold, 48);
        assert_eq!(config.resume_threshold, 8);
    }

    #[tokio::test]
    async fn test_fetch_at_block() {
        let address = storage().system().number();
        let block = H256::repeat_byte(7);
        let mut state = MemoryState::new();
        state.insert(key(&address), &10u32);
        state.insert_at(block, key(&address), &5u32);

        let reader = accessor(state);
        assert_eq!(reader.fetch(&address, block).await.unwrap(), Some(5));
        assert_eq!(reader.fetch_latest(&address).await.unwrap(), Some(10));
        assert_eq!(
            reader
                .fetch(&address, H256::repeat_byte(8))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_map_entry() {
        let call = TeeCall {
            work_id: WorkId::app(3),
            caller: AccountId32([5u8; 32]),
            method: 1,
            params: vec![1, 2],
            callback: None,
            block: 9,
        };
        let mut state = MemoryState::new();
        state.insert(key(&storage().wetee_bridge().tee_calls(1)), &call);

        let reader = accessor(state);
        assert_eq!(
            reader
                .fetch_latest(&storage().wetee_bridge().tee_calls(1))
                .await
                .unwrap(),
            Some(call)
        );
        assert_eq!(
            reader
                .fetch_latest(&storage().wetee_bridge().tee_calls(2))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_optional_item_has_no_default() {
        let reader = accessor(MemoryState::new());
        let err = reader
            .fetch_or_default_latest(&storage().wetee_bridge().tee_calls(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoDefault { .. }));
    }

    #[tokio::test]
    async fn test_fetch_raw() {
        let address = storage().wetee_dsecret().code_mrenclave();
        let mut state = MemoryState::new();
        state.insert(key(&address), &vec![7u8, 7]);

        let reader = accessor(state);
        assert_eq!(
            reader.fetch_raw(&key(&address), None).await.unwrap(),
            Some(vec![8, 7, 7])
        );
    }

    #[tokio::test]
    async fn test_undecodable_value() {
        let address = storage().system().number();
        let mut state = MemoryState::new();
        state.insert_raw(key(&address), vec![1, 2]);

        let reader = accessor(state);
        let err = reader.fetch_latest(&address).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_trailing_bytes_are_rejected() {
        let address = storage().system().number();
        let mut state = MemoryState::new();
        state.insert_raw(key(&address), vec![5, 0, 0, 0, 0xff, 0xff]);

        let reader = accessor(state);
        let err = reader.fetch_latest(&address).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_bad_default_bytes() {
        // too short, then one byte too long for a u32
        for default in ["64", "0x6400000000"] {
            let json = format!(
                r#"{{
                    "spec_version": 1,
                    "pallets": [{{
                        "name": "ParachainInfo",
                        "index": 3,
                        "storage": [{{
                            "name": "ParachainId",
                            "modifier": "Default",
                            "value_ty": "u32",
                            "default": "{default}"
                        }}]
                    }}]
                }}"#
            );
            let metadata = Metadata::from_json(&json).unwrap();
            let reader = Storage::new(MemoryState::new(), metadata);
            let err = reader
                .fetch_or_default_latest(&storage().parachain_info().parachain_id())
                .await
                .unwrap_err();
            assert!(matches!(err, Error::DefaultDecode { .. }));
        }
    }
}
