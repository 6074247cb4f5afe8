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
//! In-memory chain state.

use super::{StateQuery, StorageKey};
use crate::error::Result;
use crate::types::BlockHash;
use async_trait::async_trait;
use log::trace;
use parity_scale_codec::Encode;
use std::collections::{BTreeMap, HashMap};

/// Chain state held in memory, for tests and offline tooling.
///
/// Values inserted without a block hash form the latest state; values
/// inserted at a block are only visible when querying that block.
#[derive(Clone, Debug, Default)]
pub struct MemoryState {
    latest: BTreeMap<StorageKey, Vec<u8>>,
    blocks: HashMap<BlockHash, BTreeMap<StorageKey, Vec<u8>>>,
}

impl MemoryState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an encoded value in the latest state.
    pub fn insert<V: Encode>(&mut self, key: StorageKey, value: &V) -> &mut Self {
        self.insert_raw(key, value.encode())
    }

    /// Store raw bytes in the latest state.
    pub fn insert_raw(&mut self, key: StorageKey, value: Vec<u8>) -> &mut Self {
        self.latest.insert(key, value);
        self
    }

    /// Store an encoded value in the state of a block.
    pub fn insert_at<V: Encode>(&mut self, at: BlockHash, key: StorageKey, value: &V) -> &mut Self {
        self.blocks.entry(at).or_default().insert(key, value.encode());
        self
    }
}

#[async_trait]
impl StateQuery for MemoryState {
    async fn storage(&self, key: &StorageKey, at: Option<BlockHash>) -> Result<Option<Vec<u8>>> {
        trace!("Memory state lookup {} at {:?}", key, at);
        let state = match at {
            Some(hash) => self.blocks.get(&hash),
            None => Some(&self.latest),
        };
        Ok(state.and_then(|s| s.get(key)).cloned())
    }
}
