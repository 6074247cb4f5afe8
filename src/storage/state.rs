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
//! Chain state access.

use super::StorageKey;
use crate::error::Result;
use crate::types::BlockHash;
use async_trait::async_trait;

/// Raw read access to chain state.
///
/// `at = None` reads the latest state the implementation knows of.
/// Absent entries are `Ok(None)`; transport failures are errors.
#[async_trait]
pub trait StateQuery: Send + Sync {
    /// Fetch the raw bytes stored under a key.
    async fn storage(&self, key: &StorageKey, at: Option<BlockHash>) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
impl<T: StateQuery + ?Sized> StateQuery for &T {
    async fn storage(&self, key: &StorageKey, at: Option<BlockHash>) -> Result<Option<Vec<u8>>> {
        (**self).storage(key, at).await
    }
}

#[async_trait]
impl<T: StateQuery + ?Sized> StateQuery for std::sync::Arc<T> {
    async fn storage(&self, key: &StorageKey, at: Option<BlockHash>) -> Result<Option<Vec<u8>>> {
        (**self).storage(key, at).await
    }
}
