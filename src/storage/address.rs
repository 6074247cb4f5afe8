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
//! Typed storage addresses.

use super::StorageKey;
use crate::error::Result;
use crate::metadata::Metadata;
use std::fmt;
use std::marker::PhantomData;

/// Typed address of a storage item.
///
/// Carries the pallet and item names plus the SCALE encoded key arguments;
/// `V` is the type the stored value decodes into.
pub struct Address<V> {
    pallet: &'static str,
    item: &'static str,
    keys: Vec<Vec<u8>>,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Address<V> {
    /// Address of a plain value.
    pub fn plain(pallet: &'static str, item: &'static str) -> Self {
        Self::map(pallet, item, Vec::new())
    }

    /// Address of a map entry, one encoded argument per key.
    pub fn map(pallet: &'static str, item: &'static str, keys: Vec<Vec<u8>>) -> Self {
        Self {
            pallet,
            item,
            keys,
            _marker: PhantomData,
        }
    }

    /// Pallet name.
    pub fn pallet_name(&self) -> &'static str {
        self.pallet
    }

    /// Storage item name.
    pub fn item_name(&self) -> &'static str {
        self.item
    }

    /// Encoded key arguments.
    pub fn keys(&self) -> &[Vec<u8>] {
        &self.keys
    }

    /// Derive the storage key.
    pub fn to_key(&self, metadata: &Metadata) -> Result<StorageKey> {
        StorageKey::dynamic(metadata, self.pallet, self.item, &self.keys)
    }
}

impl<V> Clone for Address<V> {
    fn clone(&self) -> Self {
        Self::map(self.pallet, self.item, self.keys.clone())
    }
}

impl<V> fmt::Debug for Address<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("pallet", &self.pallet)
            .field("item", &self.item)
            .field("keys", &self.keys)
            .finish()
    }
}
