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
//! Storage key derivation.

use crate::error::{Error, Result};
use crate::metadata::Metadata;
use log::trace;
use std::fmt;

/// Address of a value in chain state.
///
/// `twox_128(pallet) ++ twox_128(item) ++ hasher(key)...`, one hashed key
/// per hasher declared for the item.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(Vec<u8>);

impl StorageKey {
    /// Key prefix shared by every entry of an item.
    pub fn prefix(metadata: &Metadata, pallet: &str, item: &str) -> Result<Self> {
        let entry = metadata.storage_entry(pallet, item)?;
        let mut key = Vec::with_capacity(32);
        key.extend_from_slice(&sp_core::twox_128(pallet.as_bytes()));
        key.extend_from_slice(&sp_core::twox_128(entry.name.as_bytes()));
        Ok(Self(key))
    }

    /// Derive the key of an item from SCALE encoded key arguments.
    ///
    /// The number of arguments must match the hashers declared for the item;
    /// plain values take none.
    pub fn dynamic(
        metadata: &Metadata,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
    ) -> Result<Self> {
        let entry = metadata.storage_entry(pallet, item)?;
        if entry.hashers.len() != keys.len() {
            return Err(Error::KeyArity {
                pallet: pallet.to_string(),
                item: item.to_string(),
                expected: entry.hashers.len(),
                got: keys.len(),
            });
        }

        let Self(mut key) = Self::prefix(metadata, pallet, item)?;
        for (hasher, encoded) in entry.hashers.iter().zip(keys) {
            hasher.hash_into(encoded, &mut key);
        }

        trace!("Derived storage key {}::{} = 0x{}", pallet, item, hex::encode(&key));
        Ok(Self(key))
    }

    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into raw key bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for StorageKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageKey({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::storage;
    use crate::types::{AccountId32, WorkId};
    use hex_literal::hex;
    use parity_scale_codec::Encode;

    #[test]
    fn test_well_known_plain_keys() {
        let metadata = Metadata::wetee();
        assert_eq!(
            storage().system().number().to_key(&metadata).unwrap().as_bytes(),
            hex!("26aa394eea5630e07c48ae0c9558cef702a5c1b19ab7a04f536c519aca4983ac")
        );
        assert_eq!(
            storage()
                .parachain_info()
                .parachain_id()
                .to_key(&metadata)
                .unwrap()
                .as_bytes(),
            hex!("0d715f2646c8f85767b5d2764bb2782604a74d81251e398fd8a0a4d55023bb3f")
        );
    }

    #[test]
    fn test_key_derivation_is_deterministic() {
        let metadata = Metadata::wetee();
        let address = storage().wetee_bridge().tee_calls(42);
        assert_eq!(
            address.to_key(&metadata).unwrap(),
            address.to_key(&metadata).unwrap()
        );
    }

    #[test]
    fn test_map_keys_differ_per_argument() {
        let metadata = Metadata::wetee();
        let first = storage().wetee_bridge().tee_calls(1).to_key(&metadata).unwrap();
        let second = storage().wetee_bridge().tee_calls(2).to_key(&metadata).unwrap();
        assert_ne!(first, second);

        let prefix = StorageKey::prefix(&metadata, "WeteeBridge", "TEECalls").unwrap();
        assert!(first.as_bytes().starts_with(prefix.as_bytes()));
        // Twox64Concat: 8 byte hash followed by the encoded u128
        assert_eq!(first.as_bytes().len(), 32 + 8 + 16);
        assert_eq!(&first.as_bytes()[40..], &1u128.encode()[..]);
    }

    #[test]
    fn test_double_map_key_layout() {
        let metadata = Metadata::wetee();
        let owner = AccountId32([9u8; 32]);
        let key = storage()
            .wetee_app()
            .tee_apps(&owner, 3)
            .to_key(&metadata)
            .unwrap();
        // Blake2_128Concat account then Twox64Concat u64
        assert_eq!(key.as_bytes().len(), 32 + 16 + 32 + 8 + 8);
        assert_eq!(&key.as_bytes()[48..80], &owner.0[..]);
        assert_eq!(&key.as_bytes()[88..], &3u64.encode()[..]);
    }

    #[test]
    fn test_dynamic_matches_typed() {
        let metadata = Metadata::wetee();
        let work = WorkId::task(5);
        let typed = storage()
            .wetee_worker()
            .proofs_of_work(&work, 10)
            .to_key(&metadata)
            .unwrap();
        let dynamic = StorageKey::dynamic(
            &metadata,
            "WeteeWorker",
            "ProofsOfWork",
            &[work.encode(), 10u32.encode()],
        )
        .unwrap();
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_key_arity_mismatch() {
        let metadata = Metadata::wetee();
        let err = StorageKey::dynamic(&metadata, "WeteeBridge", "TEECalls", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::KeyArity {
                expected: 1,
                got: 0,
                ..
            }
        ));

        let err =
            StorageKey::dynamic(&metadata, "System", "Number", &[1u32.encode()]).unwrap_err();
        assert!(matches!(err, Error::KeyArity { expected: 0, got: 1, .. }));
    }

    #[test]
    fn test_unknown_item() {
        let metadata = Metadata::wetee();
        assert!(matches!(
            StorageKey::dynamic(&metadata, "WeteeBridge", "Missing", &[]),
            Err(Error::UnknownStorage { .. })
        ));
        assert!(matches!(
            StorageKey::dynamic(&metadata, "Missing", "Missing", &[]),
            Err(Error::UnknownPallet(_))
        ));
    }

    #[test]
    fn test_display_is_prefixed_hex() {
        let key = StorageKey::from_bytes(vec![0xde, 0xad]);
        assert_eq!(key.to_string(), "0xdead");
        assert_eq!(format!("{key:?}"), "StorageKey(0xdead)");
    }
}
