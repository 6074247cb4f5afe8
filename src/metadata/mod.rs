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
//! Runtime metadata registry.
//!
//! The registry is a static description of the Wetee runtime: which pallets
//! exist, their indices, the calls they dispatch and the layout of their
//! storage items (hashers and default values). It is built once and passed
//! explicitly to everything that needs it.
//!
//! ```
//! use wetee_client::metadata::Metadata;
//!
//! let metadata = Metadata::wetee();
//! let entry = metadata.storage_entry("ParachainInfo", "ParachainId").unwrap();
//! assert_eq!(entry.default, vec![0x64, 0, 0, 0]);
//! ```
//!
//! A registry can also be loaded from JSON, which is handy for tests against
//! a mock runtime or after a runtime upgrade changed a default value. Default
//! values are hex strings, with or without a `0x` prefix:
//!
//! ```
//! use wetee_client::metadata::Metadata;
//!
//! let json = r#"{
//!     "spec_version": 1,
//!     "pallets": [{
//!         "name": "Mock",
//!         "index": 7,
//!         "storage": [{
//!             "name": "Counter",
//!             "modifier": "Default",
//!             "value_ty": "u32",
//!             "default": "2a000000"
//!         }]
//!     }]
//! }"#;
//! let metadata = Metadata::from_json(json).unwrap();
//! assert_eq!(metadata.pallet("Mock").unwrap().index, 7);
//! ```

mod wetee;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Hashing algorithm applied to a storage map key.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageHasher {
    /// 128-bit Blake2 hash.
    Blake2_128,
    /// 256-bit Blake2 hash.
    Blake2_256,
    /// 128-bit Blake2 hash followed by the encoded key.
    Blake2_128Concat,
    /// 128-bit XX hash.
    Twox128,
    /// 256-bit XX hash.
    Twox256,
    /// 64-bit XX hash followed by the encoded key.
    Twox64Concat,
    /// Raw encoded key.
    Identity,
}

impl StorageHasher {
    /// Append the hashed form of an encoded key to `out`.
    pub fn hash_into(&self, encoded: &[u8], out: &mut Vec<u8>) {
        match self {
            StorageHasher::Blake2_128 => out.extend_from_slice(&sp_core::blake2_128(encoded)),
            StorageHasher::Blake2_256 => out.extend_from_slice(&sp_core::blake2_256(encoded)),
            StorageHasher::Blake2_128Concat => {
                out.extend_from_slice(&sp_core::blake2_128(encoded));
                out.extend_from_slice(encoded);
            }
            StorageHasher::Twox128 => out.extend_from_slice(&sp_core::twox_128(encoded)),
            StorageHasher::Twox256 => out.extend_from_slice(&sp_core::twox_256(encoded)),
            StorageHasher::Twox64Concat => {
                out.extend_from_slice(&sp_core::twox_64(encoded));
                out.extend_from_slice(encoded);
            }
            StorageHasher::Identity => out.extend_from_slice(encoded),
        }
    }
}

/// Behaviour of a storage item when no value is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageModifier {
    /// Absent values are reported as absent.
    Optional,
    /// Absent values decode from the item's default bytes.
    Default,
}

/// Argument of a dispatchable call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgMetadata {
    /// Argument name
    pub name: String,
    /// Type name, informational only
    pub ty: String,
}

/// Dispatchable call of a pallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallMetadata {
    /// Call name in snake case
    pub name: String,
    /// Call index inside the pallet
    pub index: u8,
    /// Ordered arguments
    #[serde(default)]
    pub args: Vec<ArgMetadata>,
}

/// Storage item of a pallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntryMetadata {
    /// Item name
    pub name: String,
    /// Absent value behaviour
    pub modifier: StorageModifier,
    /// One hasher per key, empty for plain values
    #[serde(default)]
    pub hashers: Vec<StorageHasher>,
    /// Key type names, informational only
    #[serde(default)]
    pub key_ty: Vec<String>,
    /// Value type name, informational only
    pub value_ty: String,
    /// SCALE encoded default value, hex with optional `0x` prefix
    #[serde(default, with = "prefixed_hex")]
    pub default: Vec<u8>,
}

impl StorageEntryMetadata {
    /// Default bytes, if the item declares a default.
    pub fn default_bytes(&self) -> Option<&[u8]> {
        match self.modifier {
            StorageModifier::Default => Some(&self.default),
            StorageModifier::Optional => None,
        }
    }
}

/// Pallet description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletMetadata {
    /// Pallet name, also the storage prefix
    pub name: String,
    /// Pallet index in the runtime
    pub index: u8,
    /// Dispatchable calls
    #[serde(default)]
    pub calls: Vec<CallMetadata>,
    /// Storage items
    #[serde(default)]
    pub storage: Vec<StorageEntryMetadata>,
}

impl PalletMetadata {
    /// Find a call by name.
    pub fn call(&self, name: &str) -> Option<&CallMetadata> {
        self.calls.iter().find(|c| c.name == name)
    }

    /// Find a call by index.
    pub fn call_by_index(&self, index: u8) -> Option<&CallMetadata> {
        self.calls.iter().find(|c| c.index == index)
    }

    /// Find a storage item by name.
    pub fn storage_entry(&self, name: &str) -> Option<&StorageEntryMetadata> {
        self.storage.iter().find(|s| s.name == name)
    }
}

/// Runtime metadata registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Runtime spec version the registry was taken from
    pub spec_version: u32,
    /// Pallets of the runtime
    pub pallets: Vec<PalletMetadata>,
}

impl Metadata {
    /// Registry of the Wetee runtime this crate is built against.
    pub fn wetee() -> Self {
        wetee::metadata()
    }

    /// Parse and validate a registry from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let metadata: Metadata = serde_json::from_str(json)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Load and validate a registry from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Find a pallet by name.
    pub fn pallet(&self, name: &str) -> Result<&PalletMetadata> {
        self.pallets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPallet(name.to_string()))
    }

    /// Find a pallet by runtime index.
    pub fn pallet_by_index(&self, index: u8) -> Option<&PalletMetadata> {
        self.pallets.iter().find(|p| p.index == index)
    }

    /// Find a call by pallet and call index.
    pub fn call_by_index(&self, pallet: u8, call: u8) -> Result<(&PalletMetadata, &CallMetadata)> {
        self.pallet_by_index(pallet)
            .and_then(|p| p.call_by_index(call).map(|c| (p, c)))
            .ok_or(Error::UnknownCall { pallet, call })
    }

    /// Find a storage item.
    pub fn storage_entry(&self, pallet: &str, item: &str) -> Result<&StorageEntryMetadata> {
        self.pallet(pallet)?
            .storage_entry(item)
            .ok_or_else(|| Error::UnknownStorage {
                pallet: pallet.to_string(),
                item: item.to_string(),
            })
    }

    /// Check registry consistency.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut indices = HashSet::new();
        for pallet in &self.pallets {
            if !names.insert(pallet.name.as_str()) {
                return Err(invalid(format!("duplicate pallet name {}", pallet.name)));
            }
            if !indices.insert(pallet.index) {
                return Err(invalid(format!("duplicate pallet index {}", pallet.index)));
            }

            let mut call_names = HashSet::new();
            let mut call_indices = HashSet::new();
            for call in &pallet.calls {
                if !call_names.insert(call.name.as_str()) || !call_indices.insert(call.index) {
                    return Err(invalid(format!(
                        "duplicate call {}::{} (index {})",
                        pallet.name, call.name, call.index
                    )));
                }
            }

            let mut items = HashSet::new();
            for entry in &pallet.storage {
                if !items.insert(entry.name.as_str()) {
                    return Err(invalid(format!(
                        "duplicate storage item {}::{}",
                        pallet.name, entry.name
                    )));
                }
                if !entry.key_ty.is_empty() && entry.key_ty.len() != entry.hashers.len() {
                    return Err(invalid(format!(
                        "{}::{} declares {} hashers for {} keys",
                        pallet.name,
                        entry.name,
                        entry.hashers.len(),
                        entry.key_ty.len()
                    )));
                }
                if entry.modifier == StorageModifier::Default && entry.default.is_empty() {
                    return Err(invalid(format!(
                        "{}::{} has no default bytes",
                        pallet.name, entry.name
                    )));
                }
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> Error {
    Error::InvalidMetadata(reason)
}

mod prefixed_hex {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text.strip_prefix("0x").unwrap_or(&text);
        hex::decode(digits).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wetee_registry_is_valid() {
        Metadata::wetee().validate().unwrap();
    }

    #[test]
    fn test_lookup_errors() {
        let metadata = Metadata::wetee();
        assert!(matches!(
            metadata.pallet("Nope"),
            Err(Error::UnknownPallet(name)) if name == "Nope"
        ));
        assert!(matches!(
            metadata.storage_entry("System", "Nope"),
            Err(Error::UnknownStorage { .. })
        ));
        assert!(matches!(
            metadata.call_by_index(0, 200),
            Err(Error::UnknownCall { pallet: 0, call: 200 })
        ));
    }

    #[test]
    fn test_default_bytes_follow_modifier() {
        let metadata = Metadata::wetee();
        let authorities = metadata.storage_entry("Aura", "Authorities").unwrap();
        assert_eq!(authorities.default_bytes(), Some(&[0u8][..]));

        let calls = metadata.storage_entry("WeteeBridge", "TEECalls").unwrap();
        assert_eq!(calls.default_bytes(), None);
    }

    #[test]
    fn test_json_roundtrip_keeps_defaults() {
        let metadata = Metadata::wetee();
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(Metadata::from_json(&json).unwrap(), metadata);
    }

    #[test]
    fn test_duplicate_pallet_index_rejected() {
        let json = r#"{
            "spec_version": 1,
            "pallets": [
                { "name": "A", "index": 1 },
                { "name": "B", "index": 1 }
            ]
        }"#;
        assert!(matches!(
            Metadata::from_json(json),
            Err(Error::InvalidMetadata(_))
        ));
    }

    #[test]
    fn test_default_bytes_accept_optional_prefix() {
        let entry = |default: &str| {
            format!(
                r#"{{
                    "spec_version": 1,
                    "pallets": [{{
                        "name": "A",
                        "index": 1,
                        "storage": [{{
                            "name": "X",
                            "modifier": "Default",
                            "value_ty": "u32",
                            "default": "{default}"
                        }}]
                    }}]
                }}"#
            )
        };
        for default in ["0x2a000000", "2a000000"] {
            let metadata = Metadata::from_json(&entry(default)).unwrap();
            assert_eq!(
                metadata.storage_entry("A", "X").unwrap().default,
                vec![0x2a, 0, 0, 0]
            );
        }
        assert!(matches!(
            Metadata::from_json(&entry("0xzz")),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_default_entry_without_bytes_rejected() {
        let json = r#"{
            "spec_version": 1,
            "pallets": [{
                "name": "A",
                "index": 1,
                "storage": [{ "name": "X", "modifier": "Default", "value_ty": "u32" }]
            }]
        }"#;
        assert!(matches!(
            Metadata::from_json(json),
            Err(Error::InvalidMetadata(_))
        ));
    }

    #[test]
    fn test_concat_hashers_append_key() {
        let key = 7u64.to_le_bytes();

        let mut out = Vec::new();
        StorageHasher::Twox64Concat.hash_into(&key, &mut out);
        assert_eq!(out.len(), 8 + key.len());
        assert_eq!(&out[8..], &key);

        let mut out = Vec::new();
        StorageHasher::Blake2_128Concat.hash_into(&key, &mut out);
        assert_eq!(out.len(), 16 + key.len());
        assert_eq!(&out[16..], &key);

        let mut out = Vec::new();
        StorageHasher::Identity.hash_into(&key, &mut out);
        assert_eq!(out, key);
    }
}
