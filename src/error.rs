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
//! Error types.

/// Errors returned by call introspection, key derivation and storage access.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pallet is not described by the metadata registry.
    #[error("Unknown pallet: {0}")]
    UnknownPallet(String),

    /// Storage item is not described by the metadata registry.
    #[error("Unknown storage item: {pallet}::{item}")]
    UnknownStorage {
        /// Pallet name
        pallet: String,
        /// Storage item name
        item: String,
    },

    /// Call indices are not described by the metadata registry.
    #[error("Unknown call: pallet index {pallet}, call index {call}")]
    UnknownCall {
        /// Pallet index
        pallet: u8,
        /// Call index
        call: u8,
    },

    /// Number of key arguments differs from the hashers declared for the item.
    #[error("{pallet}::{item} expects {expected} key(s), got {got}")]
    KeyArity {
        /// Pallet name
        pallet: String,
        /// Storage item name
        item: String,
        /// Declared number of keys
        expected: usize,
        /// Supplied number of keys
        got: usize,
    },

    /// Storage item is optional and carries no default value.
    #[error("{pallet}::{item} has no default value")]
    NoDefault {
        /// Pallet name
        pallet: String,
        /// Storage item name
        item: String,
    },

    /// Stored bytes do not decode into the item's value type.
    #[error("Failed to decode {pallet}::{item}: {source}")]
    Decode {
        /// Pallet name
        pallet: String,
        /// Storage item name
        item: String,
        /// Codec error
        #[source]
        source: parity_scale_codec::Error,
    },

    /// Registry default bytes do not decode into the item's value type.
    #[error("Failed to decode default value of {pallet}::{item}: {source}")]
    DefaultDecode {
        /// Pallet name
        pallet: String,
        /// Storage item name
        item: String,
        /// Codec error
        #[source]
        source: parity_scale_codec::Error,
    },

    /// Metadata registry is inconsistent.
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Transport or RPC failure reported by the chain client.
    #[error("RPC error: {0}")]
    Rpc(#[from] subxt::Error),

    /// I/O failure while reading configuration or metadata files.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON metadata.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
