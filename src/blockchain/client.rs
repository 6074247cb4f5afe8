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
//! Blockchain client and connection management.
//!
//! This module provides the [`Client`] type for connecting to a Wetee
//! node and reading its state.
//!
//! # Examples
//!
//! ```no_run
//! use wetee_client::blockchain::{Client, Config};
//! use wetee_client::runtime::storage;
//!
//! #[tokio::main]
//! async fn main() -> wetee_client::Result<()> {
//!     let config = Config::default();
//!     let metadata = Client::metadata(&config)?;
//!     let client = Client::new(&config).await?;
//!
//!     let id = client
//!         .reader(metadata)
//!         .fetch_or_default_latest(&storage().parachain_info().parachain_id())
//!         .await?;
//!     println!("Parachain id: {id}");
//!     Ok(())
//! }
//! ```

use super::WeteeConfig;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::storage::{StateQuery, Storage, StorageKey};
use crate::types::BlockHash;
use async_trait::async_trait;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use subxt::OnlineClient;

/// Node endpoint used when none is configured.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:9944";

fn default_ws_url() -> String {
    DEFAULT_WS_URL.to_string()
}

/// Configuration for blockchain connection.
///
/// # Fields
///
/// * `ws_url` - WebSocket URL of the blockchain node (e.g., "ws://localhost:9944")
/// * `metadata` - Optional JSON registry replacing the built-in one
///
/// # TOML format
///
/// ```toml
/// ws_url = "wss://asset-hub.wetee.app/ws"
/// metadata = "/etc/wetee/metadata.json"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// WebSocket URL of the blockchain node
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    /// Path to a JSON metadata registry
    #[serde(default)]
    pub metadata: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            metadata: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading configuration from {}", path.as_ref().display());
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}

/// Blockchain client for reading Wetee chain state.
///
/// Wraps a subxt client; storage reads go through [`StateQuery`], so the
/// client plugs into [`Storage`] like any other state backend.
pub struct Client {
    /// Subxt client for blockchain interaction
    pub api: OnlineClient<WeteeConfig>,
}

impl Client {
    /// Create a new blockchain client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rpc`](crate::Error::Rpc) if the node cannot be reached
    /// or its metadata cannot be fetched.
    pub async fn new(config: &Config) -> Result<Self> {
        debug!("Connecting to blockchain at {}", config.ws_url);

        let api = OnlineClient::<WeteeConfig>::from_url(&config.ws_url).await?;

        debug!("Successfully connected to blockchain");
        Ok(Self { api })
    }

    /// Load the metadata registry named by the configuration.
    ///
    /// Falls back to the built-in Wetee registry when no file is set.
    pub fn metadata(config: &Config) -> Result<Metadata> {
        match &config.metadata {
            Some(path) => {
                debug!("Loading metadata registry from {}", path.display());
                Metadata::from_json_file(path)
            }
            None => Ok(Metadata::wetee()),
        }
    }

    /// Typed storage accessor over this client.
    pub fn reader(&self, metadata: impl Into<Arc<Metadata>>) -> Storage<&Self> {
        Storage::new(self, metadata)
    }
}

#[async_trait]
impl StateQuery for Client {
    async fn storage(&self, key: &StorageKey, at: Option<BlockHash>) -> Result<Option<Vec<u8>>> {
        let at = match at {
            Some(hash) => hash,
            None => self.api.backend().latest_finalized_block_ref().await?.hash(),
        };
        trace!("Querying storage {} at {:?}", key, at);

        let value = self
            .api
            .storage()
            .at(at)
            .fetch_raw(key.as_bytes().to_vec())
            .await?;
        trace!("Storage {} present: {}", key, value.is_some());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ws_url, DEFAULT_WS_URL);
        assert!(config.metadata.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml(
            r#"
            ws_url = "wss://example.org:443"
            metadata = "registry.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.ws_url, "wss://example.org:443");
        assert_eq!(config.metadata, Some(PathBuf::from("registry.json")));
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        assert!(matches!(
            Config::from_toml("ws_url = 9944"),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/wetee.toml"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_builtin_metadata() {
        let metadata = Client::metadata(&Config::default()).unwrap();
        assert_eq!(metadata, Metadata::wetee());
    }

    #[test]
    fn test_metadata_file_errors_propagate() {
        let config = Config {
            metadata: Some(PathBuf::from("/nonexistent/metadata.json")),
            ..Config::default()
        };
        assert!(matches!(Client::metadata(&config), Err(Error::Io(_))));
    }
}
