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
//! Command implementations.

pub mod chain;
pub mod get;
pub mod key;
pub mod pallets;

use anyhow::{anyhow, Result};
use wetee_client::types::BlockHash;

/// Decode a hex string with optional `0x` prefix.
pub fn parse_hex(value: &str) -> Result<Vec<u8>> {
    let hex_str = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(hex_str).map_err(|e| anyhow!("Invalid hex value {value}: {e}"))
}

/// Decode a list of hex encoded key arguments.
pub fn parse_keys(values: &[String]) -> Result<Vec<Vec<u8>>> {
    values.iter().map(|v| parse_hex(v)).collect()
}

/// Decode a 32 byte block hash.
pub fn parse_block_hash(value: &str) -> Result<BlockHash> {
    let bytes = parse_hex(value)?;
    if bytes.len() != 32 {
        return Err(anyhow!(
            "Invalid block hash: expected 32 bytes, got {}",
            bytes.len()
        ));
    }
    Ok(BlockHash::from_slice(&bytes))
}

/// Connect to the node named by the configuration.
pub async fn connect(config: &wetee_client::Config) -> Result<wetee_client::Client> {
    crate::display::progress("Connecting to blockchain...");
    let client = wetee_client::Client::new(config)
        .await
        .map_err(|e| anyhow!("Failed to connect to {}: {}", config.ws_url, e))?;
    crate::display::info(&format!("Connected to {}", config.ws_url));
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(parse_hex("0102").unwrap(), vec![1, 2]);
        assert!(parse_hex("0xzz").is_err());
        assert_eq!(
            parse_keys(&["0x01".to_string(), "0203".to_string()]).unwrap(),
            vec![vec![1], vec![2, 3]]
        );
    }

    #[test]
    fn test_parse_block_hash() {
        let hash = parse_block_hash(&format!("0x{}", "ab".repeat(32))).unwrap();
        assert_eq!(hash, BlockHash::repeat_byte(0xab));
        assert!(parse_block_hash("0x0102").is_err());
    }
}
