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
//! Get command implementation.

use crate::display;
use anyhow::Result;
use wetee_client::metadata::Metadata;
use wetee_client::storage::StorageKey;
use wetee_client::types::BlockHash;
use wetee_client::{Config, StateQuery};

pub async fn execute(
    config: &Config,
    metadata: Metadata,
    pallet: &str,
    item: &str,
    keys: &[Vec<u8>],
    at: Option<BlockHash>,
) -> Result<()> {
    let key = StorageKey::dynamic(&metadata, pallet, item, keys)?;
    let client = super::connect(config).await?;

    display::progress(&format!("Fetching {pallet}::{item}..."));
    let value = client.storage(&key, at).await?;

    display::section(&format!("{pallet}::{item}"));
    display::field("Key", &key.to_string());
    match value {
        Some(bytes) => display::field("Value", &format!("0x{}", hex::encode(bytes))),
        None => match metadata.storage_entry(pallet, item)?.default_bytes() {
            Some(default) => {
                display::field("Default", &format!("0x{}", hex::encode(default)))
            }
            None => display::empty("Value"),
        },
    }
    display::close_section();

    Ok(())
}
