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
//! Key command implementation.

use crate::display;
use anyhow::Result;
use wetee_client::metadata::Metadata;
use wetee_client::storage::StorageKey;

pub fn execute(metadata: &Metadata, pallet: &str, item: &str, keys: &[Vec<u8>]) -> Result<()> {
    let key = StorageKey::dynamic(metadata, pallet, item, keys)?;
    display::success(&format!("{pallet}::{item}"));
    println!("{key}");
    Ok(())
}
