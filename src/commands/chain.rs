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
//! Parachain info and authority commands.

use crate::display;
use anyhow::Result;
use sp_core::crypto::{AccountId32, Ss58Codec};
use wetee_client::metadata::Metadata;
use wetee_client::runtime::storage;
use wetee_client::types::BlockHash;
use wetee_client::{Address, Config, StateQuery, Storage};

async fn read<S: StateQuery, V: parity_scale_codec::Decode>(
    reader: &Storage<S>,
    address: &Address<V>,
    at: Option<BlockHash>,
) -> wetee_client::Result<V> {
    match at {
        Some(hash) => reader.fetch_or_default(address, hash).await,
        None => reader.fetch_or_default_latest(address).await,
    }
}

pub async fn parachain_id(
    config: &Config,
    metadata: Metadata,
    at: Option<BlockHash>,
) -> Result<()> {
    let client = super::connect(config).await?;
    let reader = client.reader(metadata);

    let id = read(&reader, &storage().parachain_info().parachain_id(), at).await?;
    display::success(&format!("Parachain id: {id}"));
    Ok(())
}

pub async fn authorities(
    config: &Config,
    metadata: Metadata,
    at: Option<BlockHash>,
) -> Result<()> {
    let client = super::connect(config).await?;
    let reader = client.reader(metadata);

    let authorities = read(&reader, &storage().aura().authorities(), at).await?;
    display::section(&format!("Aura authorities ({})", authorities.len()));
    for (i, authority) in authorities.iter().enumerate() {
        display::field(
            &format!("#{i}"),
            &AccountId32::from(*authority).to_ss58check(),
        );
    }
    display::close_section();
    Ok(())
}
