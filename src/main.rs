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
//! Wetee CLI - Command-line interface for the Wetee parachain.
//!
//! Derives storage keys offline and reads chain state from a node.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wetee_client::blockchain::{Client, Config};
use wetee_client::types::BlockHash;

// CLI-specific modules (display and commands)
mod commands;
mod display;

#[derive(Parser)]
#[command(name = "wetee")]
#[command(version, about = "Wetee CLI - Confidential computing parachain", long_about = None)]
struct Cli {
    /// WebSocket URL for blockchain connection
    #[arg(long, env = "WETEE_WS_URL")]
    ws_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to JSON metadata registry (overrides the built-in one)
    #[arg(long)]
    metadata: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pallets, calls and storage items of the metadata registry
    Pallets,

    /// Derive a storage key without connecting to a node
    #[command(long_about = "Derive a storage key without connecting to a node.

Key arguments are SCALE encoded values in hex, one per hasher of the item.

EXAMPLES:
    # Plain value
    wetee key System Number

    # Map entry keyed by u128 call id 1
    wetee key WeteeBridge TEECalls --key 0x01000000000000000000000000000000")]
    Key {
        /// Pallet name
        pallet: String,

        /// Storage item name
        item: String,

        /// SCALE encoded key argument in hex (repeat for double maps)
        #[arg(long = "key")]
        keys: Vec<String>,
    },

    /// Fetch the raw value of a storage item
    #[command(long_about = "Fetch the raw value of a storage item.

Absent items with a registry default show the default value.

EXAMPLES:
    # Latest finalized value
    wetee get ParachainInfo ParachainId

    # At a specific block
    wetee get System Number --at 0x1f0c...")]
    Get {
        /// Pallet name
        pallet: String,

        /// Storage item name
        item: String,

        /// SCALE encoded key argument in hex (repeat for double maps)
        #[arg(long = "key")]
        keys: Vec<String>,

        /// Block hash to query at (latest finalized if omitted)
        #[arg(long, value_parser = commands::parse_block_hash)]
        at: Option<BlockHash>,
    },

    /// Show the parachain id
    ParachainId {
        /// Block hash to query at (latest finalized if omitted)
        #[arg(long, value_parser = commands::parse_block_hash)]
        at: Option<BlockHash>,
    },

    /// Show the Aura block authorities
    Authorities {
        /// Block hash to query at (latest finalized if omitted)
        #[arg(long, value_parser = commands::parse_block_hash)]
        at: Option<BlockHash>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(ws_url) = cli.ws_url {
        config.ws_url = ws_url;
    }
    if let Some(metadata) = cli.metadata {
        config.metadata = Some(metadata);
    }

    let metadata = Client::metadata(&config).context("Failed to load metadata registry")?;

    match cli.command {
        Commands::Pallets => commands::pallets::execute(&metadata),
        Commands::Key { pallet, item, keys } => {
            commands::key::execute(&metadata, &pallet, &item, &commands::parse_keys(&keys)?)
        }
        Commands::Get {
            pallet,
            item,
            keys,
            at,
        } => {
            let keys = commands::parse_keys(&keys)?;
            commands::get::execute(&config, metadata, &pallet, &item, &keys, at).await
        }
        Commands::ParachainId { at } => commands::chain::parachain_id(&config, metadata, at).await,
        Commands::Authorities { at } => commands::chain::authorities(&config, metadata, at).await,
    }
}
