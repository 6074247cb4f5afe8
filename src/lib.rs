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
//! # wetee-client - Wetee Parachain Client Library
//!
//! `wetee-client` provides strongly-typed call builders and storage
//! accessors for the Wetee parachain, a confidential computing network
//! built on Substrate.
//!
//! ## Features
//!
//! - **Call Builders**: every dispatchable of the Wetee runtime as a typed
//!   constructor producing a SCALE encoded [`RuntimeCall`]
//! - **Storage Keys**: hashed storage keys derived from the runtime metadata
//! - **Storage Access**: typed reads with registry default values, against a
//!   live node or an in-memory state
//! - **CLI**: `wetee` binary for key derivation and state inspection
//!
//! ## Quick Start
//!
//! ```no_run
//! use wetee_client::runtime::{storage, tx};
//! use wetee_client::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> wetee_client::Result<()> {
//!     // Build a call, ready to be signed and submitted elsewhere
//!     let call = tx().wetee_task().rerun(1);
//!     println!("Encoded call: {}", call.to_hex());
//!
//!     // Read chain state
//!     let config = Config::default();
//!     let client = Client::new(&config).await?;
//!     let reader = client.reader(Client::metadata(&config)?);
//!
//!     let authorities = reader
//!         .fetch_or_default_latest(&storage().aura().authorities())
//!         .await?;
//!     println!("{} authorities", authorities.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`runtime`]: Call builders and typed storage addresses per pallet
//! - [`storage`]: Storage keys, state backends and the typed accessor
//! - [`metadata`]: Runtime metadata registry
//! - [`blockchain`]: Blockchain client and connection management
//! - [`types`]: Wetee pallet type definitions
//!
//! ## Feature Flags
//!
//! - **`cli`** (default) - Enables the `wetee` binary with colored output
//!
//! ```toml
//! # Library only
//! wetee-client = { version = "0.1.0", default-features = false }
//! ```
//!
//! ## Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` to ensure memory safety.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod blockchain;
pub mod error;
pub mod metadata;
pub mod runtime;
pub mod storage;
pub mod types;

// Re-export commonly used types for convenience
pub use blockchain::{Client, Config, WeteeConfig};
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use runtime::RuntimeCall;
pub use storage::{Address, MemoryState, StateQuery, Storage, StorageKey};
