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

pub mod client;

pub use client::{Client, Config};

use subxt::config::DefaultExtrinsicParams;
use subxt::SubstrateConfig;

/// Default set of commonly used types by Wetee nodes.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum WeteeConfig {}

impl subxt::Config for WeteeConfig {
    type AccountId = <SubstrateConfig as subxt::Config>::AccountId;
    type Signature = <SubstrateConfig as subxt::Config>::Signature;
    type Hasher = <SubstrateConfig as subxt::Config>::Hasher;
    type Header = <SubstrateConfig as subxt::Config>::Header;
    type AssetId = <SubstrateConfig as subxt::Config>::AssetId;
    type Address = crate::types::MultiAddress<Self::AccountId, ()>;
    type ExtrinsicParams = DefaultExtrinsicParams<Self>;
}
