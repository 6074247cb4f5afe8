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
//! Pallets command implementation.

use crate::display;
use anyhow::Result;
use wetee_client::metadata::{Metadata, StorageModifier};

pub fn execute(metadata: &Metadata) -> Result<()> {
    display::info(&format!(
        "Metadata registry, spec version {}",
        metadata.spec_version
    ));

    for pallet in &metadata.pallets {
        display::section(&format!("{} #{}", pallet.name, pallet.index));
        for call in &pallet.calls {
            let args: Vec<_> = call
                .args
                .iter()
                .map(|arg| format!("{}: {}", arg.name, arg.ty))
                .collect();
            display::field(
                &format!("call {}", call.index),
                &format!("{}({})", call.name, args.join(", ")),
            );
        }
        for entry in &pallet.storage {
            let value_ty = match entry.modifier {
                StorageModifier::Optional => format!("Option<{}>", entry.value_ty),
                StorageModifier::Default => entry.value_ty.clone(),
            };
            let keys = if entry.key_ty.is_empty() {
                String::new()
            } else {
                format!("[{}] ", entry.key_ty.join(", "))
            };
            display::field("storage", &format!("{} {}-> {}", entry.name, keys, value_ty));
        }
        display::close_section();
    }

    Ok(())
}
