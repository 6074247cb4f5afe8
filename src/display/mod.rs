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
//! Terminal output helpers.

use colored::*;

/// Print a progress message
pub fn progress(msg: &str) {
    println!("{} {}", "⏳".cyan(), msg.cyan());
}

/// Print an informational message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green());
}

/// Print a section header
pub fn section(title: &str) {
    println!("\n{}", format!("  ┌─[ {title} ]").bright_yellow().bold());
}

/// Print a labelled value inside a section
pub fn field(label: &str, value: &str) {
    println!(
        "{}  {} {}",
        "  ├─".bright_black(),
        format!("{label}:").bright_yellow(),
        value.bright_white()
    );
}

/// Print a placeholder for a missing value
pub fn empty(label: &str) {
    println!(
        "{}  {} {}",
        "  ├─".bright_black(),
        format!("{label}:").bright_yellow(),
        "<empty>".bright_black()
    );
}

/// Close a section
pub fn close_section() {
    println!("{}", "  └─".bright_yellow());
}
