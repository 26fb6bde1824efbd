// SPDX-License-Identifier: Apache-2.0
//
// PeerLink — Core types, errors, and configuration shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::ShellConfig;
pub use error::PeerlinkError;
pub use types::*;
