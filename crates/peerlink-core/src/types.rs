// SPDX-License-Identifier: Apache-2.0
//
// Core domain types for the PeerLink shell.

use serde::{Deserialize, Serialize};

/// Device capabilities the shell requests on behalf of the hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Camera,
    Microphone,
    StorageRead,
    StorageWrite,
}

impl Capability {
    /// Stable identifier used in logs and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Microphone => "microphone",
            Self::StorageRead => "storage-read",
            Self::StorageWrite => "storage-write",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grant state of a single capability as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantStatus {
    Granted,
    Denied,
}

/// One entry of the parallel result array delivered after a batched
/// permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOutcome {
    pub capability: Capability,
    pub status: GrantStatus,
}

impl PermissionOutcome {
    pub fn granted(capability: Capability) -> Self {
        Self {
            capability,
            status: GrantStatus::Granted,
        }
    }

    pub fn denied(capability: Capability) -> Self {
        Self {
            capability,
            status: GrantStatus::Denied,
        }
    }
}

/// Parameters for one document-picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    /// User-facing chooser title.
    pub title: String,
    /// Wildcard pick — no extension filter is applied.
    pub any_type: bool,
    /// Multi-selection is requested from the picker even though only the
    /// first selection is relayed end-to-end.
    pub allow_multiple: bool,
}

impl Default for PickRequest {
    fn default() -> Self {
        Self {
            title: "Choose a file".to_string(),
            any_type: true,
            allow_multiple: true,
        }
    }
}

/// Result of one document-picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Picker returned with one or more selected paths.
    Chosen(Vec<String>),
    /// Picker was dismissed or returned no data.
    Cancelled,
}
