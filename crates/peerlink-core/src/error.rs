// SPDX-License-Identifier: Apache-2.0
//
// Unified error types for PeerLink.

use thiserror::Error;

/// Top-level error type for all PeerLink operations.
#[derive(Debug, Error)]
pub enum PeerlinkError {
    // -- Shell errors --
    #[error("webview error: {0}")]
    WebView(String),

    #[error("window creation failed: {0}")]
    Window(String),

    // -- Script bridge --
    #[error("malformed bridge request: {0}")]
    BridgeRequest(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PeerlinkError>;
