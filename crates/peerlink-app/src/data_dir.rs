// SPDX-License-Identifier: Apache-2.0
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

/// Return the app's sandbox root, creating it if needed.
///
/// This is the per-app storage directory other apps cannot reach; the media
/// directory and the persisted config both live underneath it.
pub fn data_dir() -> PathBuf {
    let base = dirs_fallback();
    let dir = base.join("peerlink");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from("/tmp")
}
