// SPDX-License-Identifier: Apache-2.0
//
// Application configuration, persisted as JSON in the data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_FILE: &str = "config.json";

/// Persistent shell settings.
///
/// The hosted bundle carries all application behavior; the shell only keeps
/// the handful of knobs needed to bootstrap it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Window title shown by the host OS.
    pub window_title: String,
    /// Absolute path to the bundle entry point (`index.html`). When absent
    /// or missing on disk the shell falls back to a built-in placeholder.
    pub entry_point: Option<PathBuf>,
    /// Allow media autoplay without a user gesture.
    pub autoplay: bool,
    /// Open the embedded engine's devtools alongside the content.
    pub devtools: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "PeerLink".to_string(),
            entry_point: None,
            autoplay: true,
            devtools: false,
        }
    }
}

impl ShellConfig {
    /// Load the config from `<data_dir>/config.json`, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);
        let Ok(data) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    /// Persist the config to `<data_dir>/config.json`.
    pub fn persist(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ShellConfig::load(dir.path());
        assert_eq!(config.window_title, "PeerLink");
        assert!(config.entry_point.is_none());
        assert!(config.autoplay);
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ShellConfig {
            window_title: "Kiosk".to_string(),
            entry_point: Some(PathBuf::from("/opt/bundle/index.html")),
            autoplay: false,
            devtools: true,
        };
        config.persist(dir.path()).expect("persist");

        let loaded = ShellConfig::load(dir.path());
        assert_eq!(loaded.window_title, "Kiosk");
        assert_eq!(
            loaded.entry_point.as_deref(),
            Some(Path::new("/opt/bundle/index.html"))
        );
        assert!(!loaded.autoplay);
        assert!(loaded.devtools);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").expect("write");
        let config = ShellConfig::load(dir.path());
        assert_eq!(config.window_title, "PeerLink");
    }
}
