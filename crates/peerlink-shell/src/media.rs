// SPDX-License-Identifier: Apache-2.0
//
// Media directory provisioning and the two read operations exposed to the
// hosted content.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Fixed subdirectory of the sandbox root that holds user media.
pub const MEDIA_SUBDIR: &str = "medien";

/// The one well-known media directory inside the app sandbox.
///
/// Both the startup provisioner and the script bridge go through this type,
/// so the path formula lives in exactly one place.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    /// `root` is the app's sandbox root (the per-app data directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of the media directory, regardless of whether it exists.
    pub fn media_dir(&self) -> PathBuf {
        self.root.join(MEDIA_SUBDIR)
    }

    /// Create the media directory (and missing parents) if absent.
    ///
    /// Idempotent; creation failure is not surfaced — the query operations
    /// simply report an empty listing later.
    pub fn provision(&self) {
        let dir = self.media_dir();
        if !dir.exists() {
            info!(path = %dir.display(), "creating media directory");
            std::fs::create_dir_all(&dir).ok();
        }
    }

    /// Names of the immediate entries of the media directory, in filesystem
    /// order. Missing or unreadable directories yield an empty list — callers
    /// cannot distinguish "empty" from "error".
    pub fn media_files(&self) -> Vec<String> {
        let names = list_names(&self.media_dir());
        debug!(count = names.len(), "listed media files");
        names
    }
}

fn list_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_dir_is_sandbox_plus_medien() {
        let library = MediaLibrary::new("/data/app");
        assert_eq!(library.media_dir(), PathBuf::from("/data/app/medien"));
    }

    #[test]
    fn media_dir_path_is_returned_even_when_absent() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());
        let dir = library.media_dir();
        assert!(!dir.exists());
        assert!(dir.ends_with(MEDIA_SUBDIR));
    }

    #[test]
    fn provision_creates_directory_and_is_idempotent() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());

        library.provision();
        assert!(library.media_dir().is_dir());

        // Second call is a no-op.
        library.provision();
        assert!(library.media_dir().is_dir());
    }

    #[test]
    fn listing_fresh_directory_is_empty() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());
        library.provision();
        assert!(library.media_files().is_empty());
    }

    #[test]
    fn listing_returns_exactly_the_added_names() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());
        library.provision();

        for name in ["a.jpg", "b.mp4", "c.png"] {
            std::fs::write(library.media_dir().join(name), b"x").expect("write");
        }

        let mut names = library.media_files();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "b.mp4", "c.png"]);
    }

    #[test]
    fn listing_missing_directory_is_empty_not_an_error() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());
        // provision() never called
        assert!(library.media_files().is_empty());
    }
}
