// SPDX-License-Identifier: Apache-2.0
//
// Desktop implementations of the shell's platform seams: capability
// probing, the permission prompt, and the document picker.

use std::path::PathBuf;

use peerlink_core::types::{Capability, GrantStatus, PermissionOutcome, PickOutcome, PickRequest};
use peerlink_shell::chooser::DocumentPicker;
use peerlink_shell::permissions::{CapabilityProber, PermissionPrompter};
use tracing::{info, warn};

/// One object implementing every platform seam, in the style of a native
/// bridge singleton.
pub struct DesktopPlatform {
    sandbox_root: PathBuf,
}

impl DesktopPlatform {
    pub fn new(sandbox_root: impl Into<PathBuf>) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
        }
    }
}

impl CapabilityProber for DesktopPlatform {
    fn status(&self, capability: Capability) -> GrantStatus {
        match capability {
            // Capture devices are gated per use by the embedded engine, not
            // up front by the shell; report them granted.
            Capability::Camera | Capability::Microphone => GrantStatus::Granted,
            Capability::StorageRead => {
                if std::fs::read_dir(&self.sandbox_root).is_ok() {
                    GrantStatus::Granted
                } else {
                    GrantStatus::Denied
                }
            }
            Capability::StorageWrite => match std::fs::metadata(&self.sandbox_root) {
                Ok(meta) if !meta.permissions().readonly() => GrantStatus::Granted,
                _ => GrantStatus::Denied,
            },
        }
    }
}

impl PermissionPrompter for DesktopPlatform {
    fn request(&self, batch: &[Capability]) -> Vec<PermissionOutcome> {
        // Desktop has no batched OS permission dialog; the answer for the
        // whole batch is whatever the platform reports right now.
        info!(?batch, "probing capability batch");
        batch
            .iter()
            .map(|cap| PermissionOutcome {
                capability: *cap,
                status: self.status(*cap),
            })
            .collect()
    }

    fn warn_denied(&self, message: &str) {
        warn!(message, "showing denial warning");
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("PeerLink")
            .set_description(message)
            .show();
    }
}

impl DocumentPicker for DesktopPlatform {
    fn pick(&self, request: &PickRequest) -> PickOutcome {
        let dialog = rfd::FileDialog::new().set_title(request.title.as_str());
        // `any_type` means no extension filter is applied.

        let picked = if request.allow_multiple {
            dialog.pick_files()
        } else {
            dialog.pick_file().map(|path| vec![path])
        };

        match picked {
            Some(paths) if !paths.is_empty() => PickOutcome::Chosen(
                paths
                    .iter()
                    .map(|path| path.to_string_lossy().into_owned())
                    .collect(),
            ),
            _ => PickOutcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_caps_granted_on_writable_sandbox() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let platform = DesktopPlatform::new(sandbox.path());

        assert_eq!(
            platform.status(Capability::StorageRead),
            GrantStatus::Granted
        );
        assert_eq!(
            platform.status(Capability::StorageWrite),
            GrantStatus::Granted
        );
    }

    #[test]
    fn storage_read_denied_on_missing_sandbox() {
        let platform = DesktopPlatform::new("/nonexistent/peerlink-sandbox");
        assert_eq!(
            platform.status(Capability::StorageRead),
            GrantStatus::Denied
        );
    }

    #[test]
    fn capture_capabilities_report_granted() {
        let platform = DesktopPlatform::new("/anywhere");
        assert_eq!(platform.status(Capability::Camera), GrantStatus::Granted);
        assert_eq!(
            platform.status(Capability::Microphone),
            GrantStatus::Granted
        );
    }
}
