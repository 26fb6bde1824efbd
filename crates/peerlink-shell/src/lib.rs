// SPDX-License-Identifier: Apache-2.0
//
// PeerLink — Shell logic: permission gate, media library, file chooser
// relay, navigation history, and the script bridge.
//
// Everything in this crate is toolkit-free and single-threaded by design.
// The app crate owns the webview and the OS dialogs and plugs them in at the
// trait seams defined here.

pub mod bridge;
pub mod chooser;
pub mod media;
pub mod navigation;
pub mod permissions;

pub use bridge::{BridgeAction, BridgeReply, BridgeRequest, ScriptBridge};
pub use chooser::{DocumentPicker, FileChooserRelay};
pub use media::MediaLibrary;
pub use navigation::{BackAction, NavigationHistory};
pub use permissions::{CapabilityProber, PermissionGate, PermissionPrompter};
