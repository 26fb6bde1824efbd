// SPDX-License-Identifier: Apache-2.0
//
// Script bridge: the narrow call surface the shell exposes to the hosted
// content.
//
// Requests arrive over the webview IPC channel as JSON `{id, cmd}` messages;
// replies are rendered as a `window.__peerlink_deliver(id, payload)` script
// evaluated back into the page. An initialization script installs the
// promise-returning `MediaInterface` and `FileChooser` objects the bundle
// calls.

use peerlink_core::error::{PeerlinkError, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::media::MediaLibrary;

/// Injected into every page before the bundle's own scripts run.
pub const INIT_SCRIPT: &str = r#"
(function () {
    if (window.MediaInterface) { return; }
    var pending = new Map();
    var nextId = 1;
    function call(cmd) {
        return new Promise(function (resolve) {
            var id = nextId++;
            pending.set(id, resolve);
            window.ipc.postMessage(JSON.stringify({ id: id, cmd: cmd }));
        });
    }
    window.__peerlink_deliver = function (id, payload) {
        var resolve = pending.get(id);
        if (resolve) {
            pending.delete(id);
            resolve(payload);
        }
    };
    window.MediaInterface = {
        getMediaDirectory: function () { return call("get_media_directory"); },
        getMediaFiles: function () { return call("get_media_files"); }
    };
    window.FileChooser = {
        open: function () { return call("open_file_chooser"); }
    };
})();
"#;

/// Operations callable from the hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeCommand {
    GetMediaDirectory,
    GetMediaFiles,
    OpenFileChooser,
}

/// One parsed IPC message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BridgeRequest {
    pub id: u64,
    pub cmd: BridgeCommand,
}

/// A reply ready to be evaluated back into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeReply {
    pub id: u64,
    pub payload: Value,
}

impl BridgeReply {
    /// Render the delivery script. The payload is serialized JSON, which is
    /// also a valid JavaScript literal.
    pub fn to_script(&self) -> String {
        format!("window.__peerlink_deliver({}, {});", self.id, self.payload)
    }

    /// Reply for a resolved file chooser session: an array of paths, or
    /// `null` on cancellation.
    pub fn chooser(id: u64, selection: Option<Vec<String>>) -> Self {
        let payload = match selection {
            Some(paths) => json!(paths),
            None => Value::Null,
        };
        Self { id, payload }
    }
}

/// What the shell must do for a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeAction {
    /// Synchronous read — deliver this reply immediately.
    Reply(BridgeReply),
    /// Hand the request to the file chooser relay; the reply is delivered
    /// when the picker session resolves.
    OpenChooser { id: u64 },
}

/// Dispatcher for the script-callable operations.
#[derive(Debug, Clone)]
pub struct ScriptBridge {
    media: MediaLibrary,
}

impl ScriptBridge {
    pub fn new(media: MediaLibrary) -> Self {
        Self { media }
    }

    /// Parse one raw IPC message body.
    pub fn parse(&self, raw: &str) -> Result<BridgeRequest> {
        serde_json::from_str(raw)
            .map_err(|e| PeerlinkError::BridgeRequest(format!("{e}: {raw}")))
    }

    /// Dispatch a parsed request. The two media queries are answered
    /// synchronously; the chooser is deferred to the relay.
    pub fn dispatch(&self, request: BridgeRequest) -> BridgeAction {
        debug!(id = request.id, cmd = ?request.cmd, "bridge request");
        match request.cmd {
            BridgeCommand::GetMediaDirectory => BridgeAction::Reply(BridgeReply {
                id: request.id,
                payload: json!(self.media.media_dir().to_string_lossy()),
            }),
            BridgeCommand::GetMediaFiles => BridgeAction::Reply(BridgeReply {
                id: request.id,
                payload: json!(self.media.media_files()),
            }),
            BridgeCommand::OpenFileChooser => BridgeAction::OpenChooser { id: request.id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge_in(dir: &std::path::Path) -> ScriptBridge {
        ScriptBridge::new(MediaLibrary::new(dir))
    }

    #[test]
    fn parses_well_formed_requests() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let bridge = bridge_in(sandbox.path());

        let req = bridge
            .parse(r#"{"id": 7, "cmd": "get_media_files"}"#)
            .expect("parse");
        assert_eq!(req.id, 7);
        assert_eq!(req.cmd, BridgeCommand::GetMediaFiles);
    }

    #[test]
    fn rejects_unknown_commands_and_garbage() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let bridge = bridge_in(sandbox.path());

        assert!(bridge.parse(r#"{"id": 1, "cmd": "format_disk"}"#).is_err());
        assert!(bridge.parse("not json").is_err());
        assert!(bridge.parse(r#"{"cmd": "get_media_files"}"#).is_err());
    }

    #[test]
    fn media_directory_reply_carries_the_fixed_path() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let bridge = bridge_in(sandbox.path());

        let action = bridge.dispatch(BridgeRequest {
            id: 3,
            cmd: BridgeCommand::GetMediaDirectory,
        });
        let BridgeAction::Reply(reply) = action else {
            panic!("expected reply");
        };
        assert_eq!(reply.id, 3);
        let path = reply.payload.as_str().expect("string payload");
        assert!(path.ends_with("medien"));
    }

    #[test]
    fn media_files_reply_lists_directory_entries() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let library = MediaLibrary::new(sandbox.path());
        library.provision();
        std::fs::write(library.media_dir().join("clip.mp4"), b"x").expect("write");

        let bridge = ScriptBridge::new(library);
        let action = bridge.dispatch(BridgeRequest {
            id: 4,
            cmd: BridgeCommand::GetMediaFiles,
        });
        let BridgeAction::Reply(reply) = action else {
            panic!("expected reply");
        };
        assert_eq!(reply.payload, json!(["clip.mp4"]));
    }

    #[test]
    fn chooser_request_is_deferred() {
        let sandbox = tempfile::tempdir().expect("tempdir");
        let bridge = bridge_in(sandbox.path());

        let action = bridge.dispatch(BridgeRequest {
            id: 9,
            cmd: BridgeCommand::OpenFileChooser,
        });
        assert_eq!(action, BridgeAction::OpenChooser { id: 9 });
    }

    #[test]
    fn reply_script_is_a_deliver_call() {
        let reply = BridgeReply {
            id: 12,
            payload: json!(["a.jpg", "b.jpg"]),
        };
        assert_eq!(
            reply.to_script(),
            r#"window.__peerlink_deliver(12, ["a.jpg","b.jpg"]);"#
        );
    }

    #[test]
    fn cancelled_chooser_reply_is_null() {
        let reply = BridgeReply::chooser(5, None);
        assert_eq!(reply.to_script(), "window.__peerlink_deliver(5, null);");

        let reply = BridgeReply::chooser(6, Some(vec!["/tmp/u".to_string()]));
        assert_eq!(reply.payload, json!(["/tmp/u"]));
    }
}
