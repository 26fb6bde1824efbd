// SPDX-License-Identifier: Apache-2.0
//
// File chooser relay: a one-outstanding-request handshake between the hosted
// content's "choose file" trigger and the OS document picker.
//
// The relay holds at most one pending handle. A new trigger while one is
// pending overwrites the prior handle, which is then never resolved. This is
// a known gap in the original contract that hosted bundles rely on not
// crashing, so it is kept (and logged) rather than turned into a queue.

use peerlink_core::types::{PickOutcome, PickRequest};
use tracing::{debug, warn};

/// Callback handle representing "the hosted content is waiting for a file
/// selection". Receives `Some` with the relayed selection or `None` on
/// cancellation, exactly once.
pub type ChoiceHandle = Box<dyn FnOnce(Option<Vec<String>>)>;

/// Opens the OS document picker for a request and returns its outcome.
///
/// The app crate implements this with the native file dialog; tests use
/// scripted outcomes.
pub trait DocumentPicker {
    fn pick(&self, request: &PickRequest) -> PickOutcome;
}

/// Single-slot request/response relay between chooser triggers and picker
/// results.
#[derive(Default)]
pub struct FileChooserRelay {
    pending: Option<ChoiceHandle>,
}

impl FileChooserRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is outstanding.
    pub fn is_awaiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Transition idle → awaiting: store the handle and describe the picker
    /// session to launch (any type, multi-select, user-facing title).
    ///
    /// Re-entry while awaiting orphans the previous handle.
    pub fn begin(&mut self, handle: ChoiceHandle) -> PickRequest {
        if self.pending.is_some() {
            warn!("file chooser re-entered while awaiting; orphaning previous request");
        }
        self.pending = Some(handle);
        PickRequest::default()
    }

    /// Transition awaiting → idle: deliver the picker outcome to the stored
    /// handle exactly once. A result with no pending handle is dropped.
    ///
    /// Only the first selected path is relayed even when the picker returned
    /// several — multi-selection is not supported end-to-end.
    pub fn resolve(&mut self, outcome: PickOutcome) {
        let Some(handle) = self.pending.take() else {
            debug!("picker result arrived with no pending request");
            return;
        };

        let result = match outcome {
            PickOutcome::Chosen(mut paths) if !paths.is_empty() => {
                paths.truncate(1);
                Some(paths)
            }
            _ => None,
        };
        handle(result);
    }
}

impl std::fmt::Debug for FileChooserRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChooserRelay")
            .field("awaiting", &self.pending.is_some())
            .finish()
    }
}
