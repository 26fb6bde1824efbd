// SPDX-License-Identifier: Apache-2.0
//
// Startup permission gate.
//
// On every launch the gate re-evaluates the fixed capability list against the
// platform's reported grant state, batches everything not yet granted into a
// single request, and surfaces one warning if any outcome comes back denied.
// Denials are not persisted and nothing is retried.

use peerlink_core::types::{Capability, GrantStatus, PermissionOutcome};
use tracing::{debug, info, warn};

/// Capabilities the shell requests on behalf of the hosted content.
pub const REQUIRED_CAPABILITIES: [Capability; 4] = [
    Capability::Camera,
    Capability::Microphone,
    Capability::StorageRead,
    Capability::StorageWrite,
];

/// Reports the current grant state of a capability.
///
/// Implemented by the app crate against whatever the host platform exposes;
/// tests use a fixed map.
pub trait CapabilityProber {
    fn status(&self, capability: Capability) -> GrantStatus;
}

/// Issues the batched permission request and shows the denial warning.
pub trait PermissionPrompter {
    /// Present one request covering the whole batch and return a parallel
    /// array of outcomes.
    fn request(&self, batch: &[Capability]) -> Vec<PermissionOutcome>;

    /// One-shot user-visible warning after a batch with at least one denial.
    fn warn_denied(&self, message: &str);
}

/// Startup permission bookkeeping.
#[derive(Debug, Default)]
pub struct PermissionGate;

impl PermissionGate {
    pub fn new() -> Self {
        Self
    }

    /// The subset of `REQUIRED_CAPABILITIES` not currently granted.
    pub fn request_batch(&self, prober: &dyn CapabilityProber) -> Vec<Capability> {
        REQUIRED_CAPABILITIES
            .into_iter()
            .filter(|cap| prober.status(*cap) == GrantStatus::Denied)
            .collect()
    }

    /// Handle the result array of a batched request. Returns whether the
    /// denial warning was shown.
    pub fn on_results(
        &self,
        outcomes: &[PermissionOutcome],
        prompter: &dyn PermissionPrompter,
    ) -> bool {
        let denied: Vec<_> = outcomes
            .iter()
            .filter(|o| o.status != GrantStatus::Granted)
            .map(|o| o.capability)
            .collect();

        if denied.is_empty() {
            debug!("all requested capabilities granted");
            return false;
        }

        warn!(?denied, "capabilities denied");
        prompter.warn_denied("Permissions are required for full app functionality");
        true
    }

    /// Run the gate once: compute the missing batch, issue one request if it
    /// is non-empty, and process the results.
    pub fn run(&self, prober: &dyn CapabilityProber, prompter: &dyn PermissionPrompter) {
        let batch = self.request_batch(prober);
        if batch.is_empty() {
            debug!("all capabilities already granted");
            return;
        }

        info!(batch = ?batch, "requesting capabilities");
        let outcomes = prompter.request(&batch);
        self.on_results(&outcomes, prompter);
    }
}
