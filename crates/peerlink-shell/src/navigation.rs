// SPDX-License-Identifier: Apache-2.0
//
// Navigation policy and back-navigation history.
//
// Every navigation stays inside the shell's own webview — there is no
// external browser handoff. The webview engine does not expose its internal
// back stack, so the shell tracks committed navigations itself and replays
// the previous entry on a back action.

use tracing::debug;

/// What a back action should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackAction {
    /// Load the previous history entry back into the webview.
    Navigate(String),
    /// History is empty — fall through to default shell-exit behavior.
    Exit,
}

/// Linear history of committed in-shell navigations.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    stack: Vec<String>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed navigation. Reloads of the current entry are not
    /// stacked.
    pub fn record(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.stack.last().map(String::as_str) == Some(url.as_str()) {
            return;
        }
        debug!(%url, "navigation recorded");
        self.stack.push(url);
    }

    /// Whether a back action would navigate rather than exit.
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Consume one back action: pop the current entry and return the one
    /// beneath it, or `Exit` when there is nothing to go back to.
    pub fn back(&mut self) -> BackAction {
        if self.stack.len() > 1 {
            self.stack.pop();
            // len was > 1, so an entry remains.
            match self.stack.last() {
                Some(previous) => BackAction::Navigate(previous.clone()),
                None => BackAction::Exit,
            }
        } else {
            BackAction::Exit
        }
    }

    /// Number of entries currently stacked.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
