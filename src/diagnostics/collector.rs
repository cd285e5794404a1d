// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector is a bounded in-memory log shared through a clone-able
//! [`DiagnosticsHandle`]. Writers never block and never fail: on a poisoned
//! lock the event is dropped, since diagnostics must not take the UI down.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction};
use std::sync::{Arc, Mutex};

/// Clone-able handle for logging and reading diagnostic events.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    events: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsHandle {
    /// Creates a handle backed by a fresh buffer of the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Logs a user action event.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details,
        }));
    }

    /// Logs an error surfaced to the user.
    pub fn log_error(&self, error: ErrorEvent) {
        self.push(DiagnosticEvent::new(DiagnosticEventKind::Error { error }));
    }

    /// Returns a chronological snapshot of the captured events.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of events currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    /// Returns true when no events have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, event: DiagnosticEvent) {
        if let Ok(mut buffer) = self.events.lock() {
            buffer.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_clones_share_the_buffer() {
        let handle = DiagnosticsHandle::default();
        let clone = handle.clone();

        clone.log_action(UserAction::SubmitSignIn);
        handle.log_error(ErrorEvent::new("Erro no login"));

        assert_eq!(handle.len(), 2);
        assert_eq!(clone.len(), 2);
    }

    #[test]
    fn snapshot_preserves_chronological_order() {
        let handle = DiagnosticsHandle::new(BufferCapacity::new(16));
        handle.log_action(UserAction::SubmitSignUp);
        handle.log_error(ErrorEvent::new("Erro no cadastro"));

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0].kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::SubmitSignUp,
                ..
            }
        ));
        assert!(matches!(events[1].kind, DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn old_events_are_evicted_at_capacity() {
        let handle = DiagnosticsHandle::new(BufferCapacity::new(16));
        for _ in 0..20 {
            handle.log_action(UserAction::DismissToast);
        }
        assert_eq!(handle.len(), 16);
    }
}
