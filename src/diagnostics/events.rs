// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the various types of events that can be captured
//! during application usage for diagnostic purposes.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
///
/// These actions represent meaningful user interactions that help
/// understand what the user was doing when issues occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Submit the sign-in form.
    SubmitSignIn,

    /// Submit the registration form.
    SubmitSignUp,

    /// Submit the password-reset form.
    SubmitPasswordReset,

    /// Sign out from the dashboard.
    SignOut,

    /// Manually dismiss a toast notification.
    DismissToast,

    /// Navigate between screens.
    SwitchScreen {
        /// Target screen name.
        to: String,
    },
}

/// An error surfaced to the user.
///
/// Error toasts are mirrored here so the recent-activity log shows what went
/// wrong even after the toast expired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    /// Human-readable error summary (the toast title).
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A diagnostic event with its timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        /// The specific action performed.
        action: UserAction,
        /// Optional additional details (e.g., which field failed).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// An error surfaced to the user.
    Error {
        /// The error details.
        error: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_actions_serialize_with_snake_case_tag() {
        let action = toml::to_string(&UserAction::SwitchScreen {
            to: "dashboard".to_string(),
        })
        .unwrap();
        assert!(action.contains("switch_screen"));
        assert!(action.contains("dashboard"));
    }

    #[test]
    fn event_carries_its_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            error: ErrorEvent::new("Erro no login"),
        });
        assert!(event.timestamp >= before);
    }
}
