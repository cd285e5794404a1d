// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::account::{Profile, SubmitOutcome};
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::reset_password;
use crate::ui::sign_in;
use crate::ui::sign_up;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    SignUp(sign_up::Message),
    ResetPassword(reset_password::Message),
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// Result of a sign-in submission.
    SignInCompleted(SubmitOutcome<Profile>),
    /// Result of a registration submission; the name feeds the welcome toast.
    SignUpCompleted {
        name: String,
        outcome: SubmitOutcome<()>,
    },
    /// Result of a password-reset submission.
    PasswordResetCompleted(SubmitOutcome<()>),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
