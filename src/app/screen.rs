// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    ResetPassword,
    Dashboard,
}

impl Screen {
    /// Stable name used in diagnostics events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::SignIn => "sign_in",
            Screen::SignUp => "sign_up",
            Screen::ResetPassword => "reset_password",
            Screen::Dashboard => "dashboard",
        }
    }
}
