// SPDX-License-Identifier: MPL-2.0
//! Account gateway port definition.
//!
//! This module defines the [`AccountGateway`] trait standing in for the
//! remote GoBarber account service. Adapters implement it to provide the
//! concrete transport; the desktop build ships an in-memory one.
//!
//! # Design Notes
//!
//! - Methods are not `async` - callers wrap the call in an Iced `Task`
//! - The trait is `Send + Sync` so one adapter can serve the whole task pool
//! - Credential storage policy (hashing, lockout) belongs to adapters

use std::fmt;

/// Sign-in form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Password-reset form data.
///
/// The web client identifies the account through a `?token=` link; the
/// desktop client has no inbound URL, so the e-mail is part of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReset {
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// The signed-in account as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// Errors reported by an account gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// E-mail/password pair did not match an account.
    InvalidCredentials,

    /// Registration attempted with an e-mail that already has an account.
    EmailAlreadyRegistered,

    /// Password reset attempted for an unknown e-mail.
    AccountNotFound,
}

impl GatewayError {
    /// Returns the i18n message key describing this failure to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GatewayError::InvalidCredentials => "gateway-invalid-credentials",
            GatewayError::EmailAlreadyRegistered => "gateway-email-taken",
            GatewayError::AccountNotFound => "gateway-account-not-found",
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::InvalidCredentials => write!(f, "Invalid e-mail/password combination"),
            GatewayError::EmailAlreadyRegistered => write!(f, "E-mail is already registered"),
            GatewayError::AccountNotFound => write!(f, "No account for this e-mail"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Port for the account service.
///
/// Implementations own the full account lifecycle used by this client:
/// session creation, registration, and password recovery.
pub trait AccountGateway: Send + Sync {
    /// Exchanges credentials for the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidCredentials`] when the pair does not
    /// match an account. Unknown e-mail and wrong password are not
    /// distinguished.
    fn sign_in(&self, credentials: &Credentials) -> Result<Profile, GatewayError>;

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmailAlreadyRegistered`] when the e-mail is
    /// taken.
    fn sign_up(&self, registration: &Registration) -> Result<(), GatewayError>;

    /// Replaces the password of an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::AccountNotFound`] when no account matches the
    /// e-mail.
    fn reset_password(&self, reset: &PasswordReset) -> Result<(), GatewayError>;
}
