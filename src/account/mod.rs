// SPDX-License-Identifier: MPL-2.0
//! Account layer - use cases and orchestration for account operations.
//!
//! This module sits between the UI screens and whatever implements the
//! account service:
//!
//! - [`port`]: the [`AccountGateway`] trait (interface) for dependency inversion
//! - [`directory`]: the in-memory gateway adapter used by the desktop build
//! - [`validation`]: field validators mirroring the service's form rules
//! - [`outcome`]: the discriminated submission result consumed by the UI
//!
//! # Dependency Rule
//!
//! Screens never talk to a gateway directly; they hand their form data to the
//! `submit_*` use cases below, which validate first and only then consult the
//! gateway. The result is always a [`SubmitOutcome`], so callers branch on an
//! explicit tag instead of catching anything.

pub mod directory;
pub mod outcome;
pub mod port;
pub mod validation;

pub use directory::InMemoryAccounts;
pub use outcome::SubmitOutcome;
pub use port::{AccountGateway, Credentials, GatewayError, PasswordReset, Profile, Registration};
pub use validation::{Field, FieldErrors};

/// Validates sign-in input and, when clean, asks the gateway for a session.
pub fn submit_sign_in(
    gateway: &dyn AccountGateway,
    credentials: &Credentials,
) -> SubmitOutcome<Profile> {
    if let Err(errors) = validation::validate_sign_in(credentials) {
        return SubmitOutcome::ValidationFailed(errors);
    }
    match gateway.sign_in(credentials) {
        Ok(profile) => SubmitOutcome::Accepted(profile),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Validates registration input and, when clean, registers the account.
pub fn submit_sign_up(
    gateway: &dyn AccountGateway,
    registration: &Registration,
) -> SubmitOutcome<()> {
    if let Err(errors) = validation::validate_sign_up(registration) {
        return SubmitOutcome::ValidationFailed(errors);
    }
    match gateway.sign_up(registration) {
        Ok(()) => SubmitOutcome::Accepted(()),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Validates password-reset input and, when clean, rewrites the password.
pub fn submit_password_reset(
    gateway: &dyn AccountGateway,
    reset: &PasswordReset,
) -> SubmitOutcome<()> {
    if let Err(errors) = validation::validate_password_reset(reset) {
        return SubmitOutcome::ValidationFailed(errors);
    }
    match gateway.reset_password(reset) {
        Ok(()) => SubmitOutcome::Accepted(()),
        Err(err) => SubmitOutcome::Failed(err),
    }
}
