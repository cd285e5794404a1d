// SPDX-License-Identifier: MPL-2.0
//! Discriminated result of a form submission.

use super::port::GatewayError;
use super::validation::FieldErrors;

/// What happened to a submitted form.
///
/// Validation failures stay on the form (inline field errors); gateway
/// failures become error toasts. The two never mix: a form that fails
/// validation is not sent to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The gateway accepted the submission.
    Accepted(T),

    /// The form did not pass local validation; nothing was sent.
    ValidationFailed(FieldErrors),

    /// The gateway rejected the submission.
    Failed(GatewayError),
}

impl<T> SubmitOutcome<T> {
    /// Returns true for [`SubmitOutcome::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}
