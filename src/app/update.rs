// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for each screen.
//! Screens validate nothing themselves: their `Submit` events carry the raw
//! form data, the account use cases classify it, and the outcome comes back
//! as a message that either sets inline field errors or pushes a toast.

use super::{Message, Screen};
use crate::account::{self, AccountGateway, Profile, SubmitOutcome};
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::reset_password::{self, Event as ResetPasswordEvent};
use crate::ui::sign_in::{self, Event as SignInEvent};
use crate::ui::sign_up::{self, Event as SignUpEvent};
use iced::Task;
use std::sync::Arc;

/// Mutable slice of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub sign_in: &'a mut sign_in::State,
    pub sign_up: &'a mut sign_up::State,
    pub reset_password: &'a mut reset_password::State,
    pub profile: &'a mut Option<Profile>,
    pub notifications: &'a mut notifications::Manager,
    pub accounts: &'a Arc<dyn AccountGateway>,
    pub diagnostics: &'a DiagnosticsHandle,
}

pub fn handle_sign_in_message(ctx: &mut UpdateContext<'_>, message: sign_in::Message) -> Task<Message> {
    match sign_in::update(ctx.sign_in, message) {
        SignInEvent::None => Task::none(),
        SignInEvent::GoToSignUp => {
            switch_screen(ctx, Screen::SignUp);
            Task::none()
        }
        SignInEvent::GoToResetPassword => {
            // Carry the typed e-mail over; the reset form needs one anyway
            ctx.reset_password.prefill_email(ctx.sign_in.email());
            switch_screen(ctx, Screen::ResetPassword);
            Task::none()
        }
        SignInEvent::Submit(credentials) => {
            ctx.diagnostics.log_action(UserAction::SubmitSignIn);
            ctx.sign_in.set_submitting(true);
            let gateway = Arc::clone(ctx.accounts);
            Task::perform(
                async move { account::submit_sign_in(gateway.as_ref(), &credentials) },
                Message::SignInCompleted,
            )
        }
    }
}

pub fn handle_sign_up_message(ctx: &mut UpdateContext<'_>, message: sign_up::Message) -> Task<Message> {
    match sign_up::update(ctx.sign_up, message) {
        SignUpEvent::None => Task::none(),
        SignUpEvent::GoToSignIn => {
            switch_screen(ctx, Screen::SignIn);
            Task::none()
        }
        SignUpEvent::Submit(registration) => {
            ctx.diagnostics.log_action(UserAction::SubmitSignUp);
            ctx.sign_up.set_submitting(true);
            let gateway = Arc::clone(ctx.accounts);
            let name = registration.name.clone();
            Task::perform(
                async move { account::submit_sign_up(gateway.as_ref(), &registration) },
                move |outcome| Message::SignUpCompleted {
                    name: name.clone(),
                    outcome,
                },
            )
        }
    }
}

pub fn handle_reset_password_message(
    ctx: &mut UpdateContext<'_>,
    message: reset_password::Message,
) -> Task<Message> {
    match reset_password::update(ctx.reset_password, message) {
        ResetPasswordEvent::None => Task::none(),
        ResetPasswordEvent::GoToSignIn => {
            switch_screen(ctx, Screen::SignIn);
            Task::none()
        }
        ResetPasswordEvent::Submit(reset) => {
            ctx.diagnostics.log_action(UserAction::SubmitPasswordReset);
            ctx.reset_password.set_submitting(true);
            let gateway = Arc::clone(ctx.accounts);
            Task::perform(
                async move { account::submit_password_reset(gateway.as_ref(), &reset) },
                Message::PasswordResetCompleted,
            )
        }
    }
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message) {
        DashboardEvent::SignOut => {
            ctx.diagnostics.log_action(UserAction::SignOut);
            *ctx.profile = None;
            switch_screen(ctx, Screen::SignIn);
            Task::none()
        }
    }
}

pub fn handle_sign_in_completed(
    ctx: &mut UpdateContext<'_>,
    outcome: SubmitOutcome<Profile>,
) -> Task<Message> {
    ctx.sign_in.set_submitting(false);
    match outcome {
        SubmitOutcome::Accepted(profile) => {
            *ctx.profile = Some(profile);
            ctx.sign_in.reset_after_navigation();
            switch_screen(ctx, Screen::Dashboard);
        }
        SubmitOutcome::ValidationFailed(errors) => {
            ctx.sign_in.set_errors(errors);
        }
        SubmitOutcome::Failed(err) => {
            ctx.notifications.push(
                Notification::error(ctx.i18n.tr("toast-signin-error-title"))
                    .with_description(ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
    Task::none()
}

pub fn handle_sign_up_completed(
    ctx: &mut UpdateContext<'_>,
    name: &str,
    outcome: SubmitOutcome<()>,
) -> Task<Message> {
    ctx.sign_up.set_submitting(false);
    match outcome {
        SubmitOutcome::Accepted(()) => {
            ctx.sign_up.clear();
            switch_screen(ctx, Screen::SignIn);
            ctx.notifications.push(
                Notification::success(ctx.i18n.tr("toast-signup-success-title"))
                    .with_description(
                        ctx.i18n
                            .tr_with_args("toast-signup-success-description", &[("name", name)]),
                    ),
            );
        }
        SubmitOutcome::ValidationFailed(errors) => {
            ctx.sign_up.set_errors(errors);
        }
        SubmitOutcome::Failed(err) => {
            ctx.notifications.push(
                Notification::error(ctx.i18n.tr("toast-signup-error-title"))
                    .with_description(ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
    Task::none()
}

pub fn handle_password_reset_completed(
    ctx: &mut UpdateContext<'_>,
    outcome: SubmitOutcome<()>,
) -> Task<Message> {
    ctx.reset_password.set_submitting(false);
    match outcome {
        SubmitOutcome::Accepted(()) => {
            ctx.reset_password.clear();
            switch_screen(ctx, Screen::SignIn);
            ctx.notifications.push(
                Notification::success(ctx.i18n.tr("toast-reset-success-title"))
                    .with_description(ctx.i18n.tr("toast-reset-success-description")),
            );
        }
        SubmitOutcome::ValidationFailed(errors) => {
            ctx.reset_password.set_errors(errors);
        }
        SubmitOutcome::Failed(err) => {
            ctx.notifications.push(
                Notification::error(ctx.i18n.tr("toast-reset-error-title"))
                    .with_description(ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
    Task::none()
}

fn switch_screen(ctx: &mut UpdateContext<'_>, to: Screen) {
    if *ctx.screen != to {
        ctx.diagnostics.log_action(UserAction::SwitchScreen {
            to: to.name().to_string(),
        });
    }
    *ctx.screen = to;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::InMemoryAccounts;

    struct Harness {
        i18n: I18n,
        screen: Screen,
        sign_in: sign_in::State,
        sign_up: sign_up::State,
        reset_password: reset_password::State,
        profile: Option<Profile>,
        notifications: notifications::Manager,
        accounts: Arc<dyn AccountGateway>,
        diagnostics: DiagnosticsHandle,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                screen: Screen::SignIn,
                sign_in: sign_in::State::default(),
                sign_up: sign_up::State::default(),
                reset_password: reset_password::State::default(),
                profile: None,
                notifications: notifications::Manager::new(),
                accounts: Arc::new(InMemoryAccounts::default()),
                diagnostics: DiagnosticsHandle::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                screen: &mut self.screen,
                sign_in: &mut self.sign_in,
                sign_up: &mut self.sign_up,
                reset_password: &mut self.reset_password,
                profile: &mut self.profile,
                notifications: &mut self.notifications,
                accounts: &self.accounts,
                diagnostics: &self.diagnostics,
            }
        }
    }

    #[test]
    fn failed_sign_in_pushes_an_error_toast() {
        let mut harness = Harness::new();
        let _ = handle_sign_in_completed(
            &mut harness.ctx(),
            SubmitOutcome::Failed(crate::account::GatewayError::InvalidCredentials),
        );

        assert_eq!(harness.notifications.len(), 1);
        let toast = harness.notifications.iter().next().unwrap();
        assert_eq!(toast.kind(), notifications::Kind::Error);
        assert_eq!(toast.title(), harness.i18n.tr("toast-signin-error-title"));
        assert_eq!(harness.screen, Screen::SignIn);
    }

    #[test]
    fn validation_failure_sets_inline_errors_without_a_toast() {
        use crate::account::{Field, FieldErrors};

        let mut harness = Harness::new();
        let mut errors = FieldErrors::default();
        errors.push(Field::Email, "validation-email-required");

        let _ = handle_sign_in_completed(
            &mut harness.ctx(),
            SubmitOutcome::ValidationFailed(errors),
        );

        assert!(harness.notifications.is_empty());
        assert_eq!(harness.screen, Screen::SignIn);
    }

    #[test]
    fn accepted_sign_in_lands_on_the_dashboard() {
        let mut harness = Harness::new();
        let _ = handle_sign_in_completed(
            &mut harness.ctx(),
            SubmitOutcome::Accepted(Profile {
                name: "Maria".to_string(),
                email: "maria@example.com".to_string(),
            }),
        );

        assert_eq!(harness.screen, Screen::Dashboard);
        assert_eq!(harness.profile.as_ref().unwrap().name, "Maria");
        assert!(harness.notifications.is_empty());
    }

    #[test]
    fn accepted_sign_up_returns_to_sign_in_with_a_welcome_toast() {
        let mut harness = Harness::new();
        harness.screen = Screen::SignUp;

        let _ = handle_sign_up_completed(
            &mut harness.ctx(),
            "Maria",
            SubmitOutcome::Accepted(()),
        );

        assert_eq!(harness.screen, Screen::SignIn);
        assert_eq!(harness.notifications.len(), 1);
        let toast = harness.notifications.iter().next().unwrap();
        assert_eq!(toast.kind(), notifications::Kind::Success);
        assert!(toast.description().unwrap().contains("Maria"));
    }

    #[test]
    fn sign_out_clears_the_profile() {
        let mut harness = Harness::new();
        harness.screen = Screen::Dashboard;
        harness.profile = Some(Profile {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
        });

        let _ = handle_dashboard_message(&mut harness.ctx(), dashboard::Message::SignOut);

        assert_eq!(harness.screen, Screen::SignIn);
        assert!(harness.profile.is_none());
    }

    #[test]
    fn forgot_password_prefills_the_reset_email() {
        let mut harness = Harness::new();
        let _ = handle_sign_in_message(
            &mut harness.ctx(),
            sign_in::Message::EmailChanged("maria@example.com".into()),
        );
        let _ = handle_sign_in_message(&mut harness.ctx(), sign_in::Message::ForgotPassword);

        assert_eq!(harness.screen, Screen::ResetPassword);
    }

    #[test]
    fn submissions_are_recorded_in_diagnostics() {
        let mut harness = Harness::new();
        let _ = handle_sign_in_message(&mut harness.ctx(), sign_in::Message::Submit);

        let events = harness.diagnostics.snapshot();
        assert!(events.iter().any(|event| matches!(
            &event.kind,
            crate::diagnostics::DiagnosticEventKind::UserAction {
                action: UserAction::SubmitSignIn,
                ..
            }
        )));
    }
}
