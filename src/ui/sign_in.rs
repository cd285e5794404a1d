// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen.
//!
//! E-mail and password fields, a submit button, and links to registration
//! and password recovery. Validation errors arrive from the parent after a
//! submit attempt and render inline under their fields.

use crate::account::{Credentials, Field, FieldErrors};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::form;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Form state owned by the screen.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    password: String,
    errors: FieldErrors,
    submitting: bool,
}

impl State {
    /// Replaces the inline validation errors.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Marks whether a submission is in flight (disables the button).
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Current e-mail value, used to prefill the reset screen.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Clears the password and errors, keeping the e-mail.
    pub fn reset_after_navigation(&mut self) {
        self.password.clear();
        self.errors = FieldErrors::default();
        self.submitting = false;
    }
}

/// Messages emitted by the sign-in screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    CreateAccount,
    ForgotPassword,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(Credentials),
    GoToSignUp,
    GoToResetPassword,
}

/// Process a screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::Submit => {
            if state.submitting {
                return Event::None;
            }
            state.errors = FieldErrors::default();
            Event::Submit(Credentials {
                email: state.email.trim().to_string(),
                password: state.password.clone(),
            })
        }
        Message::CreateAccount => Event::GoToSignUp,
        Message::ForgotPassword => Event::GoToResetPassword,
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the sign-in screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let error_text = |field: Field| state.errors.get(field).map(|key| i18n.tr(key));

    let email_field = form::field(
        icons::mail(),
        i18n.tr("signin-email-placeholder"),
        &state.email,
        false,
        error_text(Field::Email),
        Message::EmailChanged,
    );
    let password_field = form::field(
        icons::lock(),
        i18n.tr("signin-password-placeholder"),
        &state.password,
        true,
        error_text(Field::Password),
        Message::PasswordChanged,
    );

    let submit = button(
        Text::new(i18n.tr("signin-submit"))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .on_press_maybe((!state.submitting).then_some(Message::Submit));

    let forgot_link = button(Text::new(i18n.tr("signin-forgot-link")).size(typography::BODY))
        .style(styles::button::link(palette::GRAY_100))
        .on_press(Message::ForgotPassword);

    let create_account = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::log_in(),
                palette::PRIMARY_500,
                sizing::ICON_SM,
            ))
            .push(Text::new(i18n.tr("signin-create-account")).size(typography::BODY)),
    )
    .style(styles::button::link(palette::PRIMARY_500))
    .on_press(Message::CreateAccount);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(brand(i18n))
        .push(
            Text::new(i18n.tr("signin-title"))
                .size(typography::TITLE_LG)
                .color(palette::GRAY_100),
        )
        .push(email_field)
        .push(password_field)
        .push(submit)
        .push(forgot_link)
        .push(Container::new(create_account).padding(spacing::LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// The GoBarber wordmark shown above every form.
///
/// Generic over the message type so every screen can embed it.
pub fn brand<M: 'static>(i18n: &I18n) -> Element<'_, M> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::calendar(),
            palette::PRIMARY_500,
            sizing::ICON_LG,
        ))
        .push(
            Text::new(i18n.tr("app-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_100),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_fields_without_emitting_events() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::EmailChanged("a@b.com".into())),
            Event::None
        ));
        assert!(matches!(
            update(&mut state, Message::PasswordChanged("123".into())),
            Event::None
        ));
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.password, "123");
    }

    #[test]
    fn submit_emits_trimmed_credentials() {
        let mut state = State::default();
        update(&mut state, Message::EmailChanged("  a@b.com ".into()));
        update(&mut state, Message::PasswordChanged("123456".into()));

        match update(&mut state, Message::Submit) {
            Event::Submit(credentials) => {
                assert_eq!(credentials.email, "a@b.com");
                assert_eq!(credentials.password, "123456");
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn submit_is_ignored_while_a_submission_is_in_flight() {
        let mut state = State::default();
        state.set_submitting(true);
        assert!(matches!(update(&mut state, Message::Submit), Event::None));
    }

    #[test]
    fn submit_clears_previous_errors() {
        let mut state = State::default();
        let mut errors = FieldErrors::default();
        errors.push(Field::Email, "validation-email-required");
        state.set_errors(errors);

        update(&mut state, Message::Submit);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn links_emit_navigation_events() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::CreateAccount),
            Event::GoToSignUp
        ));
        assert!(matches!(
            update(&mut state, Message::ForgotPassword),
            Event::GoToResetPassword
        ));
    }
}
