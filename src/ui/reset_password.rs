// SPDX-License-Identifier: MPL-2.0
//! Password-reset screen.
//!
//! The web client reaches this form through a `?token=` link; the desktop
//! client identifies the account by e-mail instead, prefilled from whatever
//! was typed on the sign-in screen.

use crate::account::{Field, FieldErrors, PasswordReset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::form;
use crate::ui::icons;
use crate::ui::sign_in::brand;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Form state owned by the screen.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    password: String,
    confirmation: String,
    errors: FieldErrors,
    submitting: bool,
}

impl State {
    /// Prefills the e-mail, keeping whatever the user typed elsewhere.
    pub fn prefill_email(&mut self, email: &str) {
        if !email.is_empty() {
            self.email = email.to_string();
        }
    }

    /// Replaces the inline validation errors.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Marks whether a submission is in flight (disables the button).
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Drops everything typed so far; used after a successful reset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Messages emitted by the password-reset screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmationChanged(String),
    Submit,
    BackToSignIn,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(PasswordReset),
    GoToSignIn,
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
        Message::ConfirmationChanged(value) => {
            state.confirmation = value;
            Event::None
        }
        Message::Submit => {
            if state.submitting {
                return Event::None;
            }
            state.errors = FieldErrors::default();
            Event::Submit(PasswordReset {
                email: state.email.trim().to_string(),
                password: state.password.clone(),
                confirmation: state.confirmation.clone(),
            })
        }
        Message::BackToSignIn => Event::GoToSignIn,
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the password-reset screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let error_text = |field: Field| state.errors.get(field).map(|key| i18n.tr(key));

    let email_field = form::field(
        icons::mail(),
        i18n.tr("reset-email-placeholder"),
        &state.email,
        false,
        error_text(Field::Email),
        Message::EmailChanged,
    );
    let password_field = form::field(
        icons::lock(),
        i18n.tr("reset-password-placeholder"),
        &state.password,
        true,
        error_text(Field::Password),
        Message::PasswordChanged,
    );
    let confirmation_field = form::field(
        icons::lock(),
        i18n.tr("reset-confirmation-placeholder"),
        &state.confirmation,
        true,
        error_text(Field::PasswordConfirmation),
        Message::ConfirmationChanged,
    );

    let submit = button(
        Text::new(i18n.tr("reset-submit"))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .on_press_maybe((!state.submitting).then_some(Message::Submit));

    let back_link = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::arrow_left(),
                palette::GRAY_100,
                sizing::ICON_SM,
            ))
            .push(Text::new(i18n.tr("reset-back-link")).size(typography::BODY)),
    )
    .style(styles::button::link(palette::GRAY_100))
    .on_press(Message::BackToSignIn);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(brand(i18n))
        .push(
            Text::new(i18n.tr("reset-title"))
                .size(typography::TITLE_LG)
                .color(palette::GRAY_100),
        )
        .push(email_field)
        .push(password_field)
        .push(confirmation_field)
        .push(submit)
        .push(Container::new(back_link).padding(spacing::LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
