// SPDX-License-Identifier: MPL-2.0
//! Registration screen.
//!
//! Name, e-mail and password fields plus a link back to sign-in.

use crate::account::{Field, FieldErrors, Registration};
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
    name: String,
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

    /// Drops everything typed so far; used after a successful registration.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Messages emitted by the registration screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    BackToSignIn,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(Registration),
    GoToSignIn,
}

/// Process a screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
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
            Event::Submit(Registration {
                name: state.name.trim().to_string(),
                email: state.email.trim().to_string(),
                password: state.password.clone(),
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

/// Render the registration screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let error_text = |field: Field| state.errors.get(field).map(|key| i18n.tr(key));

    let name_field = form::field(
        icons::user(),
        i18n.tr("signup-name-placeholder"),
        &state.name,
        false,
        error_text(Field::Name),
        Message::NameChanged,
    );
    let email_field = form::field(
        icons::mail(),
        i18n.tr("signup-email-placeholder"),
        &state.email,
        false,
        error_text(Field::Email),
        Message::EmailChanged,
    );
    let password_field = form::field(
        icons::lock(),
        i18n.tr("signup-password-placeholder"),
        &state.password,
        true,
        error_text(Field::Password),
        Message::PasswordChanged,
    );

    let submit = button(
        Text::new(i18n.tr("signup-submit"))
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
            .push(Text::new(i18n.tr("signup-back-link")).size(typography::BODY)),
    )
    .style(styles::button::link(palette::GRAY_100))
    .on_press(Message::BackToSignIn);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(brand(i18n))
        .push(
            Text::new(i18n.tr("signup-title"))
                .size(typography::TITLE_LG)
                .color(palette::GRAY_100),
        )
        .push(name_field)
        .push(email_field)
        .push(password_field)
        .push(submit)
        .push(Container::new(back_link).padding(spacing::LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_emits_the_trimmed_registration() {
        let mut state = State::default();
        update(&mut state, Message::NameChanged(" Maria ".into()));
        update(&mut state, Message::EmailChanged("maria@example.com".into()));
        update(&mut state, Message::PasswordChanged("123456".into()));

        match update(&mut state, Message::Submit) {
            Event::Submit(registration) => {
                assert_eq!(registration.name, "Maria");
                assert_eq!(registration.email, "maria@example.com");
                assert_eq!(registration.password, "123456");
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn clear_resets_the_form() {
        let mut state = State::default();
        update(&mut state, Message::NameChanged("Maria".into()));
        state.set_submitting(true);

        state.clear();
        assert!(state.name.is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn back_link_emits_navigation() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::BackToSignIn),
            Event::GoToSignIn
        ));
    }
}
