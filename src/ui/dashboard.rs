// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen shown after sign-in.
//!
//! The scheduling views live on the server side of GoBarber; this client
//! greets the signed-in user, shows today's date, and offers sign-out.

use crate::account::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::sign_in::brand;
use crate::ui::styles;
use chrono::Local;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SignOut,
}

/// Process a dashboard message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SignOut => Event::SignOut,
    }
}

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
}

/// Render the dashboard.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let welcome = i18n.tr_with_args("dashboard-welcome", &[("name", &ctx.profile.name)]);
    let today = Local::now().format("%d/%m/%Y").to_string();

    let sign_out = button(Text::new(i18n.tr("dashboard-sign-out")).size(typography::BODY))
        .style(styles::button::link(palette::PRIMARY_500))
        .on_press(Message::SignOut);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(brand(i18n))
        .push(
            Text::new(welcome)
                .size(typography::TITLE_LG)
                .color(palette::GRAY_100),
        )
        .push(
            Text::new(i18n.tr("dashboard-title"))
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_500),
        )
        .push(
            Text::new(today)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            Container::new(
                Text::new(i18n.tr("dashboard-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .align_x(alignment::Horizontal::Center),
        )
        .push(sign_out);

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
    fn sign_out_propagates() {
        assert!(matches!(update(Message::SignOut), Event::SignOut));
    }
}
