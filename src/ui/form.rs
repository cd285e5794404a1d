// SPDX-License-Identifier: MPL-2.0
//! Shared form building blocks for the account screens.
//!
//! Every screen renders the same field anatomy: a leading icon, a dark input
//! well, and an optional error caption underneath. Centralizing it here keeps
//! the three forms visually identical.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

/// One labeled form field: `[icon] [input]` with an error caption below.
pub fn field<'a, M: Clone + 'a>(
    icon: Svg<'static>,
    placeholder: String,
    value: &str,
    secure: bool,
    error: Option<String>,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let icon_color = if error.is_some() {
        palette::ERROR_500
    } else {
        palette::GRAY_400
    };

    let input = text_input(&placeholder, value)
        .on_input(on_input)
        .secure(secure)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::form(error.is_some()));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icon, icon_color, sizing::ICON_SM))
        .push(input);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(row);

    if let Some(message) = error {
        column = column.push(
            Text::new(message)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}
