// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Dark input well with an orange focus ring; the border turns red while the
/// field carries a validation error.
pub fn form(has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme: &Theme, status: text_input::Status| {
        let border_color = if has_error {
            palette::ERROR_500
        } else {
            match status {
                text_input::Status::Focused { .. } => palette::PRIMARY_500,
                _ => palette::GRAY_900,
            }
        };

        text_input::Style {
            background: Background::Color(palette::GRAY_900),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            icon: palette::GRAY_400,
            placeholder: palette::GRAY_400,
            value: palette::GRAY_100,
            selection: palette::PRIMARY_500,
        }
    }
}
