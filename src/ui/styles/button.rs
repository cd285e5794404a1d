// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary (submit) button: solid brand orange.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::GRAY_800,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::GRAY_800,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_700,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for inline navigation links ("Criar conta", "Voltar para logon").
pub fn link(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.8,
                ..text_color
            },
            _ => text_color,
        };

        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
