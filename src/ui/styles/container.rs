// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Theme};

/// Full-window surface behind every screen.
pub fn screen(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..container::Style::default()
    }
}
