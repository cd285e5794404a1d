// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards tinted by their kind, with a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent = kind.accent();

        let icon_widget = icons::tinted(Self::kind_icon(kind), accent, sizing::ICON_MD);

        let mut text_column = Column::new().spacing(spacing::XXS).push(
            Text::new(notification.title().to_string())
                .size(typography::BODY_LG)
                .color(accent),
        );
        if let Some(description) = notification.description() {
            text_column = text_column.push(
                Text::new(description.to_string())
                    .size(typography::BODY)
                    .color(accent),
            );
        }

        let notification_id = notification.id();
        let dismiss_button = button(icons::tinted(icons::cross(), accent, sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [title + description] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(text_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, kind))
            .into()
    }

    /// Renders the toast overlay with every active notification.
    ///
    /// Positions toasts in the top-right corner, stacked vertically in
    /// insertion order (oldest on top).
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.iter().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Position in top-right with padding
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::LG)
                .into()
        }
    }

    /// Returns the appropriate icon for the kind.
    fn kind_icon(kind: Kind) -> Svg<'static> {
        match kind {
            Kind::Info => icons::info(),
            Kind::Success => icons::check_circle(),
            Kind::Error => icons::alert_circle(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, kind: Kind) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(kind.surface())),
        border: iced::Border {
            color: kind.accent(),
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(kind.accent()),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.1,
                ..iced::Color::BLACK
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
