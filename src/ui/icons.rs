// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG line icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. The SVG sources use `currentColor` strokes, so a
//! call site picks the color through the widget's style hook via [`tinted`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//! use crate::ui::design_tokens::{palette, sizing};
//!
//! let close = icons::tinted(icons::cross(), palette::GRAY_400, sizing::ICON_SM);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::Color;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Toast Severity Icons
// =============================================================================

define_icon!(info, "info.svg", "Info icon: lowercase i in a circle.");
define_icon!(
    check_circle,
    "check-circle.svg",
    "Checkmark inside an open circle."
);
define_icon!(
    alert_circle,
    "alert-circle.svg",
    "Exclamation mark in a circle."
);
define_icon!(cross, "x-circle.svg", "Cross inside a circle.");

// =============================================================================
// Form Field Icons
// =============================================================================

define_icon!(mail, "mail.svg", "Envelope icon for e-mail fields.");
define_icon!(lock, "lock.svg", "Padlock icon for password fields.");
define_icon!(user, "user.svg", "Person silhouette for name fields.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(log_in, "log-in.svg", "Door with an inbound arrow.");
define_icon!(arrow_left, "arrow-left.svg", "Arrow pointing left.");
define_icon!(calendar, "calendar.svg", "Month calendar sheet.");

/// Sizes an icon and tints its `currentColor` strokes.
pub fn tinted(icon: Svg<'static>, color: Color, size: f32) -> Svg<'static> {
    icon.width(size)
        .height(size)
        .style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}
