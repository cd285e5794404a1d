// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (sign-up success, sign-in errors, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with message kinds
//! - [`manager`] - `Manager` owning the active list and its lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! manager.push(Notification::error("Erro no login"));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Every active toast is rendered, newest last, in insertion order
//! - One display duration for all kinds (3 s reference, configurable)
//! - Position: top-right corner
//! - Dismissal: close button, or automatic on expiry; both idempotent

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, DEFAULT_DISPLAY_DURATION};
pub use notification::{Kind, Notification, NotificationId};
pub use toast::Toast;
