// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// Ids are monotonic for the lifetime of the process, so an id can never
    /// collide with another notification that is simultaneously active.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Message kind determines the visual styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Neutral information (blue). The kind used when none is chosen.
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
}

impl Kind {
    /// Returns the accent color (border, icon, text) for this kind.
    #[must_use]
    pub fn accent(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the card surface color for this kind.
    #[must_use]
    pub fn surface(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_100,
            Kind::Success => palette::SUCCESS_100,
            Kind::Error => palette::ERROR_100,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Message kind (determines styling).
    kind: Kind,
    /// Short required headline.
    title: String,
    /// Optional supplementary text.
    description: Option<String>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with the default kind ([`Kind::Info`]).
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_kind(Kind::default(), title)
    }

    /// Creates a notification with an explicit kind.
    pub fn with_kind(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            description: None,
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::with_kind(Kind::Info, title)
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_kind(Kind::Success, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::with_kind(Kind::Error, title)
    }

    /// Adds supplementary text below the headline.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the headline text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the supplementary text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Test helper: a notification that was created `age` ago.
    #[cfg(test)]
    pub(crate) fn backdated_by(kind: Kind, title: &str, age: Duration) -> Self {
        let mut notification = Self::with_kind(kind, title);
        notification.created_at = Instant::now()
            .checked_sub(age)
            .unwrap_or(notification.created_at);
        notification
    }

    /// Returns the age of this notification at `now`.
    ///
    /// Zero when `now` is before the creation instant (a tick scheduled
    /// before the push was processed).
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
