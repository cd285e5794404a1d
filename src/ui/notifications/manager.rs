// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the list of active notifications: pushes append,
//! dismissals remove by id, and the periodic tick expires entries that have
//! been on screen long enough. Consumers read the list through [`Manager::iter`]
//! and never mutate it directly.

use super::notification::{Kind, Notification, NotificationId};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent};
use std::time::{Duration, Instant};

/// How long a toast stays on screen unless dismissed first.
/// One duration for every kind; `settings.toml` can override it.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Clock tick for checking display durations.
    Tick(Instant),
}

/// Manages the active notification list.
#[derive(Debug)]
pub struct Manager {
    /// Active notifications in insertion order (oldest first).
    active: Vec<Notification>,
    /// How long each notification stays visible.
    display_duration: Duration,
    /// Optional diagnostics handle for mirroring error toasts.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            display_duration: DEFAULT_DISPLAY_DURATION,
            diagnostics: None,
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager with the reference duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with a custom display duration.
    #[must_use]
    pub fn with_display_duration(display_duration: Duration) -> Self {
        Self {
            display_duration,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for mirroring error toasts.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a new notification and returns its id.
    ///
    /// Appending never fails; the caller may keep the id to dismiss the
    /// notification early. Error toasts are mirrored into the diagnostics
    /// log so they outlive their time on screen.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        if let Some(handle) = &self.diagnostics {
            if notification.kind() == Kind::Error {
                handle.log_error(ErrorEvent::new(notification.title()));
            }
        }

        let id = notification.id();
        self.active.push(notification);
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an id that is no longer active (already expired, double-click on the
    /// close button) is a silent no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            return true;
        }
        false
    }

    /// Expires every notification whose display duration has elapsed at `now`.
    ///
    /// Driven by the periodic tick subscription, which only runs while
    /// notifications exist — once the last one is gone no callback fires, so
    /// nothing can act on an already-removed entry.
    pub fn tick(&mut self, now: Instant) {
        let display_duration = self.display_duration;
        self.active
            .retain(|n| n.age_at(now) < display_duration);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick(now) => {
                self.tick(now);
            }
        }
    }

    /// Returns the active notifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no notification is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(manager: &Manager) -> Vec<NotificationId> {
        manager.iter().map(Notification::id).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn push_appends_in_insertion_order() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::info("a"));
        let b = manager.push(Notification::info("b"));
        let c = manager.push(Notification::info("c"));

        assert_eq!(ids(&manager), vec![a, b, c]);
    }

    #[test]
    fn push_returns_a_retrievable_id() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("Cadastro realizado!"));

        assert!(manager.iter().any(|n| n.id() == id));
    }

    #[test]
    fn error_toast_scenario_is_observable_in_the_snapshot() {
        let mut manager = Manager::new();
        manager.push(Notification::error("Erro no login"));

        assert_eq!(manager.len(), 1);
        let toast = manager.iter().next().unwrap();
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.title(), "Erro no login");
    }

    #[test]
    fn dismiss_removes_only_the_matching_id() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::info("a"));
        let b = manager.push(Notification::info("b"));

        assert!(manager.dismiss(a));
        assert_eq!(ids(&manager), vec![b]);
    }

    #[test]
    fn dismiss_preserves_order_of_the_rest() {
        let mut manager = Manager::new();
        let a = manager.push(Notification::info("a"));
        let b = manager.push(Notification::info("b"));
        let c = manager.push(Notification::info("c"));

        manager.dismiss(b);
        assert_eq!(ids(&manager), vec![a, c]);
    }

    #[test]
    fn dismiss_missing_id_is_a_silent_noop() {
        let mut manager = Manager::new();
        let kept = manager.push(Notification::info("kept"));
        let gone = Notification::info("gone").id();

        assert!(!manager.dismiss(gone));
        assert_eq!(ids(&manager), vec![kept]);

        // Double removal is just as harmless
        assert!(manager.dismiss(kept));
        assert!(!manager.dismiss(kept));
        assert!(manager.is_empty());
    }

    #[test]
    fn tick_expires_notifications_after_the_display_duration() {
        let mut manager = Manager::new();
        manager.push(Notification::info("test"));
        let created = manager.iter().next().unwrap().created_at();

        // Just under the duration: still visible
        manager.tick(created + Duration::from_millis(2999));
        assert_eq!(manager.len(), 1);

        // At the duration: gone
        manager.tick(created + DEFAULT_DISPLAY_DURATION);
        assert!(manager.is_empty());
    }

    #[test]
    fn tick_only_expires_old_enough_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::backdated_by(
            Kind::Info,
            "old",
            DEFAULT_DISPLAY_DURATION + Duration::from_secs(1),
        ));
        let fresh_id = manager.push(Notification::info("fresh"));

        manager.tick(Instant::now());
        assert_eq!(ids(&manager), vec![fresh_id]);
    }

    #[test]
    fn manual_dismiss_then_tick_does_not_double_remove() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::info("test"));
        let created = manager.iter().next().unwrap().created_at();

        // Dismissed "at t=100ms"
        assert!(manager.dismiss(id));
        assert!(manager.is_empty());

        // Clock advances past the display duration: nothing to remove,
        // nothing panics
        manager.tick(created + DEFAULT_DISPLAY_DURATION + Duration::from_secs(1));
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::info("a"));
        manager.push(Notification::info("b"));
        let created = manager.iter().nth(1).unwrap().created_at();

        manager.handle_message(Message::Dismiss(id));
        assert_eq!(manager.len(), 1);

        manager.handle_message(Message::Tick(created + DEFAULT_DISPLAY_DURATION));
        assert!(manager.is_empty());
    }

    #[test]
    fn custom_display_duration_is_honored() {
        let mut manager = Manager::with_display_duration(Duration::from_millis(500));
        manager.push(Notification::info("short-lived"));
        let created = manager.iter().next().unwrap().created_at();

        manager.tick(created + Duration::from_millis(499));
        assert_eq!(manager.len(), 1);
        manager.tick(created + Duration::from_millis(500));
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("test-{i}")));
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn error_pushes_are_mirrored_to_diagnostics() {
        use crate::diagnostics::DiagnosticEventKind;

        let mut manager = Manager::new();
        let handle = DiagnosticsHandle::default();
        manager.set_diagnostics(handle.clone());

        manager.push(Notification::error("Erro no cadastro"));
        manager.push(Notification::success("Cadastro realizado!"));

        let events = handle.snapshot();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0].kind,
            DiagnosticEventKind::Error { error } if error.message == "Erro no cadastro"
        ));
    }
}
