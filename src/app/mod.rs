// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together the screens, localization, the account
//! gateway, and the toast notification manager, and translates messages into
//! side effects. Policy decisions (window sizing, tick routing, which outcome
//! becomes a toast) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::account::{AccountGateway, InMemoryAccounts, Profile};
use crate::config;
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::reset_password;
use crate::ui::sign_in;
use crate::ui::sign_up;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state bridging screens, localization, and the
/// notification layer.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    sign_in: sign_in::State,
    sign_up: sign_up::State,
    reset_password: reset_password::State,
    /// The signed-in account, present while on the dashboard.
    profile: Option<Profile>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Account service adapter shared with background tasks.
    accounts: Arc<dyn AccountGateway>,
    /// In-memory activity log.
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.profile.is_some())
            .field("active_toasts", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::SignIn,
            sign_in: sign_in::State::default(),
            sign_up: sign_up::State::default(),
            reset_password: reset_password::State::default(),
            profile: None,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            accounts: Arc::new(InMemoryAccounts::default()),
            diagnostics: DiagnosticsHandle::default(),
        }
    }
}

impl App {
    /// Initializes application state from the configuration file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load_with_dir(flags.config_dir.as_deref()) {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            notifications: notifications::Manager::with_display_duration(config.toast_duration()),
            ..Self::default()
        };
        app.notifications.set_diagnostics(app.diagnostics.clone());

        if config_warning {
            app.notifications
                .push(Notification::info(app.i18n.tr("settings-load-warning")));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.notifications.is_empty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            sign_in: &mut self.sign_in,
            sign_up: &mut self.sign_up,
            reset_password: &mut self.reset_password,
            profile: &mut self.profile,
            notifications: &mut self.notifications,
            accounts: &self.accounts,
            diagnostics: &self.diagnostics,
        };

        match message {
            Message::SignIn(screen_message) => {
                update::handle_sign_in_message(&mut ctx, screen_message)
            }
            Message::SignUp(screen_message) => {
                update::handle_sign_up_message(&mut ctx, screen_message)
            }
            Message::ResetPassword(screen_message) => {
                update::handle_reset_password_message(&mut ctx, screen_message)
            }
            Message::Dashboard(screen_message) => {
                update::handle_dashboard_message(&mut ctx, screen_message)
            }
            Message::SignInCompleted(outcome) => {
                update::handle_sign_in_completed(&mut ctx, outcome)
            }
            Message::SignUpCompleted { name, outcome } => {
                update::handle_sign_up_completed(&mut ctx, &name, outcome)
            }
            Message::PasswordResetCompleted(outcome) => {
                update::handle_password_reset_completed(&mut ctx, outcome)
            }
            Message::Notification(notification_message) => {
                if matches!(
                    notification_message,
                    notifications::NotificationMessage::Dismiss(_)
                ) {
                    self.diagnostics
                        .log_action(crate::diagnostics::UserAction::DismissToast);
                }
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                // Expire toasts whose display duration has elapsed
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let colors = self.theme_mode.color_scheme();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            sign_in: &self.sign_in,
            sign_up: &self.sign_up,
            reset_password: &self.reset_password,
            profile: self.profile.as_ref(),
            notifications: &self.notifications,
            colors: &colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::NotificationMessage;
    use std::time::{Duration, Instant};

    #[test]
    fn toast_dismiss_message_removes_the_toast() {
        let mut app = App::default();
        let id = app.notifications.push(Notification::error("Erro no login"));
        assert_eq!(app.notifications.len(), 1);

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn tick_message_expires_due_toasts() {
        let mut app = App::default();
        app.notifications.push(Notification::info("test"));
        let created = app.notifications.iter().next().unwrap().created_at();

        let _ = app.update(Message::Tick(
            created + notifications::DEFAULT_DISPLAY_DURATION + Duration::from_millis(1),
        ));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn subscription_is_idle_without_toasts() {
        let app = App::default();
        // No toasts: no periodic work scheduled, nothing to leak
        assert!(app.notifications.is_empty());
        let _ = app.subscription();

        let mut app = App::default();
        app.notifications.push(Notification::info("test"));
        let _ = app.subscription();
    }

    #[test]
    fn screen_messages_drive_navigation() {
        let mut app = App::default();
        let _ = app.update(Message::SignIn(sign_in::Message::CreateAccount));
        assert_eq!(app.screen, Screen::SignUp);

        let _ = app.update(Message::SignUp(sign_up::Message::BackToSignIn));
        assert_eq!(app.screen, Screen::SignIn);
    }

    #[test]
    fn ticking_before_expiry_keeps_the_toast() {
        let mut app = App::default();
        app.notifications.push(Notification::info("test"));
        let created = app.notifications.iter().next().unwrap().created_at();

        let _ = app.update(Message::Tick(created + Duration::from_millis(100)));
        assert_eq!(app.notifications.len(), 1);

        // Sanity: a tick "now" never panics even with nothing due
        let _ = app.update(Message::Tick(Instant::now()));
    }
}
