// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::account::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::reset_password::{self, ViewContext as ResetPasswordViewContext};
use crate::ui::sign_in::{self, ViewContext as SignInViewContext};
use crate::ui::sign_up::{self, ViewContext as SignUpViewContext};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a, 'c> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub sign_in: &'a sign_in::State,
    pub sign_up: &'a sign_up::State,
    pub reset_password: &'a reset_password::State,
    pub profile: Option<&'a Profile>,
    pub notifications: &'a Manager,
    pub colors: &'c ColorScheme,
}

/// Renders the current application view based on the active screen.
pub fn view<'a>(ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::SignIn => sign_in::view(SignInViewContext {
            i18n: ctx.i18n,
            state: ctx.sign_in,
        })
        .map(Message::SignIn),
        Screen::SignUp => sign_up::view(SignUpViewContext {
            i18n: ctx.i18n,
            state: ctx.sign_up,
        })
        .map(Message::SignUp),
        Screen::ResetPassword => reset_password::view(ResetPasswordViewContext {
            i18n: ctx.i18n,
            state: ctx.reset_password,
        })
        .map(Message::ResetPassword),
        Screen::Dashboard => view_dashboard(ctx.profile, ctx.i18n),
    };

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    let stacked = Stack::with_children(vec![current_view, overlay])
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(stacked)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}

fn view_dashboard<'a>(profile: Option<&'a Profile>, i18n: &'a I18n) -> Element<'a, Message> {
    if let Some(profile) = profile {
        dashboard::view(DashboardViewContext { i18n, profile }).map(Message::Dashboard)
    } else {
        // Fallback if the session state is missing
        Container::new(Text::new("Session error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
