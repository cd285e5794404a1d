// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only recurring event this client needs is the toast-expiry tick.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between toast-expiry checks while toasts are on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The subscription only exists while notifications are active: once the last
/// toast is gone the runtime drops the timer, so no callback can fire against
/// an empty store.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
