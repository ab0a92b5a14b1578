// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Interval between ticks; bounds how late a deadline can fire.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native events to the overlay.
///
/// Resizes always go through; pointer and keyboard events only when no
/// widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let Event::Window(window::Event::Resized(_)) = &event {
            return Some(Message::RawEvent(event));
        }

        match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        }
    })
}

/// Creates the periodic tick subscription.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
