// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes arrive through the native event stream. The animation tick
//! is gated: it only runs while something on the page is actually moving, so
//! an idle brief costs nothing between interactions.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{event, time, Subscription};

/// Creates the native event subscription. Only window resizes are routed up;
/// pointer and keyboard input is consumed by the widgets themselves.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Creates the periodic tick driving smooth scrolls, card reveals and the
/// stat counter.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
