// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, mouse, touch, window) are routed into top-level
//! messages here. The two timers are conditional: the hero interval only
//! runs while the rotator is running, and the short motion tick only runs
//! while reveal deadlines or a hero cross-fade are outstanding, so an idle
//! page schedules no wakeups at all.

use super::{App, Message};
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Frame-rate-ish cadence for the reveal stagger and the hero cross-fade.
const MOTION_TICK: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(map_event)];

    if app.hero.is_running() {
        subscriptions.push(time::every(app.hero.interval()).map(Message::HeroTick));
    }
    if app.reveal.has_pending() || app.hero.is_fading() {
        subscriptions.push(time::every(MOTION_TICK).map(Message::MotionTick));
    }

    Subscription::batch(subscriptions)
}

fn map_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position))
        }
        // Keyboard input only counts when no widget captured it.
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => Some(Message::KeyPressed { key, modifiers }),
                event::Status::Captured => None,
            }
        }
        _ => None,
    }
}
