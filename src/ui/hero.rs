// SPDX-License-Identifier: MPL-2.0
//! Hero rotator: two stacked image slots cross-fading through the slide
//! list, with a pointer-tilt effect over the stage.
//!
//! The slots alternate between "front" and "back" roles. `rotate()` loads
//! the next slide into the back slot, swaps the roles, and advances the
//! index; the visual cross-fade is a cosmetic progress value sampled by the
//! view between the swap and `CROSS_FADE` later.

use crate::portfolio::Slide;
use crate::ui::layout::Breakpoint;
use iced::{Point, Rectangle};
use std::time::{Duration, Instant};

/// Duration of the visual cross-fade after a rotation.
pub const CROSS_FADE: Duration = Duration::from_millis(420);

/// Maximum tilt angles in degrees, matched to the cursor offset from the
/// stage center (±0.5 of the stage size in each axis).
const TILT_MAX_X_DEG: f32 = 1.5;
const TILT_MAX_Y_DEG: f32 = 1.25;

/// Hero rotator state.
#[derive(Debug, Clone)]
pub struct State {
    slides: Vec<Slide>,
    /// Slide index shown by each slot. Slot roles swap on rotation.
    slots: [Option<usize>; 2],
    /// Which slot is currently the front layer (0 or 1).
    front: usize,
    /// Index of the current slide within `slides`.
    index: usize,
    running: bool,
    interval: Duration,
    reduce_motion: bool,
    /// Start of the in-flight cross-fade, if any.
    fade_started: Option<Instant>,
    /// Tilt angles in degrees (x, y), neutral at (0, 0).
    tilt: (f32, f32),
}

impl State {
    #[must_use]
    pub fn new(slides: Vec<Slide>, interval: Duration, reduce_motion: bool) -> Self {
        let slots = [if slides.is_empty() { None } else { Some(0) }, None];
        Self {
            slides,
            slots,
            front: 0,
            index: 0,
            running: false,
            interval,
            reduce_motion,
            fade_started: None,
            tilt: (0.0, 0.0),
        }
    }

    /// Sources of every non-initial slide, for eager preloading at startup.
    #[must_use]
    pub fn preload_sources(&self) -> Vec<String> {
        self.slides
            .iter()
            .skip(1)
            .map(|slide| slide.source.clone())
            .collect()
    }

    /// Advances to the next slide: the back slot takes the next image and
    /// becomes the front, wrapping around at the end of the list.
    pub fn rotate(&mut self, now: Instant) {
        if self.slides.len() < 2 {
            return;
        }
        let next = (self.index + 1) % self.slides.len();
        let back = 1 - self.front;

        self.slots[back] = Some(next);
        self.front = back;
        self.index = next;
        self.fade_started = Some(now);
    }

    /// Starts the rotation timer. A no-op when already running or when the
    /// preconditions (motion allowed, at least two slides) do not hold.
    pub fn start(&mut self) {
        if self.running || self.reduce_motion || self.slides.len() < 2 {
            return;
        }
        self.running = true;
    }

    /// Stops the rotation timer. A no-op when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reconciles the timer with the current breakpoint. Called at startup
    /// and on every breakpoint crossing.
    pub fn sync(&mut self, breakpoint: Breakpoint) {
        if breakpoint.is_compact() {
            self.stop();
        } else {
            self.start();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cross-fade progress in [0, 1], or `None` when no fade is in flight.
    #[must_use]
    pub fn fade_progress(&self, now: Instant) -> Option<f32> {
        let started = self.fade_started?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= CROSS_FADE {
            None
        } else {
            Some(elapsed.as_secs_f32() / CROSS_FADE.as_secs_f32())
        }
    }

    /// Drops the fade marker once the cross-fade has completed. Gates the
    /// short tick subscription together with the reveal deadlines.
    pub fn tick(&mut self, now: Instant) {
        if self.fade_progress(now).is_none() {
            self.fade_started = None;
        }
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade_started.is_some()
    }

    /// The slide currently fronted, if any.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Slide shown by the front slot.
    #[must_use]
    pub fn front_slide(&self) -> Option<&Slide> {
        self.slots[self.front].and_then(|i| self.slides.get(i))
    }

    /// Slide shown by the back slot.
    #[must_use]
    pub fn back_slide(&self) -> Option<&Slide> {
        self.slots[1 - self.front].and_then(|i| self.slides.get(i))
    }

    /// Updates the tilt from a cursor position over the stage bounds.
    /// Ignored under reduced motion or on compact layouts.
    pub fn pointer_moved(&mut self, position: Point, stage: Rectangle, breakpoint: Breakpoint) {
        if self.reduce_motion || breakpoint.is_compact() || stage.width <= 0.0 || stage.height <= 0.0
        {
            return;
        }
        if !stage.contains(position) {
            return;
        }
        let dx = (position.x - stage.x) / stage.width - 0.5;
        let dy = (position.y - stage.y) / stage.height - 0.5;
        self.tilt = (
            (dx * 2.0 * TILT_MAX_X_DEG).clamp(-TILT_MAX_X_DEG, TILT_MAX_X_DEG),
            (-dy * 2.0 * TILT_MAX_Y_DEG).clamp(-TILT_MAX_Y_DEG, TILT_MAX_Y_DEG),
        );
    }

    /// Resets the tilt to neutral when the pointer leaves the stage.
    pub fn pointer_left(&mut self) {
        self.tilt = (0.0, 0.0);
    }

    /// Current tilt angles in degrees.
    #[must_use]
    pub fn tilt(&self) -> (f32, f32) {
        self.tilt
    }
}
