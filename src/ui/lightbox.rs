// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox: a session over the cards that were visible at open time.
//!
//! The session snapshots `visible_cards()` when it opens — it is never
//! recomputed while open, and never reused across opens, so filter changes
//! can simply close the lightbox and the next open sees fresh state. The
//! active index always stays within the snapshot's bounds.
//!
//! While open, keyboard focus is contained in a ring over the modal's
//! controls (close, previous, next, one entry per thumbnail), wrapping in
//! both directions.

/// Minimum horizontal travel for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// A control inside the modal that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Close,
    Previous,
    Next,
    Thumb(usize),
}

/// What the orchestrator should do after activating the focused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    Step(i32),
    Jump(usize),
}

/// An open lightbox session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Photo indices of the cards visible when the session opened.
    cards: Vec<usize>,
    /// Active position within `cards`. Invariant: `< cards.len()`.
    index: usize,
    /// Focused modal control.
    focus: FocusTarget,
    /// Gallery keyboard-cursor position to restore on close.
    restore_focus: Option<usize>,
    /// Horizontal start of an in-progress swipe.
    drag_start_x: Option<f32>,
}

impl Session {
    #[must_use]
    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Photo index of the active card.
    #[must_use]
    pub fn current_card(&self) -> usize {
        self.cards[self.index]
    }

    #[must_use]
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }
}

/// Lightbox controller: `None` session means closed.
#[derive(Debug, Clone, Default)]
pub struct State {
    session: Option<Session>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Opens a session for `card` over the given visible snapshot. Ignored
    /// when already open or when the snapshot is empty. A card missing from
    /// the snapshot falls back to position 0.
    pub fn open(&mut self, card: usize, visible: Vec<usize>, restore_focus: Option<usize>) {
        if self.session.is_some() || visible.is_empty() {
            return;
        }
        let index = visible.iter().position(|&c| c == card).unwrap_or(0);
        self.session = Some(Session {
            cards: visible,
            index,
            focus: FocusTarget::Close,
            restore_focus,
            drag_start_x: None,
        });
    }

    /// Closes the session, returning the gallery cursor to restore.
    pub fn close(&mut self) -> Option<usize> {
        self.session.take().and_then(|s| s.restore_focus)
    }

    /// Moves the active index by ±1 with wraparound. No-op when closed;
    /// with a single card the index stays put.
    pub fn step(&mut self, direction: i32) {
        if let Some(session) = &mut self.session {
            let count = session.cards.len() as i32;
            session.index = (session.index as i32 + direction).rem_euclid(count) as usize;
        }
    }

    /// Jumps directly to a snapshot position (thumbnail activation).
    /// Out-of-range positions are ignored.
    pub fn jump(&mut self, position: usize) {
        if let Some(session) = &mut self.session {
            if position < session.cards.len() {
                session.index = position;
            }
        }
    }

    /// Moves keyboard focus forward through the ring, wrapping to the first
    /// control after the last thumbnail.
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Moves keyboard focus backward through the ring.
    pub fn focus_previous(&mut self) {
        self.cycle_focus(-1);
    }

    fn ring_len(session: &Session) -> usize {
        3 + session.cards.len()
    }

    fn ring_position(focus: FocusTarget) -> usize {
        match focus {
            FocusTarget::Close => 0,
            FocusTarget::Previous => 1,
            FocusTarget::Next => 2,
            FocusTarget::Thumb(i) => 3 + i,
        }
    }

    fn ring_target(position: usize) -> FocusTarget {
        match position {
            0 => FocusTarget::Close,
            1 => FocusTarget::Previous,
            2 => FocusTarget::Next,
            n => FocusTarget::Thumb(n - 3),
        }
    }

    fn cycle_focus(&mut self, direction: isize) {
        if let Some(session) = &mut self.session {
            let len = Self::ring_len(session) as isize;
            let current = Self::ring_position(session.focus) as isize;
            let next = (current + direction).rem_euclid(len) as usize;
            session.focus = Self::ring_target(next);
        }
    }

    /// Focuses a specific control (e.g. after a pointer press on it).
    pub fn set_focus(&mut self, target: FocusTarget) {
        if let Some(session) = &mut self.session {
            if Self::ring_position(target) < Self::ring_len(session) {
                session.focus = target;
            }
        }
    }

    /// Activates the focused control.
    #[must_use]
    pub fn activate_focus(&self) -> Option<Action> {
        let session = self.session.as_ref()?;
        Some(match session.focus {
            FocusTarget::Close => Action::Close,
            FocusTarget::Previous => Action::Step(-1),
            FocusTarget::Next => Action::Step(1),
            FocusTarget::Thumb(i) => Action::Jump(i),
        })
    }

    /// Records the horizontal start of a press on the stage.
    pub fn drag_started(&mut self, x: f32) {
        if let Some(session) = &mut self.session {
            session.drag_start_x = Some(x);
        }
    }

    /// Finishes a drag. Travel at or beyond the threshold steps the session
    /// (leftward drag advances); shorter travel does nothing.
    pub fn drag_finished(&mut self, x: f32) {
        let Some(session) = &mut self.session else {
            return;
        };
        let Some(start) = session.drag_start_x.take() else {
            return;
        };
        let delta = x - start;
        if delta.abs() < SWIPE_THRESHOLD {
            return;
        }
        self.step(if delta < 0.0 { 1 } else { -1 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state(cards: Vec<usize>, at: usize) -> State {
        let mut state = State::new();
        let card = cards.get(at).copied().unwrap_or(usize::MAX);
        state.open(card, cards, None);
        state
    }

    #[test]
    fn open_sets_index_to_activated_card() {
        let state = open_state(vec![3, 5, 8], 1);
        let session = state.session().expect("not open");
        assert_eq!(session.index(), 1);
        assert_eq!(session.current_card(), 5);
        assert_eq!(session.focus(), FocusTarget::Close);
    }

    #[test]
    fn open_with_unknown_card_falls_back_to_first() {
        let mut state = State::new();
        state.open(99, vec![3, 5, 8], None);
        assert_eq!(state.session().expect("not open").index(), 0);
    }

    #[test]
    fn open_with_empty_snapshot_is_refused() {
        let mut state = State::new();
        state.open(0, vec![], None);
        assert!(!state.is_open());
    }

    #[test]
    fn open_while_open_is_ignored() {
        let mut state = open_state(vec![3, 5, 8], 1);
        state.open(8, vec![8], None);
        assert_eq!(state.session().expect("not open").index(), 1);
    }

    #[test]
    fn step_wraps_in_both_directions() {
        let mut state = open_state(vec![0, 1, 2, 3, 4], 2);
        state.step(1);
        assert_eq!(state.session().unwrap().index(), 3);
        state.step(1);
        state.step(1);
        assert_eq!(state.session().unwrap().index(), 0); // wrapped

        state.step(-1);
        assert_eq!(state.session().unwrap().index(), 4); // wrapped back
    }

    #[test]
    fn step_stays_in_bounds_for_all_lengths() {
        for n in 1..=5 {
            let mut state = open_state((0..n).collect(), 0);
            for direction in [-1, 1] {
                for _ in 0..(2 * n + 1) {
                    state.step(direction);
                    let index = state.session().unwrap().index();
                    assert!(index < n, "index {index} out of bounds for N={n}");
                }
            }
        }
    }

    #[test]
    fn single_card_steps_keep_index_zero() {
        let mut state = open_state(vec![7], 0);
        state.step(1);
        state.step(-1);
        assert_eq!(state.session().unwrap().index(), 0);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut state = open_state(vec![0, 1, 2], 0);
        state.jump(2);
        assert_eq!(state.session().unwrap().index(), 2);
        state.jump(9);
        assert_eq!(state.session().unwrap().index(), 2);
    }

    #[test]
    fn close_returns_restore_focus() {
        let mut state = State::new();
        state.open(5, vec![3, 5, 8], Some(1));
        assert_eq!(state.close(), Some(1));
        assert!(!state.is_open());
        assert_eq!(state.close(), None); // already closed
    }

    #[test]
    fn focus_ring_wraps_both_ways() {
        let mut state = open_state(vec![0, 1], 0);
        assert_eq!(state.session().unwrap().focus(), FocusTarget::Close);

        state.focus_previous(); // wraps to last thumb
        assert_eq!(state.session().unwrap().focus(), FocusTarget::Thumb(1));

        state.focus_next(); // back to close
        assert_eq!(state.session().unwrap().focus(), FocusTarget::Close);

        state.focus_next();
        assert_eq!(state.session().unwrap().focus(), FocusTarget::Previous);
    }

    #[test]
    fn activate_focus_maps_to_actions() {
        let mut state = open_state(vec![0, 1, 2], 0);
        assert_eq!(state.activate_focus(), Some(Action::Close));

        state.set_focus(FocusTarget::Next);
        assert_eq!(state.activate_focus(), Some(Action::Step(1)));

        state.set_focus(FocusTarget::Thumb(2));
        assert_eq!(state.activate_focus(), Some(Action::Jump(2)));
    }

    #[test]
    fn swipe_left_advances_swipe_right_goes_back() {
        let mut state = open_state(vec![0, 1, 2, 3, 4], 2);
        state.drag_started(300.0);
        state.drag_finished(250.0); // delta -50
        assert_eq!(state.session().unwrap().index(), 3);

        state.drag_started(300.0);
        state.drag_finished(345.0); // delta +45
        assert_eq!(state.session().unwrap().index(), 2);
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut state = open_state(vec![0, 1, 2, 3, 4], 2);
        state.drag_started(300.0);
        state.drag_finished(290.0); // delta -10
        assert_eq!(state.session().unwrap().index(), 2);
    }

    #[test]
    fn drag_finish_without_start_is_noop() {
        let mut state = open_state(vec![0, 1, 2], 1);
        state.drag_finished(100.0);
        assert_eq!(state.session().unwrap().index(), 1);
    }
}
