// SPDX-License-Identifier: MPL-2.0
//! Reveal-on-scroll controller.
//!
//! Sections fade in the first time at least 15% of their height is inside
//! the scroll viewport; their children then come in one by one with a fixed
//! stagger. Each section triggers exactly once. The stagger is driven by
//! deadline instants and a short tick that the app only subscribes to while
//! deadlines are pending.

use crate::ui::layout::{SectionId, Span};
use std::time::{Duration, Instant};

/// Fraction of a section that must be inside the viewport to trigger it.
const INTERSECTION_THRESHOLD: f32 = 0.15;

/// Delay between consecutive children of a revealed section.
pub const STAGGER_STEP: Duration = Duration::from_millis(70);

#[derive(Debug, Clone)]
struct Section {
    id: SectionId,
    span: Span,
    in_view: bool,
    children_in: Vec<bool>,
    /// Reveal deadline per child, present only between the section
    /// triggering and the last child coming in.
    deadlines: Vec<(usize, Instant)>,
}

/// Reveal controller state.
#[derive(Debug, Clone)]
pub struct State {
    sections: Vec<Section>,
    reduce_motion: bool,
}

impl State {
    #[must_use]
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            sections: Vec::new(),
            reduce_motion,
        }
    }

    /// Registers a section for observation. Children are indexed in
    /// document order.
    pub fn register(&mut self, id: SectionId, span: Span, child_count: usize) {
        self.sections.push(Section {
            id,
            span,
            in_view: false,
            children_in: vec![false; child_count],
            deadlines: Vec::new(),
        });
    }

    /// Replaces all registrations, keeping nothing from the previous page.
    pub fn reset(&mut self) {
        self.sections.clear();
    }

    pub fn set_reduce_motion(&mut self, reduce: bool) {
        self.reduce_motion = reduce;
    }

    /// Feeds a scroll-viewport sample. Sections crossing the intersection
    /// threshold for the first time trigger and stop being observed.
    pub fn handle_scroll(&mut self, scroll_offset: f32, viewport_height: f32, now: Instant) {
        let viewport_top = scroll_offset;
        let viewport_bottom = scroll_offset + viewport_height;
        let reduce = self.reduce_motion;

        for section in &mut self.sections {
            if section.in_view || section.span.height <= 0.0 {
                continue;
            }
            let overlap = (section.span.bottom().min(viewport_bottom)
                - section.span.top.max(viewport_top))
            .max(0.0);
            if overlap / section.span.height >= INTERSECTION_THRESHOLD {
                trigger(section, reduce, now);
            }
        }
    }

    /// Immediately reveals one section and all its children, no stagger.
    /// Used for the gallery on compact layouts, where the scroll-triggered
    /// entry is unreliable.
    pub fn force_reveal(&mut self, id: SectionId) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.in_view = true;
            section.children_in.iter_mut().for_each(|c| *c = true);
            section.deadlines.clear();
        }
    }

    /// Flips children whose deadlines have passed. Returns true when any
    /// child changed, so the caller can skip redraw work on idle ticks.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for section in &mut self.sections {
            section.deadlines.retain(|&(child, deadline)| {
                if deadline <= now {
                    if let Some(flag) = section.children_in.get_mut(child) {
                        *flag = true;
                        changed = true;
                    }
                    false
                } else {
                    true
                }
            });
        }
        changed
    }

    /// True while any child deadline is outstanding; gates the tick
    /// subscription.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.sections.iter().any(|s| !s.deadlines.is_empty())
    }

    #[must_use]
    pub fn is_section_in(&self, id: SectionId) -> bool {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .is_some_and(|s| s.in_view)
    }

    #[must_use]
    pub fn is_child_in(&self, id: SectionId, child: usize) -> bool {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.children_in.get(child).copied())
            .unwrap_or(false)
    }
}

fn trigger(section: &mut Section, reduce_motion: bool, now: Instant) {
    section.in_view = true;
    if reduce_motion {
        section.children_in.iter_mut().for_each(|c| *c = true);
        return;
    }
    for child in 0..section.children_in.len() {
        section
            .deadlines
            .push((child, now + STAGGER_STEP * child as u32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::SectionId;

    fn span(top: f32, height: f32) -> Span {
        Span { top, height }
    }

    fn controller() -> State {
        let mut state = State::new(false);
        state.register(SectionId::Intro, span(600.0, 300.0), 3);
        state.register(SectionId::Gallery, span(950.0, 900.0), 6);
        state
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let mut state = controller();
        // Viewport ends 30px into the 300px intro section: 10% visible.
        state.handle_scroll(0.0, 630.0, Instant::now());
        assert!(!state.is_section_in(SectionId::Intro));
    }

    #[test]
    fn crossing_threshold_triggers_once() {
        let mut state = controller();
        let now = Instant::now();
        // 60px of 300px visible: 20%.
        state.handle_scroll(0.0, 660.0, now);
        assert!(state.is_section_in(SectionId::Intro));
        assert!(state.has_pending());

        // Scrolling away and back must not reschedule anything new.
        state.tick(now + STAGGER_STEP * 10);
        assert!(!state.has_pending());
        state.handle_scroll(0.0, 660.0, now);
        assert!(!state.has_pending());
    }

    #[test]
    fn children_come_in_staggered_document_order() {
        let mut state = controller();
        let now = Instant::now();
        state.handle_scroll(0.0, 660.0, now);

        assert!(!state.is_child_in(SectionId::Intro, 0));
        state.tick(now);
        assert!(state.is_child_in(SectionId::Intro, 0));
        assert!(!state.is_child_in(SectionId::Intro, 1));

        state.tick(now + STAGGER_STEP);
        assert!(state.is_child_in(SectionId::Intro, 1));
        assert!(!state.is_child_in(SectionId::Intro, 2));

        state.tick(now + STAGGER_STEP * 2);
        assert!(state.is_child_in(SectionId::Intro, 2));
    }

    #[test]
    fn reduced_motion_reveals_children_immediately() {
        let mut state = State::new(true);
        state.register(SectionId::Intro, span(600.0, 300.0), 3);
        state.handle_scroll(0.0, 660.0, Instant::now());

        assert!(state.is_section_in(SectionId::Intro));
        assert!(!state.has_pending());
        for child in 0..3 {
            assert!(state.is_child_in(SectionId::Intro, child));
        }
    }

    #[test]
    fn force_reveal_bypasses_observation() {
        let mut state = controller();
        state.force_reveal(SectionId::Gallery);

        assert!(state.is_section_in(SectionId::Gallery));
        assert!(!state.has_pending());
        for child in 0..6 {
            assert!(state.is_child_in(SectionId::Gallery, child));
        }
        // The intro is untouched.
        assert!(!state.is_section_in(SectionId::Intro));
    }

    #[test]
    fn unknown_section_queries_are_noop() {
        let state = controller();
        assert!(!state.is_section_in(SectionId::Contact));
        assert!(!state.is_child_in(SectionId::Contact, 0));
    }
}
