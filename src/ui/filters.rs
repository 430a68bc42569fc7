// SPDX-License-Identifier: MPL-2.0
//! Filter chip row with a sliding active indicator.
//!
//! Exactly one chip is active at a time; selecting one hides all gallery
//! items of other categories. The indicator is laid over the chip row at
//! the active chip's measured offset and width. Measurements go through
//! `container::visible_bounds` tasks tagged with an epoch counter:
//! scheduling a new measurement bumps the epoch, so a stale in-flight
//! response is recognized and dropped rather than applied — the same
//! cancel-and-replace discipline as a pending animation frame.

use iced::advanced::widget;
use iced::Rectangle;

/// Filter value carried by each chip. `All` is the sentinel that hides
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Whether a gallery item with this category stays visible.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => name == category,
        }
    }
}

/// Measured indicator geometry, rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub left: f32,
    pub width: f32,
}

/// Effects the orchestrator must apply after a chip selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Re-filter the gallery and close the lightbox; the visible-card set
    /// may have changed.
    Selected(Filter),
}

/// Filter chip row state.
#[derive(Debug, Clone)]
pub struct State {
    chips: Vec<Filter>,
    active: usize,
    indicator: Option<Indicator>,
    epoch: u64,
}

impl State {
    /// Builds the chip row: the `All` sentinel followed by one chip per
    /// category, in manifest order.
    #[must_use]
    pub fn new(categories: &[&str]) -> Self {
        let mut chips = vec![Filter::All];
        chips.extend(
            categories
                .iter()
                .map(|name| Filter::Category((*name).to_string())),
        );
        Self {
            chips,
            active: 0,
            indicator: None,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn chips(&self) -> &[Filter] {
        &self.chips
    }

    /// Index of the active chip. Exactly one chip is active by
    /// construction; there is no separate per-chip flag to get out of sync.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        &self.chips[self.active]
    }

    #[must_use]
    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    /// Selects a chip. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Effect {
        if index >= self.chips.len() {
            return Effect::None;
        }
        self.active = index;
        Effect::Selected(self.chips[index].clone())
    }

    /// Invalidates any in-flight measurement and returns the token the next
    /// response must carry to be applied.
    pub fn schedule_measure(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    /// Applies a measurement response. Stale epochs and degenerate bounds
    /// (zero-width row or chip, e.g. before first layout) are dropped.
    pub fn apply_measure(
        &mut self,
        epoch: u64,
        row: Option<Rectangle>,
        chip: Option<Rectangle>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let (Some(row), Some(chip)) = (row, chip) else {
            return false;
        };
        if row.width <= 0.0 || chip.width <= 0.0 {
            return false;
        }
        self.indicator = Some(Indicator {
            left: (chip.x - row.x).max(0.0).round(),
            width: chip.width.round(),
        });
        true
    }

    /// Widget id of the chip row container, used for bounds queries.
    #[must_use]
    pub fn row_id() -> widget::Id {
        widget::Id::new("filter-chip-row")
    }

    /// Widget id of one chip container.
    #[must_use]
    pub fn chip_id(index: usize) -> widget::Id {
        widget::Id::from(format!("filter-chip-{index}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, width: f32) -> Rectangle {
        Rectangle {
            x,
            y: 0.0,
            width,
            height: 36.0,
        }
    }

    fn state() -> State {
        State::new(&["portrait", "travel", "editorial"])
    }

    #[test]
    fn all_sentinel_is_first_and_active() {
        let state = state();
        assert_eq!(state.chips().len(), 4);
        assert_eq!(state.active_filter(), &Filter::All);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut state = state();
        let effect = state.select(2);
        assert_eq!(
            effect,
            Effect::Selected(Filter::Category("travel".to_string()))
        );
        assert_eq!(state.active(), 2);

        state.select(1);
        assert_eq!(state.active(), 1);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = state();
        assert_eq!(state.select(99), Effect::None);
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn filter_matching() {
        assert!(Filter::All.matches("travel"));
        assert!(Filter::Category("travel".to_string()).matches("travel"));
        assert!(!Filter::Category("travel".to_string()).matches("portrait"));
    }

    #[test]
    fn stale_measurement_is_dropped() {
        let mut state = state();
        let first = state.schedule_measure();
        let second = state.schedule_measure();

        assert!(!state.apply_measure(first, Some(rect(0.0, 400.0)), Some(rect(10.0, 80.0))));
        assert_eq!(state.indicator(), None);

        assert!(state.apply_measure(second, Some(rect(0.0, 400.0)), Some(rect(10.0, 80.0))));
        assert_eq!(
            state.indicator(),
            Some(Indicator {
                left: 10.0,
                width: 80.0
            })
        );
    }

    #[test]
    fn measurement_rounds_and_clamps() {
        let mut state = state();
        let epoch = state.schedule_measure();
        assert!(state.apply_measure(
            epoch,
            Some(rect(100.4, 400.0)),
            Some(rect(100.1, 80.6))
        ));
        let indicator = state.indicator().expect("indicator not set");
        assert_eq!(indicator.left, 0.0); // negative offset clamped, rounded
        assert_eq!(indicator.width, 81.0);
    }

    #[test]
    fn degenerate_bounds_are_dropped() {
        let mut state = state();
        let epoch = state.schedule_measure();
        assert!(!state.apply_measure(epoch, Some(rect(0.0, 0.0)), Some(rect(0.0, 80.0))));
        let epoch = state.schedule_measure();
        assert!(!state.apply_measure(epoch, None, Some(rect(0.0, 80.0))));
        assert_eq!(state.indicator(), None);
    }
}
