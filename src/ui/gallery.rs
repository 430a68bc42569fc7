// SPDX-License-Identifier: MPL-2.0
//! Photo grid state: per-item visibility flags and the keyboard cursor.
//!
//! Visibility is explicit state mutated by the filter controller, not
//! something re-derived from the widget tree. The lightbox snapshots
//! `visible_cards()` at open time.

use crate::portfolio::Photo;
use crate::ui::filters::Filter;

/// One gallery item: a photo index plus its visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub photo: usize,
    pub hidden: bool,
}

/// Photo grid state.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<Item>,
    categories: Vec<String>,
    /// False on compact layouts: cards are not focusable or activatable.
    interactive: bool,
    /// Keyboard cursor: position within the current visible-card list.
    focus: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new(photos: &[Photo]) -> Self {
        Self {
            items: (0..photos.len())
                .map(|photo| Item {
                    photo,
                    hidden: false,
                })
                .collect(),
            categories: photos.iter().map(|p| p.category.clone()).collect(),
            interactive: true,
            focus: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Photo indices of items not hidden, in document order.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|item| !item.hidden)
            .map(|item| item.photo)
            .collect()
    }

    /// Hides exactly the items whose category does not match the filter.
    /// The keyboard cursor is reset because card positions change.
    pub fn apply_filter(&mut self, filter: &Filter) {
        for item in &mut self.items {
            item.hidden = !filter.matches(&self.categories[item.photo]);
        }
        self.focus = None;
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Enables or disables card interactivity (compact layouts disable it).
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.focus = None;
        }
    }

    /// Position of the keyboard cursor within `visible_cards()`.
    #[must_use]
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Photo index under the keyboard cursor.
    #[must_use]
    pub fn focused_card(&self) -> Option<usize> {
        let visible = self.visible_cards();
        self.focus.and_then(|i| visible.get(i).copied())
    }

    /// Restores the cursor to a remembered position, clamped to the current
    /// visible set.
    pub fn restore_focus(&mut self, position: Option<usize>) {
        let count = self.visible_cards().len();
        self.focus = match position {
            Some(p) if self.interactive && count > 0 => Some(p.min(count - 1)),
            _ => None,
        };
    }

    /// Moves the cursor forward, wrapping past the last visible card.
    pub fn focus_next(&mut self) {
        self.focus = self.cycle(1);
    }

    /// Moves the cursor backward, wrapping past the first visible card.
    pub fn focus_previous(&mut self) {
        self.focus = self.cycle(-1);
    }

    fn cycle(&self, direction: isize) -> Option<usize> {
        if !self.interactive {
            return None;
        }
        let count = self.visible_cards().len();
        if count == 0 {
            return None;
        }
        Some(match self.focus {
            None => {
                if direction > 0 {
                    0
                } else {
                    count - 1
                }
            }
            Some(current) => {
                (current as isize + direction).rem_euclid(count as isize) as usize
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos() -> Vec<Photo> {
        let categories = [
            "portrait", "portrait", "travel", "travel", "travel", "editorial",
        ];
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| Photo {
                source: format!("https://example.com/{i}.jpg?w=800"),
                alt: format!("photo {i}"),
                title: None,
                category: (*category).to_string(),
            })
            .collect()
    }

    #[test]
    fn all_cards_visible_initially() {
        let state = State::new(&photos());
        assert_eq!(state.visible_cards(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_hides_exactly_non_matching_items() {
        let mut state = State::new(&photos());
        state.apply_filter(&Filter::Category("travel".to_string()));
        assert_eq!(state.visible_cards(), vec![2, 3, 4]);

        state.apply_filter(&Filter::All);
        assert_eq!(state.visible_cards().len(), 6);
    }

    #[test]
    fn focus_cycles_over_visible_cards() {
        let mut state = State::new(&photos());
        state.apply_filter(&Filter::Category("travel".to_string()));

        state.focus_next();
        assert_eq!(state.focused_card(), Some(2));
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused_card(), Some(4));
        state.focus_next(); // wraps
        assert_eq!(state.focused_card(), Some(2));

        state.focus_previous(); // wraps back
        assert_eq!(state.focused_card(), Some(4));
    }

    #[test]
    fn disabling_interactivity_clears_focus() {
        let mut state = State::new(&photos());
        state.focus_next();
        assert!(state.focus().is_some());

        state.set_interactive(false);
        assert_eq!(state.focus(), None);
        state.focus_next();
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn filter_resets_focus() {
        let mut state = State::new(&photos());
        state.focus_next();
        state.apply_filter(&Filter::Category("portrait".to_string()));
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn restore_focus_clamps_to_visible_set() {
        let mut state = State::new(&photos());
        state.apply_filter(&Filter::Category("editorial".to_string()));
        state.restore_focus(Some(4));
        assert_eq!(state.focus(), Some(0)); // only one editorial card
        assert_eq!(state.focused_card(), Some(5));
    }
}
