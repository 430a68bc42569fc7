// SPDX-License-Identifier: MPL-2.0
//! Responsive breakpoint and nominal page geometry.
//!
//! The page is a single vertical scroll of fixed-height sections, so section
//! spans can be computed from layout constants instead of querying the
//! widget tree. The reveal controller and the hero tilt both consume these
//! spans together with the live scroll offset.

/// Widths at or below this are the compact (single-column) layout.
pub const COMPACT_MAX_WIDTH: f32 = 620.0;

/// Gallery columns on the desktop layout.
pub const GALLERY_COLUMNS: usize = 3;

/// Vertical padding around the whole page.
pub const PAGE_PADDING: f32 = 32.0;

/// Gap between sections.
pub const SECTION_GAP: f32 = 48.0;

/// Section heights. The gallery grows with its row count.
pub const HERO_HEIGHT: f32 = 560.0;
pub const INTRO_HEIGHT: f32 = 280.0;
pub const GALLERY_HEADER_HEIGHT: f32 = 120.0;
pub const GALLERY_ROW_HEIGHT: f32 = 260.0;
pub const GALLERY_ROW_GAP: f32 = 24.0;
pub const CONTACT_HEIGHT: f32 = 260.0;

/// Window-width breakpoint, the native stand-in for the site's viewport
/// media queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Desktop,
}

impl Breakpoint {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            Breakpoint::Compact
        } else {
            Breakpoint::Desktop
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        matches!(self, Breakpoint::Compact)
    }
}

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Intro,
    Gallery,
    Contact,
}

/// Vertical extent of a section within the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Nominal vertical layout of the page for a given photo count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub hero: Span,
    pub intro: Span,
    pub gallery: Span,
    pub contact: Span,
}

impl PageMetrics {
    #[must_use]
    pub fn new(photo_count: usize) -> Self {
        let rows = photo_count.div_ceil(GALLERY_COLUMNS);
        let grid_height = if rows == 0 {
            0.0
        } else {
            rows as f32 * GALLERY_ROW_HEIGHT + (rows - 1) as f32 * GALLERY_ROW_GAP
        };

        let hero_top = PAGE_PADDING;
        let intro_top = hero_top + HERO_HEIGHT + SECTION_GAP;
        let gallery_top = intro_top + INTRO_HEIGHT + SECTION_GAP;
        let gallery_height = GALLERY_HEADER_HEIGHT + grid_height;
        let contact_top = gallery_top + gallery_height + SECTION_GAP;

        Self {
            hero: Span {
                top: hero_top,
                height: HERO_HEIGHT,
            },
            intro: Span {
                top: intro_top,
                height: INTRO_HEIGHT,
            },
            gallery: Span {
                top: gallery_top,
                height: gallery_height,
            },
            contact: Span {
                top: contact_top,
                height: CONTACT_HEIGHT,
            },
        }
    }

    #[must_use]
    pub fn span(&self, id: SectionId) -> Span {
        match id {
            SectionId::Hero => self.hero,
            SectionId::Intro => self.intro,
            SectionId::Gallery => self.gallery,
            SectionId::Contact => self.contact,
        }
    }
}
