// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the shared constants behind every component's styling.
//!
//! - **Palette**: base colors (warm accent for a photography look)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//!
//! Tokens are meant to stay consistent across components; change them here,
//! not inline in views.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.28, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.93);

    // Accent (warm amber, against the photo-first neutral surfaces)
    pub const ACCENT_300: Color = Color::from_rgb(0.96, 0.77, 0.44);
    pub const ACCENT_500: Color = Color::from_rgb(0.85, 0.58, 0.2);
    pub const ACCENT_700: Color = Color::from_rgb(0.62, 0.4, 0.1);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.85, 0.26, 0.22);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Unrevealed reveal children render at this opacity.
    pub const HIDDEN_CHILD: f32 = 0.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Height of filter chips and the row they sit in.
    pub const CHIP_HEIGHT: f32 = 36.0;

    /// Height of the indicator bar under the active chip.
    pub const INDICATOR_HEIGHT: f32 = 3.0;

    /// Lightbox thumbnail strip entries.
    pub const THUMB_WIDTH: f32 = 96.0;
    pub const THUMB_HEIGHT: f32 = 64.0;

    /// Square hit area for lightbox controls.
    pub const CONTROL_SIZE: f32 = 44.0;
}

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 42.0;

    /// Kinetic word next to the hero stage.
    pub const KINETIC: f32 = 28.0;

    /// Section headings.
    pub const TITLE: f32 = 24.0;

    /// Standard body text.
    pub const BODY: f32 = 15.0;

    /// Captions and hints.
    pub const CAPTION: f32 = 13.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::HIDDEN_CHILD >= 0.0);
    assert!(opacity::OVERLAY_STRONG < opacity::OPAQUE);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::THUMB_WIDTH > sizing::THUMB_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_warm() {
        assert!(palette::ACCENT_500.r > palette::ACCENT_500.b);
    }
}
