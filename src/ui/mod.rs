// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Each page feature is a self-contained controller following the Elm-style
//! "state down, messages up" pattern: a `State` struct with pure update
//! methods, plus a view function in `app::view` that renders from it.
//!
//! # Controllers
//!
//! - [`reveal`] - Reveal-on-scroll with staggered children
//! - [`hero`] - Cross-fading hero rotator with pointer tilt
//! - [`filters`] - Category chips with a sliding indicator
//! - [`gallery`] - Photo grid visibility and keyboard cursor
//! - [`lightbox`] - Modal viewer with focus containment and swipe
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Breakpoint and nominal page geometry
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod filters;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod lightbox;
pub mod reveal;
pub mod theming;
