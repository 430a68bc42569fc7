// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photography portfolio viewer built with the Iced GUI
//! framework.
//!
//! It renders a single scrolling page from a TOML portfolio manifest: a
//! cross-fading hero rotator, a filterable photo grid, and a modal lightbox
//! with keyboard and swipe navigation. Sections reveal as they scroll into
//! view. Localization uses Fluent; preferences live in a `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod portfolio;
pub mod ui;
