// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded in
//! the binary; the locale is resolved from CLI, config, or system settings.

pub mod fluent;

pub use fluent::I18n;
