// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! The brief ships both languages inside its content document, so there is no
//! message catalog here; this module owns the locale type and the startup
//! language decision.
//!
//! # Features
//!
//! - Automatic locale resolution from CLI, config, or system settings
//! - Primary-subtag matching for regional variants (e.g. "en-US", "es-MX")
//! - Runtime language switching via [`Locale::opposite`]

pub mod locale;

pub use locale::{resolve_startup_locale, Locale, StartupLocale};
