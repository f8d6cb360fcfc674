// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The application persists exactly one preference: the reader's chosen
//! language. Every deliberate language change flows through here so the
//! document, the in-memory config and the file on disk stay in step.

use crate::config::{self, Config};
use crate::content::Page;
use crate::i18n::Locale;

/// Applies the newly selected locale to the document and persists it.
///
/// A failed save is reported and otherwise ignored; the switch itself must
/// still happen for the reader.
pub fn apply_language_change(page: &mut Page, config: &mut Config, locale: Locale) {
    page.switch_locale(locale);
    config.language = Some(locale.as_str().to_string());

    if let Err(error) = config::save(config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
