// SPDX-License-Identifier: MPL-2.0
use iced_brief::config::{self, Config};
use iced_brief::content;
use iced_brief::i18n::locale::resolve_from;
use iced_brief::i18n::{Locale, StartupLocale};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        language: Some("en".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(
        resolve_from(None, &loaded_initial_config, None),
        StartupLocale::Saved(Locale::En)
    );

    // 2. Change config to es
    let spanish_config = Config {
        language: Some("es".to_string()),
    };
    config::save_to_path(&spanish_config, &temp_config_file_path)
        .expect("Failed to write spanish config file");

    let loaded_spanish_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load spanish config from path");
    assert_eq!(
        resolve_from(None, &loaded_spanish_config, None),
        StartupLocale::Saved(Locale::Es)
    );

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_startup_language_precedence() {
    let saved_en = Config {
        language: Some("en".to_string()),
    };

    // CLI beats the saved preference, even through a regional tag.
    assert_eq!(
        resolve_from(Some("es-MX"), &saved_en, Some(Locale::En)),
        StartupLocale::Override(Locale::Es)
    );

    // The saved preference beats the machine environment.
    assert_eq!(
        resolve_from(None, &saved_en, Some(Locale::Es)),
        StartupLocale::Saved(Locale::En)
    );

    // The environment only matters when it differs from the authored default.
    assert_eq!(
        resolve_from(None, &Config::default(), Some(Locale::En)),
        StartupLocale::Detected(Locale::En)
    );
    assert_eq!(
        resolve_from(None, &Config::default(), Some(Locale::Es)),
        StartupLocale::DefaultAuthored
    );
    assert_eq!(
        resolve_from(None, &Config::default(), None),
        StartupLocale::DefaultAuthored
    );
}

#[test]
fn test_full_page_language_switch() {
    let mut page = content::load().expect("embedded page should load");

    // The document is authored in Spanish.
    assert_eq!(page.lang, Locale::Es);
    let spanish_title = page.window_title().to_owned();
    let spanish_question = page.faq.entries[0].question.rendered.clone();

    // 1. Switch the whole document to English
    page.switch_locale(Locale::En);
    assert_eq!(page.lang, Locale::En);
    assert_ne!(page.window_title(), spanish_title);
    assert_ne!(page.faq.entries[0].question.rendered, spanish_question);
    assert_eq!(page.meta.brand.rendered, "CBHDC");

    // 2. Switch back and land on the authored text
    page.switch_locale(Locale::Es);
    assert_eq!(page.window_title(), spanish_title);
    assert_eq!(page.faq.entries[0].question.rendered, spanish_question);
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    std::fs::write(&temp_config_file_path, "language = [not toml")
        .expect("Failed to write corrupt config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Corrupt config should fall back, not error");
    assert_eq!(loaded, Config::default());

    dir.close().expect("Failed to close temporary directory");
}
