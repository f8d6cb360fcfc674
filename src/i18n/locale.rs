// SPDX-License-Identifier: MPL-2.0
//! The two content locales and the startup language decision.

use crate::config::Config;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A content locale. The document is authored in Spanish; English is the
/// translation carried alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Es,
    En,
}

impl Locale {
    /// The locale the document is authored in.
    pub const DEFAULT: Locale = Locale::Es;

    /// Parses a stored language code. Exact codes only; anything else is
    /// treated as no stored preference.
    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Matches a full language identifier by its primary subtag, so regional
    /// variants like "en-US" or "es-MX" select the right content language.
    pub fn from_language_identifier(lang: &LanguageIdentifier) -> Option<Locale> {
        match lang.language.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Badge text on the language toggle.
    pub fn short_code(self) -> &'static str {
        match self {
            Locale::Es => "ES",
            Locale::En => "EN",
        }
    }

    pub fn opposite(self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the startup language was decided. The variants differ in whether the
/// full switch path (which persists the preference) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupLocale {
    /// `--lang` on the command line. Applied to the document but never
    /// persisted; a launcher override is not a user preference.
    Override(Locale),
    /// The saved preference from `settings.toml`. Applied through the full
    /// switch path.
    Saved(Locale),
    /// The environment reported a supported locale other than the authored
    /// default. Applied through the full switch path.
    Detected(Locale),
    /// Nothing overrides the authored default; the document is left as
    /// written and nothing is persisted until the reader acts.
    DefaultAuthored,
}

/// Resolves the startup locale from CLI, saved config, and the environment.
pub fn resolve_startup_locale(cli_lang: Option<&str>, config: &Config) -> StartupLocale {
    resolve_from(cli_lang, config, detect_environment())
}

/// Resolution core with the environment locale passed in, so tests are not
/// hostage to the machine's language settings.
pub fn resolve_from(
    cli_lang: Option<&str>,
    config: &Config,
    environment: Option<Locale>,
) -> StartupLocale {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if let Some(locale) = Locale::from_language_identifier(&lang) {
                return StartupLocale::Override(locale);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Some(locale) = Locale::parse(lang_str) {
            return StartupLocale::Saved(locale);
        }
    }

    // 3. Check OS locale; only a non-default language redirects the document
    if let Some(locale) = environment {
        if locale != Locale::DEFAULT {
            return StartupLocale::Detected(locale);
        }
    }

    StartupLocale::DefaultAuthored
}

/// Reads the environment-reported language and maps it to a content locale.
pub fn detect_environment() -> Option<Locale> {
    let os_locale_str = sys_locale::get_locale()?;
    let os_lang = os_locale_str.parse::<LanguageIdentifier>().ok()?;
    Locale::from_language_identifier(&os_lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exact_codes_only() {
        assert_eq!(Locale::parse("es"), Some(Locale::Es));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), None);
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn opposite_swaps_locales() {
        assert_eq!(Locale::Es.opposite(), Locale::En);
        assert_eq!(Locale::En.opposite(), Locale::Es);
        assert_eq!(Locale::Es.opposite().opposite(), Locale::Es);
    }

    #[test]
    fn from_language_identifier_matches_primary_subtag() {
        let en_us: LanguageIdentifier = "en-US".parse().unwrap();
        let es_mx: LanguageIdentifier = "es-MX".parse().unwrap();
        let fr: LanguageIdentifier = "fr".parse().unwrap();

        assert_eq!(Locale::from_language_identifier(&en_us), Some(Locale::En));
        assert_eq!(Locale::from_language_identifier(&es_mx), Some(Locale::Es));
        assert_eq!(Locale::from_language_identifier(&fr), None);
    }

    #[test]
    fn short_codes_are_uppercase() {
        assert_eq!(Locale::Es.short_code(), "ES");
        assert_eq!(Locale::En.short_code(), "EN");
    }

    #[test]
    fn resolve_cli_override_wins() {
        let config = Config {
            language: Some("es".to_string()),
        };
        let resolved = resolve_from(Some("en"), &config, Some(Locale::Es));
        assert_eq!(resolved, StartupLocale::Override(Locale::En));
    }

    #[test]
    fn resolve_cli_accepts_regional_variant() {
        let config = Config::default();
        let resolved = resolve_from(Some("en-US"), &config, None);
        assert_eq!(resolved, StartupLocale::Override(Locale::En));
    }

    #[test]
    fn resolve_invalid_cli_falls_through_to_saved() {
        let config = Config {
            language: Some("en".to_string()),
        };
        let resolved = resolve_from(Some("klingon"), &config, None);
        assert_eq!(resolved, StartupLocale::Saved(Locale::En));
    }

    #[test]
    fn resolve_saved_wins_over_environment() {
        let config = Config {
            language: Some("es".to_string()),
        };
        let resolved = resolve_from(None, &config, Some(Locale::En));
        assert_eq!(resolved, StartupLocale::Saved(Locale::Es));
    }

    #[test]
    fn resolve_invalid_saved_is_treated_as_absent() {
        let config = Config {
            language: Some("de".to_string()),
        };
        let resolved = resolve_from(None, &config, Some(Locale::En));
        assert_eq!(resolved, StartupLocale::Detected(Locale::En));
    }

    #[test]
    fn resolve_english_environment_is_detected() {
        let config = Config::default();
        let resolved = resolve_from(None, &config, Some(Locale::En));
        assert_eq!(resolved, StartupLocale::Detected(Locale::En));
    }

    #[test]
    fn resolve_default_locale_environment_keeps_authored_document() {
        let config = Config::default();
        let resolved = resolve_from(None, &config, Some(Locale::Es));
        assert_eq!(resolved, StartupLocale::DefaultAuthored);
    }

    #[test]
    fn resolve_unknown_environment_keeps_authored_document() {
        let config = Config::default();
        let resolved = resolve_from(None, &config, None);
        assert_eq!(resolved, StartupLocale::DefaultAuthored);
    }
}
