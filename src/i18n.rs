use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Languages the UI text table ships with.
///
/// English is the fallback for every unrecognized locale.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Locale {
    #[default]
    English,
    Turkish,
}

/// Raised when a two-letter code does not name a supported locale.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unrecognized locale code: {0:?}")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.eq_ignore_ascii_case("en") {
            Ok(Self::English)
        } else if code.eq_ignore_ascii_case("tr") {
            Ok(Self::Turkish)
        } else {
            Err(UnknownLocale(code.to_owned()))
        }
    }
}

impl Locale {
    /// Resolves a locale tag like `tr_TR.UTF-8` or `en-US` by its primary
    /// two-letter subtag, falling back to English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        primary_subtag(tag).parse().unwrap_or_default()
    }

    /// Picks the locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES`, then `LANG`, mirroring the usual
    /// precedence; English when none is set or recognized.
    #[must_use]
    pub fn from_env() -> Self {
        for name in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            match env::var(name) {
                Ok(tag) if !tag.is_empty() => return Self::from_tag(&tag),
                _ => {}
            }
        }
        Self::default()
    }

    /// Returns the two-letter code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Turkish => "tr",
        }
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
}

/// Keys into the UI text table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageKey {
    AppTitle,
    Score,
    Speed,
    GameOver,
    Restart,
}

/// Pure text lookup, total over locale × key.
#[must_use]
pub fn localize(locale: Locale, key: MessageKey) -> &'static str {
    match (locale, key) {
        (Locale::English, MessageKey::AppTitle) => "Grid Snake",
        (Locale::English, MessageKey::Score) => "Score",
        (Locale::English, MessageKey::Speed) => "Speed",
        (Locale::English, MessageKey::GameOver) => "Game Over!",
        (Locale::English, MessageKey::Restart) => "Restart",
        (Locale::Turkish, MessageKey::AppTitle) => "Yılan",
        (Locale::Turkish, MessageKey::Score) => "Skor",
        (Locale::Turkish, MessageKey::Speed) => "Hız",
        (Locale::Turkish, MessageKey::GameOver) => "Oyun Bitti!",
        (Locale::Turkish, MessageKey::Restart) => "Yeniden Başlat",
    }
}

/// Formats the score line shown by the UI collaborator.
#[must_use]
pub fn score_label(locale: Locale, score: u32) -> String {
    format!("{}: {score}", localize(locale, MessageKey::Score))
}

/// Formats the speed line shown by the UI collaborator.
#[must_use]
pub fn speed_label(locale: Locale, tick_rate: u32) -> String {
    format!("{}: {tick_rate} fps", localize(locale, MessageKey::Speed))
}

#[cfg(test)]
mod tests {
    use super::{localize, score_label, speed_label, Locale, MessageKey};

    const ALL_KEYS: [MessageKey; 5] = [
        MessageKey::AppTitle,
        MessageKey::Score,
        MessageKey::Speed,
        MessageKey::GameOver,
        MessageKey::Restart,
    ];

    #[test]
    fn tags_resolve_by_primary_subtag() {
        assert_eq!(Locale::from_tag("tr_TR.UTF-8"), Locale::Turkish);
        assert_eq!(Locale::from_tag("TR"), Locale::Turkish);
        assert_eq!(Locale::from_tag("en-US"), Locale::English);
        assert_eq!(Locale::from_tag("en_GB.UTF-8@euro"), Locale::English);
    }

    #[test]
    fn unrecognized_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("de_DE.UTF-8"), Locale::English);
        assert_eq!(Locale::from_tag("C"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
    }

    #[test]
    fn parsing_rejects_unknown_codes() {
        assert!("en".parse::<Locale>().is_ok());
        assert!("tr".parse::<Locale>().is_ok());
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn every_key_has_text_in_every_locale() {
        for locale in [Locale::English, Locale::Turkish] {
            for key in ALL_KEYS {
                assert!(!localize(locale, key).is_empty(), "{locale:?}/{key:?}");
            }
        }
    }

    #[test]
    fn turkish_table_is_translated() {
        assert_eq!(localize(Locale::Turkish, MessageKey::Score), "Skor");
        assert_eq!(
            localize(Locale::Turkish, MessageKey::Restart),
            "Yeniden Başlat"
        );
        assert_eq!(localize(Locale::Turkish, MessageKey::GameOver), "Oyun Bitti!");
    }

    #[test]
    fn labels_format_score_and_speed() {
        assert_eq!(score_label(Locale::English, 7), "Score: 7");
        assert_eq!(speed_label(Locale::English, 12), "Speed: 12 fps");
        assert_eq!(score_label(Locale::Turkish, 7), "Skor: 7");
        assert_eq!(speed_label(Locale::Turkish, 12), "Hız: 12 fps");
    }

    #[test]
    fn env_detection_runs_without_panicking() {
        let _ = Locale::from_env();
    }
}
