//! Supported display locales and their text directions.

use serde::{Deserialize, Serialize};

/// A supported display locale.
///
/// Qayd web properties ship in English and Arabic. Every request resolves to
/// exactly one of these values; there is no "unknown locale" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Horizontal text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// The value used in the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// BCP-47 language tag, also the cookie value.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for this locale.
    #[must_use]
    pub const fn dir(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// Native-script display name, used by the locale switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn test_text_direction() {
        assert_eq!(Locale::En.dir().as_str(), "ltr");
        assert_eq!(Locale::Ar.dir().as_str(), "rtl");
    }
}
