// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the MajorMatch front end.
//!
//! This module provides the English/Arabic translation table using the Fluent
//! localization system, and the locale codes that select it.
//!
//! # Features
//!
//! - Translation files (`.ftl`) embedded in the binary
//! - Two locales with parallel key sets: `en` and `ar`
//! - Text direction derived from the locale (Arabic is right-to-left)
//! - Lookups report misses as `None`; callers decide on the fallback

pub mod fluent;

pub use fluent::Catalog;

use crate::config::DEFAULT_LOCALE_CODE;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Locales with a shipped translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Exact match on the locale code; anything else is unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Resolves `code`, substituting the default locale when it is unknown.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(Self::fallback)
    }

    fn fallback() -> Self {
        Self::from_code(DEFAULT_LOCALE_CODE).unwrap_or_default()
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// The toggle partner.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Layout flow of text for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code_or_default("fr"), Locale::En);
        assert_eq!(Locale::from_code_or_default(""), Locale::En);
        // Codes are matched exactly, as they are stored.
        assert_eq!(Locale::from_code_or_default("AR"), Locale::En);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.to_string(), "rtl");
        assert_eq!(Direction::Ltr.to_string(), "ltr");
    }

    #[test]
    fn other_is_its_own_inverse() {
        for locale in Locale::ALL {
            assert_ne!(locale.other(), locale);
            assert_eq!(locale.other().other(), locale);
        }
    }

    #[test]
    fn language_id_matches_code() {
        assert_eq!(Locale::Ar.language_id().to_string(), "ar");
        assert_eq!(Locale::En.language_id().to_string(), "en");
    }
}
