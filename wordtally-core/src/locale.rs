//! Locale identifiers for language-sensitive segmentation

use crate::error::{CoreError, Result};
use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale selecting which segmentation rules apply
///
/// Either the configured default or a BCP-47 tag such as `en-US` or `th`.
/// Tags are stored as given (after normalization) and only checked when an
/// analyzer needs them, so an unsupported tag surfaces as
/// [`CoreError::UnsupportedLocale`] at segmentation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    /// Use whatever default the caller configured
    #[default]
    Default,
    /// An explicit language tag
    Tag(String),
}

impl Locale {
    /// Create a locale from a tag
    ///
    /// `""`, `"default"`, `"C"` and `"POSIX"` select [`Locale::Default`].
    /// POSIX-style tags are normalized, so `en_US.UTF-8` becomes `en-US`.
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim();
        // Drop POSIX codeset and modifier suffixes
        let tag = tag.split(['.', '@']).next().unwrap_or_default();

        if tag.is_empty()
            || tag.eq_ignore_ascii_case("default")
            || tag == "C"
            || tag == "POSIX"
        {
            return Locale::Default;
        }

        Locale::Tag(tag.replace('_', "-"))
    }

    /// Whether this is the default locale
    pub fn is_default(&self) -> bool {
        matches!(self, Locale::Default)
    }

    /// The explicit tag, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Locale::Default => None,
            Locale::Tag(tag) => Some(tag),
        }
    }

    /// Replace [`Locale::Default`] with `fallback`
    pub fn or(&self, fallback: &Locale) -> Locale {
        match self {
            Locale::Default => fallback.clone(),
            Locale::Tag(_) => self.clone(),
        }
    }

    /// Check that the tag parses as a BCP-47 locale
    pub fn validate(&self) -> Result<()> {
        self.language_identifier().map(|_| ())
    }

    /// Parse the tag into an ICU language identifier
    ///
    /// Returns `None` for [`Locale::Default`]. Unicode extensions are
    /// accepted and ignored.
    pub fn language_identifier(&self) -> Result<Option<LanguageIdentifier>> {
        match self {
            Locale::Default => Ok(None),
            Locale::Tag(tag) => tag
                .parse::<icu_locale_core::Locale>()
                .map(|locale| Some(locale.id))
                .map_err(|_| CoreError::UnsupportedLocale { tag: tag.clone() }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Default => write!(f, "default"),
            Locale::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Locale::new(s))
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
