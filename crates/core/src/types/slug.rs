//! Listing slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `a-z`, `0-9` and `-`.
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL-safe listing identifier, e.g. `nike-air-max-270`.
///
/// The slug becomes the last path segment of the card link, so it is kept to
/// a character set that never needs escaping.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - Only lowercase ASCII letters, digits and `-`
/// - Must not start or end with `-`
///
/// ## Examples
///
/// ```
/// use shoe_card_core::Slug;
///
/// assert!(Slug::parse("nike-air-max-270").is_ok());
///
/// assert!(Slug::parse("").is_err());
/// assert!(Slug::parse("Air Max").is_err());
/// assert!(Slug::parse("-air").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than
    /// [`Self::MAX_LENGTH`], contains anything other than lowercase ASCII
    /// letters, digits and hyphens, or starts/ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(Slug::parse("nike-air-max-270").is_ok());
        assert!(Slug::parse("a").is_ok());
        assert!(Slug::parse("pegasus-38").is_ok());
        assert!(Slug::parse("990v5").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(Slug::MAX_LENGTH + 1);
        assert!(matches!(Slug::parse(&long), Err(SlugError::TooLong { .. })));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            Slug::parse("Air-Max"),
            Err(SlugError::InvalidCharacter('A'))
        );
        assert_eq!(
            Slug::parse("air max"),
            Err(SlugError::InvalidCharacter(' '))
        );
        assert_eq!(
            Slug::parse("air/max"),
            Err(SlugError::InvalidCharacter('/'))
        );
    }

    #[test]
    fn test_parse_edge_hyphen() {
        assert_eq!(Slug::parse("-air"), Err(SlugError::EdgeHyphen));
        assert_eq!(Slug::parse("air-"), Err(SlugError::EdgeHyphen));
    }

    #[test]
    fn test_display() {
        let slug = Slug::parse("react-infinity").unwrap();
        assert_eq!(format!("{slug}"), "react-infinity");
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<Slug, _> = serde_json::from_str("\"Not A Slug\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let slug: Slug = serde_json::from_str("\"joyride-run\"").unwrap();
        assert_eq!(slug.as_str(), "joyride-run");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"joyride-run\"");
    }
}
