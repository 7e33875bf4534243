//! Card configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOE_CARD_NEW_RELEASE_DAYS` - Days a release counts as new (default: 30)
//! - `SHOE_CARD_CURRENCY` - ISO 4217 code used for prices (default: USD)
//! - `SHOE_CARD_LINK_PREFIX` - Path prefix for card links (default: /shoe)

use chrono::TimeDelta;
use shoe_card_core::CurrencyCode;
use shoe_card_core::display::NEW_RELEASE_WINDOW_DAYS;
use thiserror::Error;

const DEFAULT_LINK_PREFIX: &str = "/shoe";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings that shape how cards are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// How long after release a shoe is flagged as new
    pub new_release_window: TimeDelta,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Path prefix for the listing link, without trailing slash
    pub link_prefix: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            new_release_window: TimeDelta::days(NEW_RELEASE_WINDOW_DAYS),
            currency: CurrencyCode::default(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
        }
    }
}

impl CardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let new_release_window = match lookup("SHOE_CARD_NEW_RELEASE_DAYS") {
            Some(raw) => parse_window_days(&raw)?,
            None => defaults.new_release_window,
        };

        let currency = match lookup("SHOE_CARD_CURRENCY") {
            Some(raw) => raw.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOE_CARD_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };

        let link_prefix = lookup("SHOE_CARD_LINK_PREFIX")
            .map_or(defaults.link_prefix, |raw| normalize_link_prefix(&raw));

        Ok(Self {
            new_release_window,
            currency,
            link_prefix,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a positive day count into a window.
fn parse_window_days(raw: &str) -> Result<TimeDelta, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar("SHOE_CARD_NEW_RELEASE_DAYS".to_string(), reason)
    };

    let days = raw.trim().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if days <= 0 {
        return Err(invalid(format!("must be greater than zero (got {days})")));
    }
    TimeDelta::try_days(days).ok_or_else(|| invalid(format!("{days} days is out of range")))
}

/// Ensure a single leading slash and no trailing slash.
fn normalize_link_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CardConfig::default());
        assert_eq!(config.new_release_window, TimeDelta::days(30));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.link_prefix, "/shoe");
    }

    #[test]
    fn test_overrides() {
        let config = CardConfig::from_lookup(lookup_from(&[
            ("SHOE_CARD_NEW_RELEASE_DAYS", "14"),
            ("SHOE_CARD_CURRENCY", "eur"),
            ("SHOE_CARD_LINK_PREFIX", "products/"),
        ]))
        .unwrap();

        assert_eq!(config.new_release_window, TimeDelta::days(14));
        assert_eq!(config.currency, CurrencyCode::EUR);
        assert_eq!(config.link_prefix, "/products");
    }

    #[test]
    fn test_invalid_window() {
        let result = CardConfig::from_lookup(lookup_from(&[("SHOE_CARD_NEW_RELEASE_DAYS", "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));

        let result = CardConfig::from_lookup(lookup_from(&[("SHOE_CARD_NEW_RELEASE_DAYS", "0")]));
        assert!(result.is_err());

        let result = CardConfig::from_lookup(lookup_from(&[("SHOE_CARD_NEW_RELEASE_DAYS", "-3")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_currency() {
        let result = CardConfig::from_lookup(lookup_from(&[("SHOE_CARD_CURRENCY", "JPY")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("SHOE_CARD_CURRENCY"));
    }

    #[test]
    fn test_normalize_link_prefix() {
        assert_eq!(normalize_link_prefix("/shoe"), "/shoe");
        assert_eq!(normalize_link_prefix("shoe/"), "/shoe");
        assert_eq!(normalize_link_prefix("/"), "");
    }
}
