//! Formatting helpers used by the card markup.

use chrono::{DateTime, TimeDelta, Utc};

use crate::types::{CurrencyCode, Price};

/// Number of days a release counts as new.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The default recency window ([`NEW_RELEASE_WINDOW_DAYS`] days).
#[must_use]
pub fn default_new_release_window() -> TimeDelta {
    TimeDelta::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Format an amount in cents for display, e.g. `Some(8000)` -> `"$80.00"`.
///
/// The whole part is grouped in thousands (`"$1,299.00"`).
///
/// A missing amount formats as an empty string, so an absent sale price
/// renders no text at all.
#[must_use]
pub fn format_price(cents: Option<i64>, currency: CurrencyCode) -> String {
    cents
        .map(|cents| Price::from_cents(cents, currency).to_string())
        .unwrap_or_default()
}

/// Prefix `word` with `count`, adding an `s` unless the count is exactly one.
///
/// ```
/// use shoe_card_core::pluralize;
///
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 4), "4 Colors");
/// ```
#[must_use]
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Whether a shoe released at `release_date` is still new at `now`.
///
/// Release dates in the future count as new.
#[must_use]
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>, window: TimeDelta) -> bool {
    now.signed_duration_since(release_date) < window
}
