//! Shoe listing data.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::display::default_new_release_window;
use crate::types::{Slug, Variant};

/// A single shoe as supplied to the card.
///
/// Field names follow the camelCase shape of the catalogue data files:
///
/// ```json
/// {
///   "slug": "nike-air-max-270",
///   "name": "Air Max 270",
///   "imageSrc": "/assets/air-max-270.jpg",
///   "price": 16500,
///   "salePrice": null,
///   "releaseDate": "2024-05-20T00:00:00Z",
///   "numOfColors": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    /// Base price in cents.
    pub price: i64,
    /// Sale price in cents; `None` when the shoe is not discounted.
    #[serde(default)]
    pub sale_price: Option<i64>,
    /// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates, or epoch
    /// milliseconds (integer or fractional, as JavaScript `Date` values
    /// serialize; fractions round to the nearest millisecond).
    #[serde(deserialize_with = "deserialize_release_date")]
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Resolve the display variant at a given instant.
    #[must_use]
    pub fn variant_at(&self, now: DateTime<Utc>, window: TimeDelta) -> Variant {
        Variant::resolve(self.sale_price, self.release_date, now, window)
    }

    /// Resolve the display variant now, using the default recency window.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant_at(Utc::now(), default_new_release_window())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseDate {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawReleaseDate::deserialize(deserializer)? {
        RawReleaseDate::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| de::Error::custom(format!("release date out of range: {ms}"))),
        RawReleaseDate::FractionalMillis(ms) => from_fractional_millis(ms)
            .ok_or_else(|| de::Error::custom(format!("release date out of range: {ms}"))),
        RawReleaseDate::Text(text) => parse_release_date(&text).map_err(de::Error::custom),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // range is checked before the cast
fn from_fractional_millis(ms: f64) -> Option<DateTime<Utc>> {
    let rounded = ms.round();
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(rounded as i64)
}

fn parse_release_date(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("invalid release date: {text:?}"))
}
