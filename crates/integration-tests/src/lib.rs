//! Integration tests for the shoe listing card.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoe-card-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `variant_resolution` - Variant rules across the whole input space
//! - `card_render` - Rendered markup for each variant
//!
//! Shared fixtures live in this crate so every test file builds listings the
//! same way.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::json;
use shoe_card_core::ShoeListing;

/// The instant every test treats as "now".
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Build a listing through the same JSON shape the catalogue files use.
///
/// # Panics
///
/// Panics if the fixture does not deserialize, which means the listing shape
/// itself has regressed.
#[must_use]
pub fn listing(price: i64, sale_price: Option<i64>, released_days_ago: i64) -> ShoeListing {
    let release_date = fixed_now() - TimeDelta::days(released_days_ago);
    serde_json::from_value(json!({
        "slug": "react-infinity-run",
        "name": "React Infinity Run",
        "imageSrc": "/assets/react-infinity-run.jpg",
        "price": price,
        "salePrice": sale_price,
        "releaseDate": release_date.to_rfc3339(),
        "numOfColors": 4
    }))
    .expect("fixture listing should deserialize")
}
