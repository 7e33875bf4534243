//! Print the resolved variant of each listing.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use shoe_card_core::ShoeListing;
use shoe_card_storefront::CardConfig;

use super::listings;

/// Format one `slug<TAB>variant` line per listing.
fn variant_lines(shoes: &[ShoeListing], now: DateTime<Utc>, config: &CardConfig) -> String {
    shoes
        .iter()
        .map(|shoe| {
            format!(
                "{}\t{}\n",
                shoe.slug,
                shoe.variant_at(now, config.new_release_window)
            )
        })
        .collect()
}

/// List the variant of every listing in `file` as of `now`.
///
/// # Errors
///
/// Returns an error if the catalogue cannot be loaded or stdout cannot be
/// written.
pub async fn list(
    file: &Path,
    now: DateTime<Utc>,
    config: &CardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let shoes = listings::load(file).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(variant_lines(&shoes, now, config).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
