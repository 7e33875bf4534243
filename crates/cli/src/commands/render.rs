//! Render listing cards to stdout.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use shoe_card_storefront::{CardConfig, STYLESHEET, render_card_at};
use tracing::info;

use super::listings;

/// Render every listing in `file` as of `now`.
///
/// # Errors
///
/// Returns an error if the catalogue cannot be loaded, a card fails to
/// render, or stdout cannot be written.
pub async fn cards(
    file: &Path,
    now: DateTime<Utc>,
    include_stylesheet: bool,
    config: &CardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let shoes = listings::load(file).await?;

    let mut html = String::new();
    if include_stylesheet {
        html.push_str("<style>\n");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n");
    }
    for shoe in &shoes {
        html.push_str(&render_card_at(shoe, now, config)?);
        html.push('\n');
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;

    info!(cards = shoes.len(), "Rendered cards");
    Ok(())
}
