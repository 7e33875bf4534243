//! Shoe listing card.
//!
//! The card links to the listing page and shows the image, name, price and
//! colour count. Sale and new-release listings get a corner flag; sale
//! listings also strike through the base price and show the sale price.
//!
//! All variant-dependent styling is applied through CSS custom properties
//! (see [`VariantStyle::css_vars`]) read by [`STYLESHEET`].

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Utc};
use shoe_card_core::{ShoeListing, Variant, VariantStyle, format_price, pluralize};
use tracing::instrument;

use crate::components::Spacer;
use crate::config::CardConfig;
use crate::error::Result;

/// Stylesheet for the card markup.
pub const STYLESHEET: &str = include_str!("../../static/css/shoe_card.css");

/// Space between the image and the text rows, in pixels.
const IMAGE_SPACING: u32 = 12;

/// Shoe card display data for templates.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/shoe_card.html")]
pub struct ShoeCard {
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    pub flag_text: &'static str,
    /// Inline CSS custom properties for the variant.
    pub styles: String,
    pub price: String,
    /// Empty when the listing has no sale price.
    pub sale_price: String,
    pub color_info: String,
    pub spacer: Spacer,
}

impl ShoeCard {
    /// Build the card for a listing as of now.
    #[must_use]
    pub fn new(listing: &ShoeListing, config: &CardConfig) -> Self {
        Self::at(listing, Utc::now(), config)
    }

    /// Build the card for a listing as of `now`.
    #[must_use]
    pub fn at(listing: &ShoeListing, now: DateTime<Utc>, config: &CardConfig) -> Self {
        let variant = listing.variant_at(now, config.new_release_window);
        let style: &VariantStyle = variant.style();

        Self {
            href: format!("{}/{}", config.link_prefix, listing.slug),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            variant,
            flag_text: style.flag_text,
            styles: style.css_vars(),
            price: format_price(Some(listing.price), config.currency),
            sale_price: format_price(listing.sale_price, config.currency),
            color_info: pluralize("Color", listing.num_of_colors),
            spacer: Spacer::new(IMAGE_SPACING),
        }
    }

    /// Visual parameters for this card's variant.
    #[must_use]
    pub const fn style(&self) -> &'static VariantStyle {
        self.variant.style()
    }
}

/// Render a listing card to HTML as of now.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_card(listing: &ShoeListing, config: &CardConfig) -> Result<String> {
    render_card_at(listing, Utc::now(), config)
}

/// Render a listing card to HTML as of `now`.
///
/// # Errors
///
/// Returns an error if the template fails to render.
#[instrument(skip_all, fields(slug = %listing.slug))]
pub fn render_card_at(
    listing: &ShoeListing,
    now: DateTime<Utc>,
    config: &CardConfig,
) -> Result<String> {
    let card = ShoeCard::at(listing, now, config);
    tracing::debug!(variant = %card.variant, "Rendering shoe card");
    Ok(card.render()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use chrono::{TimeDelta, TimeZone};
    use shoe_card_core::{CurrencyCode, Slug, theme};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn listing(sale_price: Option<i64>, released_days_ago: i64) -> ShoeListing {
        ShoeListing {
            slug: Slug::parse("air-zoom-alphafly").unwrap(),
            name: "Air Zoom Alphafly".to_string(),
            image_src: "/assets/air-zoom-alphafly.jpg".to_string(),
            price: 10_000,
            sale_price,
            release_date: now() - TimeDelta::days(released_days_ago),
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_on_sale_card() {
        let card = ShoeCard::at(&listing(Some(8_000), 730), now(), &CardConfig::default());

        assert_eq!(card.variant, Variant::OnSale);
        assert_eq!(card.flag_text, "Sale");
        assert_eq!(card.price, "$100.00");
        assert_eq!(card.sale_price, "$80.00");
        assert!(card.style().strikes_price());
        assert!(card.styles.contains("--price-decoration: line-through"));
        assert!(card.styles.contains("--sale-price-visibility: visible"));
    }

    #[test]
    fn test_new_release_card() {
        let card = ShoeCard::at(&listing(None, 5), now(), &CardConfig::default());

        assert_eq!(card.variant, Variant::NewRelease);
        assert_eq!(card.flag_text, "Just Released!");
        assert_eq!(card.sale_price, "");
        assert!(card.styles.contains("--sale-price-visibility: hidden"));
        assert!(card.styles.contains(theme::colors::SECONDARY));
    }

    #[test]
    fn test_default_card() {
        let card = ShoeCard::at(&listing(None, 730), now(), &CardConfig::default());

        assert_eq!(card.variant, Variant::Default);
        assert_eq!(card.flag_text, "");
        assert!(card.styles.contains("--flag-visibility: hidden"));
        assert!(card.styles.contains("--price-decoration: inherit"));
    }

    #[test]
    fn test_color_info() {
        let mut single = listing(None, 730);
        single.num_of_colors = 1;
        let card = ShoeCard::at(&single, now(), &CardConfig::default());
        assert_eq!(card.color_info, "1 Color");

        let card = ShoeCard::at(&listing(None, 730), now(), &CardConfig::default());
        assert_eq!(card.color_info, "3 Colors");
    }

    #[test]
    fn test_config_applied() {
        let config = CardConfig {
            new_release_window: TimeDelta::days(3),
            currency: CurrencyCode::GBP,
            link_prefix: "/products".to_string(),
        };
        let card = ShoeCard::at(&listing(None, 5), now(), &config);

        assert_eq!(card.variant, Variant::Default);
        assert_eq!(card.href, "/products/air-zoom-alphafly");
        assert_eq!(card.price, "£100.00");
    }

    #[test]
    fn test_rendered_markup() {
        let html = render_card_at(&listing(Some(8_000), 730), now(), &CardConfig::default()).unwrap();

        assert!(html.contains(r#"href="/shoe/air-zoom-alphafly""#));
        assert!(html.contains(r#"src="/assets/air-zoom-alphafly.jpg""#));
        assert!(html.contains(r#"alt="""#));
        assert!(html.contains("shoe-card--on-sale"));
        assert!(html.contains(">Sale</div>"));
        assert!(html.contains("Air Zoom Alphafly"));
        assert!(html.contains("$100.00"));
        assert!(html.contains("$80.00"));
        assert!(html.contains("3 Colors"));
        assert!(html.contains("min-height: 12px"));
    }

    #[test]
    fn test_rendered_markup_escapes_name() {
        let mut shoe = listing(None, 730);
        shoe.name = "<Blazer> & Co".to_string();
        let html = render_card_at(&shoe, now(), &CardConfig::default()).unwrap();

        assert!(!html.contains("<Blazer>"));
        assert!(!html.contains("> & Co"));
        assert!(html.contains("&#60;Blazer&#62; &#38; Co"));
    }

    #[test]
    fn test_stylesheet_uses_variant_properties() {
        for property in [
            "var(--flag-visibility)",
            "var(--flag-background)",
            "var(--price-decoration)",
            "var(--sale-price-visibility)",
        ] {
            assert!(STYLESHEET.contains(property), "missing {property}");
        }
        assert!(STYLESHEET.contains(theme::colors::PRIMARY));
        assert!(STYLESHEET.contains(theme::colors::GRAY_900));
    }

    #[tokio::test]
    async fn test_card_as_response() {
        let card = ShoeCard::at(&listing(None, 5), now(), &CardConfig::default());
        let response = card.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Just Released!"));
    }
}
