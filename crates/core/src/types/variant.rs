//! Display variants for a listing card.
//!
//! A card is rendered in exactly one of three variants. Sale listings are
//! always shown as `on-sale`, even when they were also released recently.

use core::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::display::is_new_shoe;
use crate::theme::colors;

/// How a listing card is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The listing has a sale price.
    OnSale,
    /// The listing was released inside the recency window.
    NewRelease,
    /// Neither on sale nor recently released; no flag is shown.
    #[default]
    Default,
}

impl Variant {
    /// Resolve the variant for a listing.
    ///
    /// Priority order: a sale price wins, then a recent release date, then
    /// the plain default.
    ///
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use shoe_card_core::Variant;
    ///
    /// let now = Utc::now();
    /// let window = TimeDelta::days(30);
    ///
    /// let fresh = now - TimeDelta::days(5);
    /// assert_eq!(Variant::resolve(Some(8000), fresh, now, window), Variant::OnSale);
    /// assert_eq!(Variant::resolve(None, fresh, now, window), Variant::NewRelease);
    /// ```
    #[must_use]
    pub fn resolve(
        sale_price: Option<i64>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
        window: TimeDelta,
    ) -> Self {
        if sale_price.is_some() {
            Self::OnSale
        } else if is_new_shoe(release_date, now, window) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    /// Look up the visual parameters for this variant.
    #[must_use]
    pub const fn style(self) -> &'static VariantStyle {
        match self {
            Self::OnSale => &ON_SALE_STYLE,
            Self::NewRelease => &NEW_RELEASE_STYLE,
            Self::Default => &DEFAULT_STYLE,
        }
    }

    /// Kebab-case name, also used as a CSS modifier class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS `visibility` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

/// CSS `text-decoration` value for the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    LineThrough,
    Inherit,
}

impl TextDecoration {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::LineThrough => "line-through",
            Self::Inherit => "inherit",
        }
    }
}

/// Visual parameters derived from a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Whether the corner flag is shown.
    pub flag_visibility: Visibility,
    /// Text inside the corner flag.
    pub flag_text: &'static str,
    /// Flag background colour.
    pub flag_background: &'static str,
    /// Decoration applied to the base price.
    pub price_decoration: TextDecoration,
    /// Whether the sale price is shown.
    pub sale_price_visibility: Visibility,
}

const ON_SALE_STYLE: VariantStyle = VariantStyle {
    flag_visibility: Visibility::Visible,
    flag_text: "Sale",
    flag_background: colors::PRIMARY,
    price_decoration: TextDecoration::LineThrough,
    sale_price_visibility: Visibility::Visible,
};

const NEW_RELEASE_STYLE: VariantStyle = VariantStyle {
    flag_visibility: Visibility::Visible,
    flag_text: "Just Released!",
    flag_background: colors::SECONDARY,
    price_decoration: TextDecoration::Inherit,
    sale_price_visibility: Visibility::Hidden,
};

const DEFAULT_STYLE: VariantStyle = VariantStyle {
    flag_visibility: Visibility::Hidden,
    flag_text: "",
    flag_background: colors::PRIMARY,
    price_decoration: TextDecoration::Inherit,
    sale_price_visibility: Visibility::Hidden,
};

impl VariantStyle {
    #[must_use]
    pub fn shows_flag(&self) -> bool {
        self.flag_visibility == Visibility::Visible
    }

    #[must_use]
    pub fn shows_sale_price(&self) -> bool {
        self.sale_price_visibility == Visibility::Visible
    }

    #[must_use]
    pub fn strikes_price(&self) -> bool {
        self.price_decoration == TextDecoration::LineThrough
    }

    /// Render the style as CSS custom properties for an inline `style`
    /// attribute. The stylesheet reads these variables.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--flag-visibility: {}; --flag-background: {}; --price-decoration: {}; --sale-price-visibility: {}",
            self.flag_visibility.as_css(),
            self.flag_background,
            self.price_decoration.as_css(),
            self.sale_price_visibility.as_css(),
        )
    }
}
