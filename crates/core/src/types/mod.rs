//! Core types for shoe listing cards.
//!
//! This module provides type-safe wrappers for the listing data a card is
//! rendered from, and the variant rules that decide how it is styled.

pub mod listing;
pub mod price;
pub mod slug;
pub mod variant;

pub use listing::ShoeListing;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use slug::{Slug, SlugError};
pub use variant::{TextDecoration, Variant, VariantStyle, Visibility};
