//! Shoe Card Core - Shared types library.
//!
//! This crate provides the types and pure helpers behind the shoe listing card:
//! - `storefront` - Askama component that renders the card markup
//! - `cli` - Preview tool that renders listings from a data file
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! templates, no clocks except where a caller asks for "now". This keeps the
//! variant rules testable with fixed timestamps.
//!
//! # Modules
//!
//! - [`types`] - Listing data, slugs, prices and the display variant table
//! - [`display`] - `format_price`, `pluralize` and `is_new_shoe` helpers
//! - [`theme`] - Colour and font-weight tokens shared with the stylesheet

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod display;
pub mod theme;
pub mod types;

pub use display::{format_price, is_new_shoe, pluralize};
pub use types::*;
