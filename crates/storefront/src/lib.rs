//! Shoe Card Storefront - server-rendered listing card component.
//!
//! This crate renders a shoe listing as an HTML card using Askama templates.
//! The card implements `WebTemplate`, so an Axum handler can return it
//! directly; other hosts can call [`render_card`] and embed the string.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoe_card_storefront::{CardConfig, render_card};
//!
//! let config = CardConfig::from_env()?;
//! let html = render_card(&listing, &config)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;

pub use components::{STYLESHEET, ShoeCard, Spacer, render_card, render_card_at};
pub use config::{CardConfig, ConfigError};
pub use error::CardError;
