//! Askama components.
//!
//! Each component is a template struct holding display-ready strings, built
//! from core types by a constructor so templates stay free of logic.

pub mod shoe_card;
pub mod spacer;

pub use shoe_card::{STYLESHEET, ShoeCard, render_card, render_card_at};
pub use spacer::Spacer;
