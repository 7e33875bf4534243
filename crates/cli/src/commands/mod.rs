//! CLI command implementations.

pub mod listings;
pub mod render;
pub mod variants;
