//! Error handling for card rendering.
//!
//! Rendering itself never fails on listing data; errors only come from the
//! template engine. Configuration problems surface earlier as
//! [`ConfigError`](crate::config::ConfigError) from `CardConfig::from_env`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error type for the card component.
#[derive(Debug, Error)]
pub enum CardError {
    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Card error");

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `CardError`.
pub type Result<T> = std::result::Result<T, CardError>;
