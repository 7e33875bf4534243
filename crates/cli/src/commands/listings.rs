//! Load listings from a catalogue file.

use std::path::Path;

use shoe_card_core::ShoeListing;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a catalogue.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON catalogue: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML catalogue: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported catalogue format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Catalogue file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a list of listings from catalogue text.
///
/// # Errors
///
/// Returns an error if the text is not a valid list of listings.
pub fn parse(content: &str, format: Format) -> Result<Vec<ShoeListing>, LoadError> {
    let listings = match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(listings)
}

/// Read and parse a catalogue file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension, or
/// does not contain a valid list of listings.
pub async fn load(path: &Path) -> Result<Vec<ShoeListing>, LoadError> {
    let format = Format::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let listings = parse(&content, format)?;
    info!(path = %path.display(), count = listings.len(), "Loaded listings");
    Ok(listings)
}
