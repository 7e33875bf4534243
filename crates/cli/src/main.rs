//! Shoe Card CLI - preview listing cards from a catalogue file.
//!
//! # Usage
//!
//! ```bash
//! # Render every listing in a catalogue to HTML
//! shoe-card render data/shoes.json > preview.html
//!
//! # Render as of a fixed instant, with the stylesheet inlined
//! shoe-card render data/shoes.yaml --at 2024-06-15T00:00:00Z --stylesheet
//!
//! # List the resolved variant of each listing
//! shoe-card variants data/shoes.json
//! ```
//!
//! # Commands
//!
//! - `render` - Write card HTML to stdout
//! - `variants` - Write `slug<TAB>variant` lines to stdout

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use shoe_card_storefront::CardConfig;

mod commands;

#[derive(Parser)]
#[command(name = "shoe-card")]
#[command(author, version, about = "Shoe listing card preview tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render listing cards to HTML
    Render {
        /// Catalogue file (.json, .yaml or .yml)
        file: PathBuf,

        /// Render as of this RFC 3339 instant instead of now
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,

        /// Prepend the card stylesheet in a <style> element
        #[arg(long)]
        stylesheet: bool,
    },
    /// Print the resolved variant of each listing
    Variants {
        /// Catalogue file (.json, .yaml or .yml)
        file: PathBuf,

        /// Resolve as of this RFC 3339 instant instead of now
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so rendered HTML on stdout stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoe_card=info,shoe_card_storefront=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CardConfig::from_env()?;

    match cli.command {
        Commands::Render {
            file,
            at,
            stylesheet,
        } => {
            let now = at.unwrap_or_else(Utc::now);
            commands::render::cards(&file, now, stylesheet, &config).await?;
        }
        Commands::Variants { file, at } => {
            let now = at.unwrap_or_else(Utc::now);
            commands::variants::list(&file, now, &config).await?;
        }
    }
    Ok(())
}
