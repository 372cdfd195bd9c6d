#![allow(non_snake_case)]

mod app;
mod preview;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use character_card_core::{CardOptions, Character};
use tracing_subscriber::EnvFilter;

/// Record rendered when no `--character` file is given
pub(crate) const SAMPLE_CHARACTER: &str = include_str!("../../character-card-core/tests/fixtures/mock_character.json");

/// Character Card - render a card preview
#[derive(Parser, Debug)]
#[command(name = "character-card")]
#[command(about = "Render a character card to HTML or a preview window")]
struct Args {
    /// JSON file with the character record (defaults to a bundled sample)
    #[arg(short, long)]
    character: Option<PathBuf>,

    /// Show the card as a favorite
    #[arg(short, long)]
    favorite: bool,

    /// Background color of the content region (e.g. "#FFF")
    #[arg(long)]
    bg_color: Option<String>,

    /// Maximum card width (e.g. "326px")
    #[arg(long)]
    max_width: Option<String>,

    /// Write the HTML page to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Open a native preview window
    #[cfg(feature = "desktop")]
    #[arg(short, long)]
    window: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let character = match &args.character {
        Some(path) => Character::from_path(path)
            .with_context(|| format!("Failed to load character from {}", path.display()))?,
        None => Character::from_json_str(SAMPLE_CHARACTER)
            .context("Bundled sample character is invalid")?,
    };

    let options = CardOptions {
        is_favorite: args.favorite,
        bg_color: args.bg_color,
        max_width: args.max_width,
    };

    #[cfg(feature = "desktop")]
    {
        if args.window {
            app::launch_desktop(character, options);
            return Ok(());
        }
    }

    tracing::info!("Rendering card for '{}'", character.name);
    let html = preview::render_page(character, options);

    match args.out {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote preview to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
