//! navwalker CLI
//!
//! Reads a JSON array of menu items and writes Bootstrap navbar markup.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navwalker::walker::{ItemSpacing, MaxDepth};
use navwalker::{Config, Forest, Walker};

/// Render a menu forest into Bootstrap 4 navbar markup.
#[derive(Debug, Parser)]
#[command(name = "navwalker", version, about)]
struct Cli {
    /// JSON file with the menu items ("-" reads stdin).
    forest: PathBuf,

    /// Render options file (.toml or .json).
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Depth limit: a non-negative integer or "unlimited".
    #[arg(long)]
    max_depth: Option<MaxDepth>,

    /// Emit no tabs or newlines.
    #[arg(long)]
    discard_spacing: bool,

    /// Open dropdowns on hover.
    #[arg(long)]
    dropdown_hover: bool,

    /// Write markup here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let mut options = config
        .load_options(cli.options.as_deref())
        .context("failed to load render options")?;
    if let Some(depth) = cli.max_depth {
        options.max_depth = depth;
    }
    if cli.discard_spacing {
        options.item_spacing = ItemSpacing::Discard;
    }
    if cli.dropdown_hover {
        options.dropdown_on_hover = true;
    }

    let json = read_forest(&cli.forest)?;
    let forest = Forest::from_json(&json)
        .with_context(|| format!("failed to load menu from {}", cli.forest.display()))?;
    info!(items = forest.len(), "menu loaded");

    let html = Walker::new(options).render(&forest);

    match cli.output {
        Some(path) => fs::write(&path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

fn read_forest(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("failed to read menu from stdin")?;
        return Ok(json);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
