//! catalog - load item catalogs and print their category tree

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tabletop::items::Catalog;
use tabletop::Config;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Item catalog viewer
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "Print the items in one or more catalogs")]
struct Args {
    /// Catalog JSON files (default: the config's `catalogs` list)
    files: Vec<PathBuf>,

    /// Show each item's value and weight
    #[arg(long)]
    details: bool,

    /// Config file (default: tabletop.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let files = if args.files.is_empty() {
        config.catalogs
    } else {
        args.files
    };
    if files.is_empty() {
        bail!("No catalog files given");
    }

    let mut catalog = Catalog::new();
    for path in &files {
        let loaded = catalog
            .load_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
        info!("Loaded {} items from {}", loaded, path.display());
    }

    if !catalog.issues.is_empty() {
        warn!("{} catalog entries were skipped", catalog.issues.len());
    }

    println!("{}", catalog.items.render(args.details));
    Ok(())
}
