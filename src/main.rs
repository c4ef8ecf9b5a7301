//! roll - evaluate dice rolls from the command line

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabletop::{Config, Roll, RollValue, Verbosity};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dice roller
#[derive(Parser, Debug)]
#[command(name = "roll", version, about = "Roll dice, e.g. 4d6L1 or 1d20+5")]
struct Args {
    /// Also print the individual and dropped dice
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Print only the rolled value
    #[arg(short, long)]
    quiet: bool,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: tabletop.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rolls in NdS[H h|L l][+a|-a] form
    rolls: Vec<String>,
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

    let verbosity = if args.verbose {
        Verbosity::Verbose
    } else if args.quiet {
        Verbosity::Quiet
    } else {
        config.verbosity
    };

    let mut seeded = args.seed.or(config.seed).map(|seed| {
        info!("Using seed {}", seed);
        StdRng::seed_from_u64(seed)
    });

    for arg in &args.rolls {
        let roll: Roll = match arg.parse() {
            Ok(roll) => roll,
            Err(e) => {
                println!("Error in {}: {}", arg, e);
                continue;
            }
        };

        let value = match seeded.as_mut() {
            Some(rng) => roll.roll_with(rng),
            None => roll.roll(),
        };
        debug!("{} -> {:?}", roll, value);
        print_value(&roll, &value, verbosity);
    }

    Ok(())
}

fn print_value(roll: &Roll, value: &RollValue, verbosity: Verbosity) {
    match verbosity {
        Verbosity::Quiet => println!("{}", value.value()),
        Verbosity::Normal => println!("{} = {}", roll, value.value()),
        Verbosity::Verbose => {
            println!("{} = {}", roll, value.value());
            println!("  values: {:?}", value.rolls());
            if !value.dropped_low().is_empty() {
                println!("  dropped low: {:?}", value.dropped_low());
            }
            if !value.dropped_high().is_empty() {
                println!("  dropped high: {:?}", value.dropped_high());
            }
        }
    }
}
