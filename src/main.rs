use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Convert a FoxESS JSON export to a semicolon-delimited CSV table on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert FoxESS JSON export to CSV", long_about = None)]
struct Cli {
    /// Exported JSON file
    input: PathBuf,

    /// Log parsing details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("foxess2csv={}", level)));

    // stdout carries the table only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    // Parse CLI flags
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    foxess2csv::convert(&cli.input, out)
        .with_context(|| format!("Cannot convert input file: {}", cli.input.display()))?;

    Ok(())
}
