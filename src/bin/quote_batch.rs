//! Batch regional quote adjustment
//!
//! Reads a CSV of repair quotes and writes each one back with the resolved
//! labor rate and the regionally adjusted parts, labor and total.
//!
//! Usage:
//!   cargo run --release --bin quote_batch -- [OPTIONS]
//!
//! Options:
//!   --input <PATH>           Input CSV with columns zip,parts,labor
//!   --output <PATH>          Output CSV path (default: data/adjusted_quotes.csv)
//!   --tables <PATH>          JSON rate tables (default: built-in tables)
//!   --metro-radius <MILES>   Metro override radius (default: 15.0)

use anyhow::{Context, Result};
use clap::Parser;
use labor_rates::quote::adjust_csv;
use labor_rates::{LaborRateResolver, RateTables, ResolverConfig};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "quote_batch")]
#[command(about = "Apply regional labor multipliers to a CSV of repair quotes")]
struct Args {
    /// Input CSV path (columns: zip, parts, labor)
    #[arg(long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "data/adjusted_quotes.csv")]
    output: PathBuf,

    /// JSON file replacing the built-in rate tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Maximum distance in miles for a metro rate to apply
    #[arg(long, default_value = "15.0")]
    metro_radius: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let tables = RateTables::load(args.tables.as_deref())?;
    let config = ResolverConfig {
        metro_radius_miles: args.metro_radius,
    };
    let resolver = LaborRateResolver::new(tables, config)?;

    info!("Reading quotes from {:?}", args.input);
    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open {:?}", args.input))?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
    }
    let output = File::create(&args.output)
        .with_context(|| format!("Failed to create {:?}", args.output))?;

    let (written, skipped) = adjust_csv(&resolver, input, output)?;
    info!(
        "Wrote {} adjusted quotes to {:?} ({} skipped)",
        written, args.output, skipped
    );

    Ok(())
}
