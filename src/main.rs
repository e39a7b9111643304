//! Labor rate lookup CLI
//!
//! Usage:
//!   labor_rate [OPTIONS] <ZIP>...
//!
//! Options:
//!   --tables <PATH>          JSON rate tables (default: built-in tables)
//!   --metro-radius <MILES>   Metro override radius (default: 15.0)
//!   --json                   Print one JSON object per ZIP

use anyhow::Result;
use clap::Parser;
use labor_rates::{LaborRateResolver, RateTables, ResolverConfig};
use std::path::PathBuf;
use tracing::info;

/// Resolve ZIP codes to regional labor rates
#[derive(Parser, Debug)]
#[command(name = "labor_rate")]
#[command(about = "Resolve US ZIP codes to regional hourly labor rates")]
struct Args {
    /// ZIP codes to resolve
    #[arg(required = true)]
    zips: Vec<String>,

    /// JSON file replacing the built-in rate tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Maximum distance in miles for a metro rate to apply
    #[arg(long, default_value = "15.0")]
    metro_radius: f64,

    /// Output JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let tables = RateTables::load(args.tables.as_deref())?;
    let config = ResolverConfig {
        metro_radius_miles: args.metro_radius,
    };
    let resolver = LaborRateResolver::new(tables, config)?;
    info!("Resolving {} ZIP code(s)", args.zips.len());

    if args.json {
        for zip in &args.zips {
            println!("{}", serde_json::to_string(&resolver.resolve(zip))?);
        }
        return Ok(());
    }

    println!("\n{}", "=".repeat(96));
    println!("                              REGIONAL LABOR RATES");
    println!("{}\n", "=".repeat(96));
    println!(
        "  {:7} {:5} {:>9} {:16} {:>9} {:>9} {:16} {:>9} {:>8}",
        "ZIP", "State", "Rate", "Source", "Base", "Premium", "Nearest City", "Miles", "Mult"
    );
    println!("  {}", "-".repeat(94));

    for zip in &args.zips {
        let r = resolver.resolve(zip);
        println!(
            "  {:7} {:5} {:>9.2} {:16} {:>9.2} {:>9.2} {:16} {:>9} {:>8.4}",
            zip,
            r.state.map(|s| s.as_str()).unwrap_or("-"),
            r.rate,
            r.source.as_str(),
            r.base_rate,
            r.city_premium,
            r.nearest_city_name.as_deref().unwrap_or("-"),
            r.distance_to_city_miles
                .map(|d| format!("{:.1}", d))
                .unwrap_or_else(|| "-".to_string()),
            r.multiplier(),
        );
    }
    println!();

    Ok(())
}
