//! REST API Server for regional labor rates
//!
//! Usage:
//!   ./target/release/api_server [options]
//!
//! Options:
//!   --port PORT              Port to listen on (default: 8080)
//!   --tables PATH            JSON rate tables (default: built-in tables)
//!   --metro-radius MILES     Metro override radius (default: 15.0)
//!
//! REST endpoints:
//!   GET /api/v1/health                          - Health check
//!   GET /api/v1/labor-rates/:zip                - Rate resolution for a ZIP
//!   GET /api/v1/quotes?zip=X&parts=N&labor=N    - Regionally adjusted quote

use anyhow::Result;
use clap::Parser;
use labor_rates::{api::create_router, LaborRateResolver, RateTables, ResolverConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve regional labor rate lookups over HTTP")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// JSON file replacing the built-in rate tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Maximum distance in miles for a metro rate to apply
    #[arg(long, default_value = "15.0")]
    metro_radius: f64,
}

fn print_banner(port: u16) {
    println!("============================================================");
    println!("              REGIONAL LABOR RATE API SERVER");
    println!("============================================================");
    println!();
    println!("  Port:     {}", port);
    println!("  REST:     http://localhost:{}/api/v1/", port);
    println!();
    println!("REST Endpoints:");
    println!("  GET /api/v1/health              Health check");
    println!("  GET /api/v1/labor-rates/:zip    Labor rate for a ZIP");
    println!("  GET /api/v1/quotes              Adjusted parts/labor quote");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    // Tables are loaded once; every request reads the same immutable resolver
    let tables = RateTables::load(args.tables.as_deref())?;
    let config = ResolverConfig {
        metro_radius_miles: args.metro_radius,
    };
    let resolver = Arc::new(LaborRateResolver::new(tables, config)?);

    print_banner(args.port);

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    let app = create_router(resolver);
    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
