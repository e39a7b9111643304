//! Applying the regional multiplier to repair quotes

use anyhow::{ensure, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::warn;

use crate::resolver::{LaborRateResolver, RateResolution};

/// Parts and labor after regional adjustment, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedQuote {
    pub parts: f64,
    pub labor: f64,
    pub total: f64,
    pub multiplier: f64,
}

/// Resolution plus the quote it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalQuote {
    pub resolution: RateResolution,
    pub quote: AdjustedQuote,
}

/// Scale parts and labor by `multiplier`.
///
/// The multiplier is used as-is; only the adjusted amounts are rounded.
/// `total` is the rounded sum of the unrounded adjusted amounts.
pub fn adjust_quote(parts: f64, labor: f64, multiplier: f64) -> Result<AdjustedQuote> {
    ensure!(
        parts.is_finite() && parts >= 0.0,
        "Parts cost must be a non-negative amount, got {}",
        parts
    );
    ensure!(
        labor.is_finite() && labor >= 0.0,
        "Labor cost must be a non-negative amount, got {}",
        labor
    );

    let adjusted_parts = parts * multiplier;
    let adjusted_labor = labor * multiplier;

    Ok(AdjustedQuote {
        parts: round_cents(adjusted_parts),
        labor: round_cents(adjusted_labor),
        total: round_cents(adjusted_parts + adjusted_labor),
        multiplier,
    })
}

/// Resolve the ZIP once and adjust the quote against that same resolution
pub fn quote_for_zip(
    resolver: &LaborRateResolver,
    zip: &str,
    parts: f64,
    labor: f64,
) -> Result<RegionalQuote> {
    let resolution = resolver.resolve(zip);
    let quote = adjust_quote(parts, labor, resolution.multiplier())?;
    Ok(RegionalQuote { resolution, quote })
}

/// CSV input row
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    zip: String,
    parts: f64,
    labor: f64,
}

/// CSV output row
#[derive(Debug, Serialize)]
struct AdjustedRecord<'a> {
    zip: &'a str,
    state: String,
    source: &'static str,
    rate: f64,
    base_rate: f64,
    city_premium: f64,
    nearest_city: &'a str,
    distance_miles: Option<f64>,
    multiplier: f64,
    parts: f64,
    labor: f64,
    adjusted_parts: f64,
    adjusted_labor: f64,
    adjusted_total: f64,
}

/// Adjust every `zip,parts,labor` row of a CSV and write the results.
///
/// Rows that fail to parse or carry invalid amounts are logged and skipped.
/// Returns `(written, skipped)`.
pub fn adjust_csv<R: io::Read, W: io::Write>(
    resolver: &LaborRateResolver,
    input: R,
    output: W,
) -> Result<(usize, usize)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(output);

    let mut written = 0;
    let mut skipped = 0;

    for (i, result) in reader.deserialize::<QuoteRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to parse record {}: {}", i, e);
                skipped += 1;
                continue;
            }
        };

        let q = match quote_for_zip(resolver, &record.zip, record.parts, record.labor) {
            Ok(q) => q,
            Err(e) => {
                warn!("Skipping record {} (zip {}): {}", i, record.zip, e);
                skipped += 1;
                continue;
            }
        };

        let r = &q.resolution;
        writer.serialize(AdjustedRecord {
            zip: &record.zip,
            state: r.state.map(|s| s.to_string()).unwrap_or_default(),
            source: r.source.as_str(),
            rate: r.rate,
            base_rate: r.base_rate,
            city_premium: round_cents(r.city_premium),
            nearest_city: r.nearest_city_name.as_deref().unwrap_or_default(),
            distance_miles: r.distance_to_city_miles,
            multiplier: q.quote.multiplier,
            parts: record.parts,
            labor: record.labor,
            adjusted_parts: q.quote.parts,
            adjusted_labor: q.quote.labor,
            adjusted_total: q.quote.total,
        })?;
        written += 1;
    }

    writer.flush()?;
    Ok((written, skipped))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
