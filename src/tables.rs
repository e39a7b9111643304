//! Rate table bundle used by the resolver
//!
//! Tables come either from the built-in data or from a JSON file loaded once
//! at startup. Either way they are validated up front and never change
//! afterwards.

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::geo::{distance_miles, Coordinate};
use crate::rates::{CityRecord, CITY_RATES, NATIONAL_AVERAGE_RATE, STATE_RATES};
use crate::state::StateCode;
use crate::zip_ranges::{lookup_state, ZipRange, ZIP_RANGES};

fn default_national_average() -> f64 {
    NATIONAL_AVERAGE_RATE
}

/// Immutable lookup tables for labor rate resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTables {
    /// Scanned in order; first containing range wins
    pub zip_ranges: Vec<ZipRange>,
    pub state_rates: HashMap<StateCode, f64>,
    /// Scanned in order; ties on distance keep the earlier city
    pub cities: Vec<CityRecord>,
    #[serde(default = "default_national_average")]
    pub national_average: f64,
}

/// Nearest metro area to a coordinate
#[derive(Debug, Clone, Copy)]
pub struct NearestCity<'a> {
    pub city: &'a CityRecord,
    pub distance_miles: f64,
}

impl RateTables {
    /// Tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            zip_ranges: ZIP_RANGES.to_vec(),
            state_rates: STATE_RATES.clone(),
            cities: CITY_RATES.clone(),
            national_average: NATIONAL_AVERAGE_RATE,
        }
    }

    /// Parse and validate tables from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: RateTables =
            serde_json::from_str(json).context("Failed to parse rate tables JSON")?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rate tables from {:?}", path))?;
        let tables = Self::from_json_str(&json)
            .with_context(|| format!("Invalid rate tables in {:?}", path))?;

        info!(
            "Loaded rate tables from {:?}: {} ZIP ranges, {} state rates, {} cities",
            path,
            tables.zip_ranges.len(),
            tables.state_rates.len(),
            tables.cities.len()
        );
        Ok(tables)
    }

    /// Built-in tables, or the given file when a path is supplied
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Check the invariants the resolver relies on.
    ///
    /// Ranges must be well-formed 5-digit intervals, ascending and disjoint;
    /// every rate must be finite and positive; at least one city is required.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.national_average.is_finite() && self.national_average > 0.0,
            "National average must be positive, got {}",
            self.national_average
        );

        for range in &self.zip_ranges {
            ensure!(
                range.low <= range.high && range.high <= 99_999,
                "Invalid ZIP range {:05}-{:05} for {}",
                range.low,
                range.high,
                range.state
            );
        }
        for pair in self.zip_ranges.windows(2) {
            if pair[1].low <= pair[0].high {
                bail!(
                    "ZIP range {:05}-{:05} ({}) overlaps or precedes {:05}-{:05} ({})",
                    pair[1].low,
                    pair[1].high,
                    pair[1].state,
                    pair[0].low,
                    pair[0].high,
                    pair[0].state
                );
            }
        }

        for (state, rate) in &self.state_rates {
            ensure!(
                rate.is_finite() && *rate > 0.0,
                "Rate for {} must be positive, got {}",
                state,
                rate
            );
        }

        ensure!(!self.cities.is_empty(), "City rate table is empty");
        for city in &self.cities {
            ensure!(
                city.metro_rate.is_finite() && city.metro_rate > 0.0,
                "Metro rate for '{}' must be positive, got {}",
                city.name,
                city.metro_rate
            );
            ensure!(
                (-90.0..=90.0).contains(&city.coordinate.latitude)
                    && (-180.0..=180.0).contains(&city.coordinate.longitude),
                "Coordinate for '{}' out of range: {:?}",
                city.name,
                city.coordinate
            );
        }

        Ok(())
    }

    pub fn resolve_state(&self, zip: &str) -> Option<StateCode> {
        lookup_state(&self.zip_ranges, zip)
    }

    /// State average, or the national average when the state is unmapped
    pub fn base_rate(&self, state: StateCode) -> f64 {
        self.state_rates
            .get(&state)
            .copied()
            .unwrap_or(self.national_average)
    }

    /// Closest city by great-circle distance; `None` only for an empty table
    pub fn nearest_city(&self, point: Coordinate) -> Option<NearestCity<'_>> {
        let mut nearest: Option<NearestCity<'_>> = None;

        for city in &self.cities {
            let distance = distance_miles(point, city.coordinate);
            // Strict comparison keeps the first city on ties
            if nearest.map_or(true, |n| distance < n.distance_miles) {
                nearest = Some(NearestCity {
                    city,
                    distance_miles: distance,
                });
            }
        }

        nearest
    }
}

impl Default for RateTables {
    fn default() -> Self {
        Self::builtin()
    }
}
