//! Labor rate resolution
//!
//! ZIP -> state -> base rate, then an optional metro override when the ZIP's
//! estimated position is within the metro radius of the nearest listed city.
//! Resolution is a total function: malformed or unknown input degrades to the
//! national average instead of failing.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::geo::estimate_coordinates;
use crate::state::StateCode;
use crate::tables::RateTables;

/// Default metro radius in miles, tuned against the coarse ZIP coordinate estimate
pub const DEFAULT_METRO_RADIUS_MILES: f64 = 15.0;

/// Where the final rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    NationalAverage,
    StateAverage,
    MetroArea,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::NationalAverage => "NationalAverage",
            RateSource::StateAverage => "StateAverage",
            RateSource::MetroArea => "MetroArea",
        }
    }
}

/// Result of resolving one ZIP. Created per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResolution {
    pub zip: String,
    pub state: Option<StateCode>,
    pub rate: f64,
    pub source: RateSource,
    pub base_rate: f64,
    /// `rate - base_rate` for metro overrides (may be negative), otherwise 0
    pub city_premium: f64,
    pub nearest_city_name: Option<String>,
    /// Rounded to one decimal place
    pub distance_to_city_miles: Option<f64>,
    /// Baseline the multiplier is computed against
    pub national_average: f64,
}

impl RateResolution {
    fn fallback(zip: &str, national_average: f64) -> Self {
        Self {
            zip: zip.to_string(),
            state: None,
            rate: national_average,
            source: RateSource::NationalAverage,
            base_rate: national_average,
            city_premium: 0.0,
            nearest_city_name: None,
            distance_to_city_miles: None,
            national_average,
        }
    }

    /// Rate relative to the national average.
    ///
    /// Apply it to dollar figures unrounded and round the adjusted amounts.
    pub fn multiplier(&self) -> f64 {
        self.rate / self.national_average
    }
}

/// Tunables for resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Nearest city must be at most this far away for its metro rate to apply
    pub metro_radius_miles: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            metro_radius_miles: DEFAULT_METRO_RADIUS_MILES,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.metro_radius_miles.is_finite() && self.metro_radius_miles >= 0.0,
            "Metro radius must be a non-negative number of miles, got {}",
            self.metro_radius_miles
        );
        Ok(())
    }
}

/// Resolves ZIP codes against a fixed set of rate tables
#[derive(Debug, Clone)]
pub struct LaborRateResolver {
    tables: RateTables,
    config: ResolverConfig,
}

impl LaborRateResolver {
    /// Create a resolver; tables and config are validated once here
    pub fn new(tables: RateTables, config: ResolverConfig) -> Result<Self> {
        tables.validate()?;
        config.validate()?;
        Ok(Self { tables, config })
    }

    /// Resolver over the built-in tables with the default metro radius
    pub fn builtin() -> Self {
        Self {
            tables: RateTables::builtin(),
            config: ResolverConfig::default(),
        }
    }

    /// Resolve the hourly labor rate for a ZIP. Never fails.
    pub fn resolve(&self, zip: &str) -> RateResolution {
        let national_average = self.tables.national_average;

        if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
            debug!("ZIP {:?} is not 5 digits, using national average", zip);
            return RateResolution::fallback(zip, national_average);
        }

        let Some(state) = self.tables.resolve_state(zip) else {
            debug!("ZIP {} has no state, using national average", zip);
            return RateResolution::fallback(zip, national_average);
        };

        let base_rate = self.tables.base_rate(state);
        let point = estimate_coordinates(zip);
        let nearest = self.tables.nearest_city(point);

        let mut resolution = RateResolution {
            zip: zip.to_string(),
            state: Some(state),
            rate: base_rate,
            source: RateSource::StateAverage,
            base_rate,
            city_premium: 0.0,
            nearest_city_name: nearest.map(|n| n.city.name.clone()),
            distance_to_city_miles: nearest.map(|n| round_tenths(n.distance_miles)),
            national_average,
        };

        if let Some(n) = nearest {
            if n.distance_miles <= self.config.metro_radius_miles {
                resolution.rate = n.city.metro_rate;
                resolution.source = RateSource::MetroArea;
                resolution.city_premium = n.city.metro_rate - base_rate;
            }
        }

        debug!(
            "ZIP {} -> {} {:?} ${:.2}/h (nearest: {:?} at {:?} mi)",
            zip,
            state,
            resolution.source,
            resolution.rate,
            resolution.nearest_city_name,
            resolution.distance_to_city_miles
        );

        resolution
    }

    /// `rate / national average` for a ZIP
    pub fn multiplier(&self, zip: &str) -> f64 {
        self.resolve(zip).multiplier()
    }
}

impl Default for LaborRateResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN_RESOLVER: LazyLock<LaborRateResolver> = LazyLock::new(LaborRateResolver::builtin);

/// Resolve a ZIP against the built-in tables
pub fn resolve_labor_rate(zip: &str) -> RateResolution {
    BUILTIN_RESOLVER.resolve(zip)
}

/// Multiplier for a ZIP against the built-in tables
pub fn multiplier_for_zip(zip: &str) -> f64 {
    BUILTIN_RESOLVER.multiplier(zip)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
