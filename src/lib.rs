//! Regional labor rate resolution for vehicle-repair quoting
//!
//! Maps a US ZIP code to a state average or metro-area hourly labor rate and
//! expresses it as a multiplier of the national average.

pub mod api;
pub mod geo;
pub mod quote;
pub mod rates;
pub mod resolver;
pub mod state;
pub mod tables;
pub mod zip_ranges;

pub use resolver::{
    multiplier_for_zip, resolve_labor_rate, LaborRateResolver, RateResolution, RateSource,
    ResolverConfig,
};
pub use state::StateCode;
pub use tables::RateTables;
