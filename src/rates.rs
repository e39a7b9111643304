//! Hourly labor rate tables for vehicle repair
//!
//! State averages and metro-area rates in dollars per hour. States missing
//! from the state table price at the national average.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::geo::Coordinate;
use crate::state::StateCode;

/// National average shop labor rate ($/hour); the multiplier baseline
pub const NATIONAL_AVERAGE_RATE: f64 = 144.06;

/// Metro area with its own labor rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub coordinate: Coordinate,
    pub metro_rate: f64,
}

impl CityRecord {
    pub fn new(name: &str, latitude: f64, longitude: f64, metro_rate: f64) -> Self {
        Self {
            name: name.to_string(),
            coordinate: Coordinate::new(latitude, longitude),
            metro_rate,
        }
    }
}

/// State average labor rates ($/hour)
pub static STATE_RATES: LazyLock<HashMap<StateCode, f64>> = LazyLock::new(|| {
    use StateCode::*;

    let mut m = HashMap::new();

    // Northeast
    m.insert(MA, 158.40);
    m.insert(RI, 148.75);
    m.insert(NH, 141.20);
    m.insert(ME, 128.90);
    m.insert(CT, 152.30);
    m.insert(NJ, 156.80);
    m.insert(NY, 132.50);
    m.insert(PA, 138.60);

    // Mid-Atlantic
    m.insert(DE, 142.15);
    m.insert(DC, 165.00);
    m.insert(MD, 149.90);
    m.insert(VA, 140.35);
    m.insert(WV, 118.40);

    // Southeast
    m.insert(NC, 129.75);
    m.insert(SC, 124.60);
    m.insert(GA, 133.20);
    m.insert(FL, 137.45);
    m.insert(AL, 119.80);
    m.insert(TN, 126.30);
    m.insert(MS, 112.50);
    m.insert(KY, 121.70);
    m.insert(LA, 123.95);
    m.insert(AR, 116.25);

    // Midwest
    m.insert(OH, 127.40);
    m.insert(IN, 124.10);
    m.insert(MI, 131.85);
    m.insert(IA, 120.60);
    m.insert(WI, 128.35);
    m.insert(MN, 139.70);
    m.insert(IL, 143.25);
    m.insert(MO, 125.50);
    m.insert(KS, 122.80);
    m.insert(NE, 121.15);

    // South Central
    m.insert(OK, 118.90);
    m.insert(TX, 130.40);

    // Mountain
    m.insert(CO, 147.60);
    m.insert(ID, 127.25);
    m.insert(UT, 134.80);
    m.insert(AZ, 136.95);
    m.insert(NM, 124.45);
    m.insert(NV, 145.30);

    // Pacific
    m.insert(CA, 172.90);
    m.insert(OR, 151.40);
    m.insert(WA, 160.25);
    m.insert(AK, 168.70);
    m.insert(HI, 174.50);

    // No survey data for MT, WY, ND, SD or VT

    m
});

/// Major metro areas, in lookup order. Ties on distance keep the earlier entry.
pub static CITY_RATES: LazyLock<Vec<CityRecord>> = LazyLock::new(|| {
    vec![
        CityRecord::new("new york", 40.7128, -74.0060, 140.00),
        CityRecord::new("los angeles", 34.0522, -118.2437, 165.00),
        CityRecord::new("chicago", 41.8781, -87.6298, 150.00),
        CityRecord::new("houston", 29.7604, -95.3698, 135.00),
        CityRecord::new("phoenix", 33.4484, -112.0740, 138.00),
        CityRecord::new("philadelphia", 39.9526, -75.1652, 148.00),
        CityRecord::new("san antonio", 29.4241, -98.4936, 125.00),
        CityRecord::new("san diego", 32.7157, -117.1611, 160.00),
        CityRecord::new("dallas", 32.7767, -96.7970, 138.00),
        CityRecord::new("san jose", 37.3382, -121.8863, 175.00),
        CityRecord::new("austin", 30.2672, -97.7431, 140.00),
        CityRecord::new("jacksonville", 30.3322, -81.6557, 125.00),
        CityRecord::new("san francisco", 37.7749, -122.4194, 180.00),
        CityRecord::new("columbus", 39.9612, -82.9988, 128.00),
        CityRecord::new("seattle", 47.6062, -122.3321, 165.00),
        CityRecord::new("denver", 39.7392, -104.9903, 150.00),
        CityRecord::new("washington", 38.9072, -77.0369, 158.00),
        CityRecord::new("boston", 42.3601, -71.0589, 162.00),
        CityRecord::new("nashville", 36.1627, -86.7816, 130.00),
        CityRecord::new("detroit", 42.3314, -83.0458, 135.00),
        CityRecord::new("portland", 45.5152, -122.6784, 152.00),
        CityRecord::new("las vegas", 36.1699, -115.1398, 145.00),
        CityRecord::new("atlanta", 33.7490, -84.3880, 138.00),
        CityRecord::new("miami", 25.7617, -80.1918, 145.00),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_states() {
        assert_eq!(STATE_RATES.get(&StateCode::CA), Some(&172.90));
        assert_eq!(STATE_RATES.get(&StateCode::NY), Some(&132.50));
    }

    #[test]
    fn test_sparse_states_are_unmapped() {
        for state in [StateCode::MT, StateCode::WY, StateCode::ND, StateCode::SD, StateCode::VT] {
            assert!(!STATE_RATES.contains_key(&state), "{} should be unmapped", state);
        }
        assert_eq!(STATE_RATES.len(), 46);
    }

    #[test]
    fn test_all_rates_positive() {
        assert!(STATE_RATES.values().all(|r| r.is_finite() && *r > 0.0));
        assert!(CITY_RATES.iter().all(|c| c.metro_rate.is_finite() && c.metro_rate > 0.0));
    }

    #[test]
    fn test_city_names_unique() {
        let mut names: Vec<&str> = CITY_RATES.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CITY_RATES.len());
        assert_eq!(CITY_RATES.len(), 24);
    }
}
