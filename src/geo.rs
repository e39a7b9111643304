//! Approximate ZIP coordinates and great-circle distance
//!
//! Coordinates produced here are a rough proxy for ranking metro areas by
//! proximity. They are not geocoding results: the metro radius is tuned
//! against this approximation, so the bands must stay as they are.

use serde::{Deserialize, Serialize};

use crate::zip_ranges::parse_zip;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Geographic center of the contiguous United States (Lebanon, KS)
pub const CONTINENTAL_CENTER: Coordinate = Coordinate::new(39.8283, -98.5795);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// ZIP band anchored at a metro city.
/// Position within the band is `(zip - low) / (high - low + 1)`.
struct ZipBand {
    low: u32,
    high: u32,
    origin: Coordinate,
    lat_span: f64,
    lon_span: f64,
}

const ZIP_BANDS: [ZipBand; 4] = [
    // New York metro outward through upstate NY
    ZipBand {
        low: 10000,
        high: 14999,
        origin: Coordinate::new(40.7128, -74.0060),
        lat_span: 2.2,
        lon_span: -4.8,
    },
    // Chicago outward through MO/KS/NE
    ZipBand {
        low: 60000,
        high: 69999,
        origin: Coordinate::new(41.8781, -87.6298),
        lat_span: -1.5,
        lon_span: -3.0,
    },
    // Houston outward through west Texas
    ZipBand {
        low: 77000,
        high: 79999,
        origin: Coordinate::new(29.7604, -95.3698),
        lat_span: 3.0,
        lon_span: -6.0,
    },
    // Los Angeles outward along the Pacific coast
    ZipBand {
        low: 90000,
        high: 96999,
        origin: Coordinate::new(34.0522, -118.2437),
        lat_span: 6.0,
        lon_span: -4.0,
    },
];

/// Estimate a coordinate for a ZIP code. Never fails.
///
/// ZIPs inside one of the four known bands get a linear offset from the
/// band's anchor city; everything else (including unparseable input) maps to
/// the continental center.
pub fn estimate_coordinates(zip: &str) -> Coordinate {
    let Some(code) = parse_zip(zip) else {
        return CONTINENTAL_CENTER;
    };

    ZIP_BANDS
        .iter()
        .find(|band| code >= band.low && code <= band.high)
        .map(|band| {
            let t = (code - band.low) as f64 / (band.high - band.low + 1) as f64;
            Coordinate::new(
                band.origin.latitude + band.lat_span * t,
                band.origin.longitude + band.lon_span * t,
            )
        })
        .unwrap_or(CONTINENTAL_CENTER)
}

/// Haversine great-circle distance in miles
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}
