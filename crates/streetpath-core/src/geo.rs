//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// ---------------------------------------------------------------------------
// LatLon
// ---------------------------------------------------------------------------

/// A geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Return a coordinate shifted by (dlat, dlon) degrees.
    #[inline]
    pub const fn shift(self, dlat: f64, dlon: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    #[inline]
    pub fn distance_km(self, other: LatLon) -> f64 {
        haversine_km(self, other)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

// ---------------------------------------------------------------------------
// Haversine
// ---------------------------------------------------------------------------

/// Great-circle distance between `a` and `b` in kilometers (haversine
/// formula, mean Earth radius [`EARTH_RADIUS_KM`]).
///
/// The deltas are taken as absolute values so that `haversine_km(a, b)` and
/// `haversine_km(b, a)` are bit-for-bit identical.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let dlat = (lat2 - lat1).abs();
    let dlon = (lon2 - lon1).abs();

    let s_lat = (dlat / 2.0).sin();
    let s_lon = (dlon / 2.0).sin();
    let h = s_lat * s_lat + lat1.cos() * lat2.cos() * s_lon * s_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between `a` and `b` in meters.
///
/// This is the unit the engine uses for edge weights and heuristic estimates.
#[inline]
pub fn haversine_m(a: LatLon, b: LatLon) -> f64 {
    haversine_km(a, b) * 1000.0
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn latlon_round_trip() {
        let p = LatLon::new(48.8566, 2.3522);
        let json = serde_json::to_string(&p).unwrap();
        let back: LatLon = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
