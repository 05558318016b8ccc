//! Distance unit conversions used when reporting a path length.

const KM_PER_MILE: f64 = 1.60934;
const MILES_PER_KM: f64 = 0.621371;

/// Convert miles to kilometers.
#[inline]
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Convert kilometers to miles.
#[inline]
pub fn kilometers_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Convert meters to kilometers.
#[inline]
pub fn meters_to_kilometers(m: f64) -> f64 {
    m / 1000.0
}

/// Convert meters to miles.
#[inline]
pub fn meters_to_miles(m: f64) -> f64 {
    kilometers_to_miles(meters_to_kilometers(m))
}
