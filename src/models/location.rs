//! Geographic or planar coordinates.

use serde::{Deserialize, Serialize};

/// A coordinate pair attached to a location.
///
/// Only distance providers read coordinates; the solver core works on
/// location indices and a distance matrix.
///
/// # Examples
///
/// ```
/// use optiroute::models::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(nyc.lat(), 40.7128);
/// assert_eq!(nyc.lon(), -74.0060);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    ///
    /// For planar instances the pair is read as `(x, y)` and any finite
    /// values are accepted.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude (or first planar component).
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude (or second planar component).
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns `true` if this is a valid latitude/longitude pair.
    pub fn is_geographic(&self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Converts to a `geo` point (`x = lon`, `y = lat`).
    pub fn to_point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
