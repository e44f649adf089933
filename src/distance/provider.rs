//! Distance providers: turn coordinates into a distance matrix.

use geo::{Distance, Euclidean, Haversine};
use serde::{Deserialize, Serialize};

use super::DistanceMatrix;
use crate::error::{InvalidInput, Result};
use crate::models::Coordinate;

const METERS_PER_MILE: f64 = 1_609.344;
const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Produces a complete pairwise distance matrix from coordinates.
///
/// Implementations are pure: the same coordinates always give the same
/// matrix, and `matrix[i][i]` is always zero. A road-distance service can
/// implement this trait, or build a [`DistanceMatrix`] directly and hand it to
/// [`Solver::solve_matrix`](crate::solver::Solver::solve_matrix).
pub trait DistanceProvider {
    /// Computes the distance matrix for `coordinates`.
    ///
    /// Fails with [`InvalidInput::EmptyLocations`] on an empty list.
    fn compute(&self, coordinates: &[Coordinate]) -> Result<DistanceMatrix>;
}

/// Unit of geodesic distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Converts a length in meters to this unit.
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Miles => meters / METERS_PER_MILE,
            DistanceUnit::Kilometers => meters / METERS_PER_KILOMETER,
            DistanceUnit::Meters => meters,
        }
    }
}

/// Which built-in provider a solver uses for coordinate input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Straight-line distance on raw coordinate pairs.
    #[default]
    Euclidean,
    /// Great-circle distance between latitude/longitude pairs.
    Geodesic,
}

/// Straight-line distance on raw coordinate pairs.
///
/// # Examples
///
/// ```
/// use optiroute::distance::{DistanceProvider, EuclideanProvider};
/// use optiroute::models::Coordinate;
///
/// let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0)];
/// let dm = EuclideanProvider.compute(&coords).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanProvider;

impl DistanceProvider for EuclideanProvider {
    fn compute(&self, coordinates: &[Coordinate]) -> Result<DistanceMatrix> {
        check_coordinates(coordinates, false)?;
        let points: Vec<geo::Point<f64>> = coordinates.iter().map(Coordinate::to_point).collect();
        Ok(symmetric_matrix(&points, |a, b| Euclidean.distance(*a, *b)))
    }
}

/// Haversine great-circle distance, reported in a fixed unit.
///
/// # Examples
///
/// ```
/// use optiroute::distance::{DistanceProvider, DistanceUnit, GeodesicProvider};
/// use optiroute::models::Coordinate;
///
/// let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// let dm = GeodesicProvider::new(DistanceUnit::Kilometers).compute(&coords).unwrap();
/// // One degree of longitude on the equator is about 111.2 km.
/// assert!((dm.get(0, 1) - 111.2).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicProvider {
    unit: DistanceUnit,
}

impl GeodesicProvider {
    /// Creates a provider reporting distances in `unit`.
    pub fn new(unit: DistanceUnit) -> Self {
        Self { unit }
    }

    /// Unit of the produced distances.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }
}

impl DistanceProvider for GeodesicProvider {
    fn compute(&self, coordinates: &[Coordinate]) -> Result<DistanceMatrix> {
        check_coordinates(coordinates, true)?;
        let points: Vec<geo::Point<f64>> = coordinates.iter().map(Coordinate::to_point).collect();
        Ok(symmetric_matrix(&points, |a, b| {
            self.unit.from_meters(Haversine.distance(*a, *b))
        }))
    }
}

fn check_coordinates(coordinates: &[Coordinate], geographic: bool) -> Result<()> {
    if coordinates.is_empty() {
        return Err(InvalidInput::EmptyLocations.into());
    }
    for (index, c) in coordinates.iter().enumerate() {
        if !c.is_finite() {
            return Err(InvalidInput::NonFiniteCoordinate { index }.into());
        }
        if geographic && !c.is_geographic() {
            return Err(InvalidInput::CoordinateOutOfRange {
                index,
                lat: c.lat(),
                lon: c.lon(),
            }
            .into());
        }
    }
    Ok(())
}

/// Fills the upper triangle with `measure` and mirrors it; the diagonal stays zero.
fn symmetric_matrix<F>(points: &[geo::Point<f64>], measure: F) -> DistanceMatrix
where
    F: Fn(&geo::Point<f64>, &geo::Point<f64>) -> f64,
{
    let n = points.len();
    let mut dm = DistanceMatrix::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = measure(&points[i], &points[j]);
            dm.set(i, j, d);
            dm.set(j, i, d);
        }
    }
    dm
}
