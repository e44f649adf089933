//! Problem instance: distance matrix, fleet size, depot.

use crate::distance::DistanceMatrix;
use crate::error::{InvalidInput, Result};

/// A validated routing instance.
///
/// Locations are the indices `0..N` of the distance matrix. One of them is
/// the depot, where every vehicle starts and ends; all others are stops that
/// must be visited exactly once.
///
/// # Examples
///
/// ```
/// use optiroute::distance::DistanceMatrix;
/// use optiroute::models::RouteInstance;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 1.0],
///     vec![3.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let instance = RouteInstance::new(dm, 2, 0).unwrap();
/// assert_eq!(instance.num_stops(), 2);
/// assert_eq!(instance.stops().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteInstance {
    distances: DistanceMatrix,
    vehicle_count: usize,
    depot: usize,
}

impl RouteInstance {
    /// Creates an instance, rejecting an empty matrix, a zero-sized fleet or
    /// an out-of-range depot.
    pub fn new(distances: DistanceMatrix, vehicle_count: usize, depot: usize) -> Result<Self> {
        let size = distances.size();
        if size == 0 {
            return Err(InvalidInput::EmptyLocations.into());
        }
        if vehicle_count == 0 {
            return Err(InvalidInput::NoVehicles.into());
        }
        if depot >= size {
            return Err(InvalidInput::DepotOutOfRange { depot, size }.into());
        }
        Ok(Self {
            distances,
            vehicle_count,
            depot,
        })
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel distance from location `from` to location `to`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Depot location index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of locations including the depot.
    pub fn num_locations(&self) -> usize {
        self.distances.size()
    }

    /// Number of locations to visit (excluding the depot).
    pub fn num_stops(&self) -> usize {
        self.num_locations() - 1
    }

    /// Non-depot location indices in ascending order.
    pub fn stops(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_locations()).filter(move |&i| i != self.depot)
    }
}
