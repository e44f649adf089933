//! Error types.

use thiserror::Error;

/// Errors returned by the routing core.
///
/// Every failure is detected before any solving begins. A search that stops
/// at its deadline is not an error; see
/// [`Termination::DeadlineReached`](crate::local_search::Termination).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The instance or its inputs are malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons an instance is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("location list is empty")]
    EmptyLocations,

    #[error("vehicle count must be at least 1")]
    NoVehicles,

    #[error("depot index {depot} is out of range for {size} locations")]
    DepotOutOfRange { depot: usize, size: usize },

    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance from {from} to {to} must be finite and non-negative, got {value}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    #[error("distance from {index} to itself must be zero, got {value}")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("coordinate {index} ({lat}, {lon}) is not a valid latitude/longitude")]
    CoordinateOutOfRange { index: usize, lat: f64, lon: f64 },

    #[error("time budget must be positive")]
    NonPositiveTimeBudget,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
