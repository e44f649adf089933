//! Distance matrices and the providers that build them.
//!
//! Provides a dense, validated distance matrix plus straight-line and
//! great-circle providers for coordinate input.

mod matrix;
mod provider;

pub use matrix::DistanceMatrix;
pub use provider::{
    DistanceProvider, DistanceUnit, EuclideanProvider, GeodesicProvider, Metric,
};
