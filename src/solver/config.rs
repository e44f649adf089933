//! Solver configuration.
//!
//! [`SolverConfig`] holds the few settings a solve reads: the time budget and
//! how coordinates become distances.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::distance::{DistanceProvider, DistanceUnit, EuclideanProvider, GeodesicProvider, Metric};
use crate::error::{InvalidInput, Result};

/// Default wall-clock budget for one solve.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Configuration for a [`Solver`](super::Solver).
///
/// # Defaults
///
/// ```
/// use std::time::Duration;
/// use optiroute::distance::{DistanceUnit, Metric};
/// use optiroute::solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.time_budget, Duration::from_secs(30));
/// assert_eq!(config.metric, Metric::Euclidean);
/// assert_eq!(config.unit, DistanceUnit::Miles);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use std::time::Duration;
/// use optiroute::distance::{DistanceUnit, Metric};
/// use optiroute::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_time_budget(Duration::from_secs(5))
///     .with_metric(Metric::Geodesic)
///     .with_unit(DistanceUnit::Kilometers);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wall-clock budget for construction plus improvement.
    ///
    /// When it runs out, the best solution found so far is returned with
    /// [`Termination::DeadlineReached`](crate::local_search::Termination).
    pub time_budget: Duration,

    /// Distance provider used for coordinate input.
    pub metric: Metric,

    /// Unit of geodesic distances. Ignored by the Euclidean metric.
    pub unit: DistanceUnit,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            metric: Metric::default(),
            unit: DistanceUnit::default(),
        }
    }
}

impl SolverConfig {
    /// Sets the wall-clock time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the geodesic distance unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_budget.is_zero() {
            return Err(InvalidInput::NonPositiveTimeBudget.into());
        }
        Ok(())
    }

    /// Builds the distance provider selected by `metric` and `unit`.
    pub fn provider(&self) -> Box<dyn DistanceProvider> {
        match self.metric {
            Metric::Euclidean => Box::new(EuclideanProvider),
            Metric::Geodesic => Box::new(GeodesicProvider::new(self.unit)),
        }
    }
}
