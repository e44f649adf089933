//! Solver entry points.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{extract_routes, SolverConfig};
use crate::constructive::cheapest_arc;
use crate::distance::{DistanceMatrix, DistanceProvider};
use crate::error::{InvalidInput, Result};
use crate::local_search::{improve, SearchStats, Termination};
use crate::models::{Coordinate, RouteInstance};

/// Fallback horizon when `now + time_budget` is not representable.
const MAX_HORIZON: Duration = Duration::from_secs(u32::MAX as u64);

/// Result of a solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// One depot-bounded stop sequence per vehicle, in vehicle order.
    pub routes: Vec<Vec<usize>>,
    /// Round-trip distance of each route, in vehicle order.
    pub route_costs: Vec<f64>,
    /// Sum of `route_costs`.
    pub total_cost: f64,
    /// Total distance of the constructed solution before improvement.
    pub initial_cost: f64,
    /// Why the improvement phase stopped. `DeadlineReached` is still a
    /// successful, usable result.
    pub termination: Termination,
    /// Local search counters.
    pub stats: SearchStats,
}

impl SolveOutcome {
    /// Returns `true` if the time budget ran out before the search converged.
    pub fn deadline_reached(&self) -> bool {
        self.termination == Termination::DeadlineReached
    }
}

/// Multi-vehicle routing solver.
///
/// Builds an initial solution with [`cheapest_arc`] and improves it with
/// [`improve`] until convergence or the configured time budget runs out.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use optiroute::models::Coordinate;
/// use optiroute::solver::{Solver, SolverConfig};
///
/// let solver = Solver::new(SolverConfig::default().with_time_budget(Duration::from_secs(1))).unwrap();
/// let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)].map(Coordinate::from);
///
/// let outcome = solver.solve(&square, 1, 0).unwrap();
/// assert_eq!(outcome.routes.len(), 1);
/// assert!((outcome.total_cost - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver, rejecting an invalid configuration.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves from coordinates with the configured metric.
    pub fn solve(
        &self,
        locations: &[Coordinate],
        vehicle_count: usize,
        depot: usize,
    ) -> Result<SolveOutcome> {
        let provider = self.config.provider();
        self.solve_with(provider.as_ref(), locations, vehicle_count, depot)
    }

    /// Solves from coordinates with a caller-supplied distance provider.
    ///
    /// The fleet and depot are validated before the provider is called.
    pub fn solve_with<P>(
        &self,
        provider: &P,
        locations: &[Coordinate],
        vehicle_count: usize,
        depot: usize,
    ) -> Result<SolveOutcome>
    where
        P: DistanceProvider + ?Sized,
    {
        if locations.is_empty() {
            return Err(InvalidInput::EmptyLocations.into());
        }
        if vehicle_count == 0 {
            return Err(InvalidInput::NoVehicles.into());
        }
        if depot >= locations.len() {
            return Err(InvalidInput::DepotOutOfRange {
                depot,
                size: locations.len(),
            }
            .into());
        }
        let matrix = provider.compute(locations)?;
        self.solve_matrix(matrix, vehicle_count, depot)
    }

    /// Solves from a pre-built distance matrix, such as one returned by a
    /// road-distance service.
    pub fn solve_matrix(
        &self,
        matrix: DistanceMatrix,
        vehicle_count: usize,
        depot: usize,
    ) -> Result<SolveOutcome> {
        let instance = RouteInstance::new(matrix, vehicle_count, depot)?;
        Ok(self.solve_instance(&instance))
    }

    /// Solves a validated instance. Never fails.
    #[instrument(
        skip_all,
        fields(
            locations = instance.num_locations(),
            vehicles = instance.vehicle_count(),
            depot = instance.depot()
        )
    )]
    pub fn solve_instance(&self, instance: &RouteInstance) -> SolveOutcome {
        let start = Instant::now();
        let deadline = start
            .checked_add(self.config.time_budget)
            .unwrap_or_else(|| start + MAX_HORIZON);

        let initial = cheapest_arc(instance);
        let initial_cost = initial.total_cost();
        let improvement = improve(instance, initial, deadline);
        let solution = improvement.solution;

        let outcome = SolveOutcome {
            routes: extract_routes(&solution),
            route_costs: solution.routes().iter().map(|r| r.distance()).collect(),
            total_cost: solution.total_cost(),
            initial_cost,
            termination: improvement.termination,
            stats: improvement.stats,
        };

        info!(
            initial_cost,
            total_cost = outcome.total_cost,
            termination = ?outcome.termination,
            moves = outcome.stats.applied(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Solved"
        );

        outcome
    }
}

/// Solves from coordinates with the Euclidean metric.
///
/// Requires `vehicle_count ≥ 1`, `depot_index < locations.len()` and a
/// positive `time_budget`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use optiroute::models::Coordinate;
///
/// let locations = [(0.0, 0.0), (2.0, 0.0), (-2.0, 0.0)].map(Coordinate::from);
/// let outcome = optiroute::solve(&locations, 2, 0, Duration::from_secs(1)).unwrap();
///
/// assert_eq!(outcome.routes.len(), 2);
/// assert!(!outcome.deadline_reached());
/// ```
pub fn solve(
    locations: &[Coordinate],
    vehicle_count: usize,
    depot_index: usize,
    time_budget: Duration,
) -> Result<SolveOutcome> {
    Solver::new(SolverConfig::default().with_time_budget(time_budget))?.solve(
        locations,
        vehicle_count,
        depot_index,
    )
}

/// Solves from a pre-built distance matrix.
pub fn solve_matrix(
    matrix: DistanceMatrix,
    vehicle_count: usize,
    depot_index: usize,
    time_budget: Duration,
) -> Result<SolveOutcome> {
    Solver::new(SolverConfig::default().with_time_budget(time_budget))?.solve_matrix(
        matrix,
        vehicle_count,
        depot_index,
    )
}
