//! # optiroute
//!
//! Multi-vehicle routing from a single shared depot. Given locations, a fleet
//! size and a depot index, builds one closed tour per vehicle so every
//! non-depot location is visited exactly once and the total distance is low.
//!
//! The pipeline is a greedy cheapest-arc construction followed by
//! first-improvement local search (relocate, swap, 2-opt) that stops at a
//! local optimum or when the time budget runs out.
//!
//! ## Modules
//!
//! - [`models`]: instance, route and solution types
//! - [`distance`]: distance matrix and coordinate providers (Euclidean, haversine)
//! - [`evaluation`]: route costing and feasibility checks
//! - [`constructive`]: cheapest-arc construction
//! - [`local_search`]: neighborhood search under a deadline
//! - [`solver`]: configuration and entry points
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use optiroute::models::Coordinate;
//!
//! let locations = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(Coordinate::from);
//! let outcome = optiroute::solve(&locations, 1, 0, Duration::from_secs(1)).unwrap();
//!
//! assert_eq!(outcome.routes[0].first(), Some(&0));
//! assert!((outcome.total_cost - 4.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{InvalidInput, Result, RoutingError};
pub use solver::{solve, solve_matrix, SolveOutcome, Solver, SolverConfig};
