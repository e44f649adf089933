//! Solver entry points, configuration, and route extraction.
//!
//! [`Solver`] wires the pipeline together: distance provider, instance
//! validation, [`cheapest_arc`](crate::constructive::cheapest_arc)
//! construction, [`improve`](crate::local_search::improve), and
//! [`extract_routes`].

mod config;
mod extract;
mod solve;

pub use config::{SolverConfig, DEFAULT_TIME_BUDGET};
pub use extract::extract_routes;
pub use solve::{solve, solve_matrix, SolveOutcome, Solver};
