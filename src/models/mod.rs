//! Domain model types for vehicle routing problems.
//!
//! Provides the core abstractions: coordinates attached to locations, the
//! validated problem instance, routes as ordered sequences of stops, and
//! solutions tying one route to each vehicle.

mod instance;
mod location;
mod route;
mod solution;

pub use instance::RouteInstance;
pub use location::Coordinate;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
