//! Solution and violation types.

use super::Route;

/// A type of feasibility violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A stop is not visited by any route.
    MissingStop {
        /// Location index of the stop.
        stop: usize,
    },
    /// A stop is visited more than once.
    DuplicateStop {
        /// Location index of the stop.
        stop: usize,
        /// Route holding the repeated visit.
        route_index: usize,
    },
    /// The depot appears among a route's stops.
    DepotInRoute {
        /// Route index in the solution.
        route_index: usize,
    },
    /// A route refers to a location outside the instance.
    UnknownLocation {
        /// Route index in the solution.
        route_index: usize,
        /// Offending location index.
        location: usize,
    },
    /// The number of routes differs from the fleet size.
    RouteCountMismatch {
        /// Routes present.
        routes: usize,
        /// Vehicles in the instance.
        vehicles: usize,
    },
}

/// A feasibility violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete assignment of stops to vehicles.
///
/// Holds one route per vehicle, in vehicle order. The total cost is the sum
/// of the routes' round-trip distances.
///
/// # Examples
///
/// ```
/// use optiroute::models::{Route, Solution};
///
/// let mut sol = Solution::new(0);
/// sol.add_route(Route::new(0));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 0);
/// assert_eq!(sol.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
    depot: usize,
}

impl Solution {
    /// Creates a solution without routes.
    pub fn new(depot: usize) -> Self {
        Self {
            routes: Vec::new(),
            depot,
        }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    /// Depot shared by all routes.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Returns the number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes that visit at least one stop.
    pub fn num_used(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total distance across all routes.
    pub fn total_cost(&self) -> f64 {
        self.routes.iter().map(|r| r.distance()).sum()
    }

    /// Total number of stops served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
