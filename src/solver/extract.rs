//! Projection of a solution onto the public route output.

use crate::models::Solution;

/// Returns one depot-bounded stop sequence per vehicle, in vehicle order.
///
/// A vehicle with stops yields `[depot, s1, ..., sk, depot]`; an idle vehicle
/// yields `[depot]`.
///
/// # Examples
///
/// ```
/// use optiroute::models::{Route, Solution};
/// use optiroute::solver::extract_routes;
///
/// let mut busy = Route::new(0);
/// busy.push_stop(2);
/// busy.push_stop(1);
/// let mut sol = Solution::new(0);
/// sol.add_route(busy);
/// sol.add_route(Route::new(1));
///
/// assert_eq!(extract_routes(&sol), vec![vec![0, 2, 1, 0], vec![0]]);
/// ```
pub fn extract_routes(solution: &Solution) -> Vec<Vec<usize>> {
    let depot = solution.depot();
    solution.routes().iter().map(|r| r.sequence(depot)).collect()
}
