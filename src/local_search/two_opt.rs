//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions i < j in a route, compute the change in
//! distance from reversing the segment `route[i..=j]`:
//!
//! ```text
//! delta = d(prev, r[j]) + d(r[i], next) - d(prev, r[i]) - d(r[j], next)
//! ```
//!
//! where `prev`/`next` are the locations just outside the segment (the depot
//! at either end). On an asymmetric matrix the reversed interior arcs change
//! cost too, and their difference is added to the delta.
//!
//! # Complexity
//!
//! O(n²) candidate moves per route on symmetric matrices, O(n³) otherwise.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Route;

use super::search::{MoveScan, Scan, IMPROVEMENT_EPSILON};

/// Reverse `route[i..=j]` of one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TwoOptMove {
    pub route: usize,
    pub i: usize,
    pub j: usize,
    pub delta: f64,
}

impl TwoOptMove {
    pub(crate) fn apply(&self, routes: &mut [Route]) {
        routes[self.route].stops_mut()[self.i..=self.j].reverse();
    }
}

/// Returns the first improving 2-opt move in route/position order.
pub(crate) fn find_two_opt(routes: &[Route], scan: &mut MoveScan<'_>) -> Scan<TwoOptMove> {
    let depot = scan.instance().depot();
    let distances = scan.instance().distances();
    let symmetric = scan.is_symmetric();

    for (route, r) in routes.iter().enumerate() {
        let n = r.len();
        if n < 2 {
            continue;
        }
        for i in 0..n - 1 {
            for j in i + 1..n {
                if !scan.tick() {
                    return Scan::Interrupted;
                }
                let delta = two_opt_delta(r.stops(), depot, distances, i, j, symmetric);
                if delta < -IMPROVEMENT_EPSILON {
                    return Scan::Found(TwoOptMove { route, i, j, delta });
                }
            }
        }
    }

    Scan::Exhausted
}

/// Computes the distance change from reversing `route[i..=j]`.
///
/// Before: ...-prev - route[i] - route[i+1] - ... - route[j] - next-...
/// After:  ...-prev - route[j] - route[j-1] - ... - route[i] - next-...
fn two_opt_delta(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
    symmetric: bool,
) -> f64 {
    let n = route.len();
    let prev = if i == 0 { depot } else { route[i - 1] };
    let next = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev, route[i]) + distances.get(route[j], next);
    let new_cost = distances.get(prev, route[j]) + distances.get(route[i], next);
    let mut delta = new_cost - old_cost;

    if !symmetric {
        for k in i..j {
            delta += distances.get(route[k + 1], route[k]) - distances.get(route[k], route[k + 1]);
        }
    }

    delta
}
