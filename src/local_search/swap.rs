//! Swap operator: exchange two stops.
//!
//! Exchanges the stops at two positions, in the same route or in two
//! different routes. Adjacent positions in one route share an arc and get
//! their own delta formula.

use crate::distance::DistanceMatrix;
use crate::models::Route;

use super::search::{MoveScan, Scan, IMPROVEMENT_EPSILON};

/// Exchange the stop at `(route_a, pos_a)` with the one at `(route_b, pos_b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SwapMove {
    pub route_a: usize,
    pub pos_a: usize,
    pub route_b: usize,
    pub pos_b: usize,
    pub delta: f64,
}

impl SwapMove {
    pub(crate) fn apply(&self, routes: &mut [Route]) {
        let a = routes[self.route_a].stops()[self.pos_a];
        let b = routes[self.route_b].stops()[self.pos_b];
        routes[self.route_a].stops_mut()[self.pos_a] = b;
        routes[self.route_b].stops_mut()[self.pos_b] = a;
    }
}

/// Returns the first improving swap, scanning pairs `(route_a, pos_a) <
/// (route_b, pos_b)` in lexicographic order.
pub(crate) fn find_swap(routes: &[Route], scan: &mut MoveScan<'_>) -> Scan<SwapMove> {
    let depot = scan.instance().depot();
    let distances = scan.instance().distances();

    for (route_a, ra) in routes.iter().enumerate() {
        for pos_a in 0..ra.len() {
            for (route_b, rb) in routes.iter().enumerate().skip(route_a) {
                let first = if route_b == route_a { pos_a + 1 } else { 0 };
                for pos_b in first..rb.len() {
                    if !scan.tick() {
                        return Scan::Interrupted;
                    }

                    let delta = if route_a == route_b {
                        same_route_delta(ra.stops(), pos_a, pos_b, depot, distances)
                    } else {
                        replacement_cost(ra.stops(), pos_a, rb.stops()[pos_b], depot, distances)
                            + replacement_cost(
                                rb.stops(),
                                pos_b,
                                ra.stops()[pos_a],
                                depot,
                                distances,
                            )
                    };

                    if delta < -IMPROVEMENT_EPSILON {
                        return Scan::Found(SwapMove {
                            route_a,
                            pos_a,
                            route_b,
                            pos_b,
                            delta,
                        });
                    }
                }
            }
        }
    }

    Scan::Exhausted
}

/// Cost change of replacing the stop at `pos` with `stop`, neighbors fixed.
fn replacement_cost(
    route: &[usize],
    pos: usize,
    stop: usize,
    depot: usize,
    distances: &DistanceMatrix,
) -> f64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() - 1 {
        depot
    } else {
        route[pos + 1]
    };
    let old = route[pos];

    distances.get(prev, stop) + distances.get(stop, next)
        - distances.get(prev, old)
        - distances.get(old, next)
}

/// Cost change of exchanging positions `i < j` of one route.
fn same_route_delta(
    route: &[usize],
    i: usize,
    j: usize,
    depot: usize,
    distances: &DistanceMatrix,
) -> f64 {
    if j == i + 1 {
        let a = route[i];
        let b = route[j];
        let prev = if i == 0 { depot } else { route[i - 1] };
        let next = if j == route.len() - 1 {
            depot
        } else {
            route[j + 1]
        };
        // Old: prev → a → b → next
        // New: prev → b → a → next
        return distances.get(prev, b) + distances.get(b, a) + distances.get(a, next)
            - distances.get(prev, a)
            - distances.get(a, b)
            - distances.get(b, next);
    }
    replacement_cost(route, i, route[j], depot, distances)
        + replacement_cost(route, j, route[i], depot, distances)
}
