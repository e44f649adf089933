//! Relocate operator: move one stop to another position.
//!
//! # Algorithm
//!
//! Tries moving each stop from its current position to every other
//! position, in its own route or any other (empty routes included). The
//! delta is the saving from closing the gap the stop leaves plus the cost of
//! opening the gap it enters.
//!
//! # Complexity
//!
//! O(n²) candidate moves per scan, where n = total number of stops.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::DistanceMatrix;
use crate::models::Route;

use super::search::{MoveScan, Scan, IMPROVEMENT_EPSILON};

/// Move the stop at `from_pos` of `from_route` to `to_pos` of `to_route`.
///
/// `to_pos` indexes the target route after the stop has been removed, so a
/// move within one route is a removal followed by an insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RelocateMove {
    pub from_route: usize,
    pub from_pos: usize,
    pub to_route: usize,
    pub to_pos: usize,
    pub delta: f64,
}

impl RelocateMove {
    pub(crate) fn apply(&self, routes: &mut [Route]) {
        let stop = routes[self.from_route].stops_mut().remove(self.from_pos);
        routes[self.to_route].stops_mut().insert(self.to_pos, stop);
    }
}

/// Returns the first improving relocate move in route/position order.
pub(crate) fn find_relocate(routes: &[Route], scan: &mut MoveScan<'_>) -> Scan<RelocateMove> {
    let depot = scan.instance().depot();
    let distances = scan.instance().distances();

    for (from_route, from) in routes.iter().enumerate() {
        for from_pos in 0..from.len() {
            let stop = from.stops()[from_pos];
            let removal = removal_cost(from.stops(), from_pos, depot, distances);

            for (to_route, to) in routes.iter().enumerate() {
                let same = to_route == from_route;
                let slots = if same { to.len() - 1 } else { to.len() };

                for to_pos in 0..=slots {
                    if same && to_pos == from_pos {
                        continue;
                    }
                    if !scan.tick() {
                        return Scan::Interrupted;
                    }

                    let (prev, next) = if same {
                        neighbors_without(to.stops(), from_pos, to_pos, depot)
                    } else {
                        neighbors(to.stops(), to_pos, depot)
                    };
                    let delta = removal + insertion_cost(prev, next, stop, distances);

                    if delta < -IMPROVEMENT_EPSILON {
                        return Scan::Found(RelocateMove {
                            from_route,
                            from_pos,
                            to_route,
                            to_pos,
                            delta,
                        });
                    }
                }
            }
        }
    }

    Scan::Exhausted
}

/// Cost change of removing the stop at `pos` from `route`.
fn removal_cost(route: &[usize], pos: usize, depot: usize, distances: &DistanceMatrix) -> f64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() - 1 {
        depot
    } else {
        route[pos + 1]
    };
    let stop = route[pos];

    // Old: prev → stop → next
    // New: prev → next
    distances.get(prev, next) - distances.get(prev, stop) - distances.get(stop, next)
}

/// Cost change of inserting `stop` between `prev` and `next`.
fn insertion_cost(prev: usize, next: usize, stop: usize, distances: &DistanceMatrix) -> f64 {
    // Old: prev → next
    // New: prev → stop → next
    distances.get(prev, stop) + distances.get(stop, next) - distances.get(prev, next)
}

/// Locations around insertion slot `pos` of `route`.
fn neighbors(route: &[usize], pos: usize, depot: usize) -> (usize, usize) {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() { depot } else { route[pos] };
    (prev, next)
}

/// Locations around insertion slot `pos` of `route` with `skip` removed.
fn neighbors_without(route: &[usize], skip: usize, pos: usize, depot: usize) -> (usize, usize) {
    let at = |k: usize| if k < skip { route[k] } else { route[k + 1] };
    let len = route.len() - 1;
    let prev = if pos == 0 { depot } else { at(pos - 1) };
    let next = if pos == len { depot } else { at(pos) };
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::RouteEvaluator;
    use crate::models::RouteInstance;
    use std::time::{Duration, Instant};

    fn dm4() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0, 12.0],
            vec![5.0, 0.0, 3.0, 7.0],
            vec![8.0, 3.0, 0.0, 4.0],
            vec![12.0, 7.0, 4.0, 0.0],
        ])
        .expect("valid")
    }

    fn routes_of(instance: &RouteInstance, stops: &[&[usize]]) -> Vec<Route> {
        let eval = RouteEvaluator::new(instance);
        stops
            .iter()
            .enumerate()
            .map(|(v, s)| eval.build_route(v, s))
            .collect()
    }

    fn far_future() -> Instant {
        Instant::now() + Duration::from_secs(3600)
    }

    #[test]
    fn test_removal_cost() {
        // Removing stop 2 (pos=1): was 1→2→3, becomes 1→3
        // Old: d(1,2) + d(2,3) = 3 + 4 = 7
        // New: d(1,3) = 7
        let cost = removal_cost(&[1, 2, 3], 1, 0, &dm4());
        assert!((cost - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_insertion_cost() {
        // Inserting 2 between 1 and 3: d(1,2) + d(2,3) - d(1,3) = 3 + 4 - 7
        let cost = insertion_cost(1, 3, 2, &dm4());
        assert!((cost - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_neighbors_without() {
        // Route [1, 2, 3] without 2 is [1, 3]: slots are 0|1|3|0
        assert_eq!(neighbors_without(&[1, 2, 3], 1, 0, 0), (0, 1));
        assert_eq!(neighbors_without(&[1, 2, 3], 1, 1, 0), (1, 3));
        assert_eq!(neighbors_without(&[1, 2, 3], 1, 2, 0), (3, 0));
    }

    #[test]
    fn test_moves_stop_to_better_route() {
        // Stop 3 sits far from route 0 and right next to route 1.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 10.0, 10.0],
            vec![2.0, 0.0, 10.0, 10.0],
            vec![10.0, 10.0, 0.0, 1.0],
            vec![10.0, 10.0, 1.0, 0.0],
        ])
        .expect("valid");
        let instance = RouteInstance::new(dm, 2, 0).expect("valid");
        let mut routes = routes_of(&instance, &[&[1, 3], &[2]]);
        let mut scan = MoveScan::new(&instance, far_future());

        let Scan::Found(mv) = find_relocate(&routes, &mut scan) else {
            panic!("expected an improving move");
        };
        assert_eq!((mv.from_route, mv.from_pos), (0, 1));
        assert_eq!(mv.to_route, 1);
        assert!(mv.delta < 0.0);

        let before: f64 = routes.iter().map(|r| r.distance()).sum();
        mv.apply(&mut routes);
        let eval = RouteEvaluator::new(&instance);
        let after: f64 = routes.iter().map(|r| eval.route_cost(r.stops())).sum();
        assert!((after - (before + mv.delta)).abs() < 1e-9);
        assert_eq!(routes[0].stops(), &[1]);
    }

    #[test]
    fn test_within_route() {
        // Directed costs make 0 → 2 → 1 → 0 much cheaper than 0 → 1 → 2 → 0.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 9.0, 1.0],
            vec![1.0, 0.0, 9.0],
            vec![9.0, 1.0, 0.0],
        ])
        .expect("valid");
        let instance = RouteInstance::new(dm, 1, 0).expect("valid");
        let mut routes = routes_of(&instance, &[&[1, 2]]);
        let mut scan = MoveScan::new(&instance, far_future());

        let Scan::Found(mv) = find_relocate(&routes, &mut scan) else {
            panic!("expected an improving move");
        };
        assert!((mv.delta + 24.0).abs() < 1e-10);
        mv.apply(&mut routes);
        assert_eq!(routes[0].stops(), &[2, 1]);
    }

    #[test]
    fn test_exhausted_on_optimal_route() {
        let instance = RouteInstance::new(dm4(), 1, 0).expect("valid");
        let routes = routes_of(&instance, &[&[1, 2, 3]]);
        let mut scan = MoveScan::new(&instance, far_future());
        assert!(matches!(find_relocate(&routes, &mut scan), Scan::Exhausted));
        assert!(scan.evaluated() > 0);
    }

    #[test]
    fn test_interrupted_by_deadline() {
        let instance = RouteInstance::new(dm4(), 2, 0).expect("valid");
        let routes = routes_of(&instance, &[&[3, 1], &[2]]);
        let mut scan = MoveScan::new(&instance, Instant::now());
        assert!(matches!(find_relocate(&routes, &mut scan), Scan::Interrupted));
        assert_eq!(scan.evaluated(), 0);
    }
}
