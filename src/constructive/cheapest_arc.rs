//! Round-robin cheapest-arc constructive heuristic.
//!
//! Grows every vehicle's path from the depot at once. At each step the
//! vehicle whose open path is currently cheapest takes the unrouted stop
//! closest to its last location. Spreading the stops this way gives the
//! local search a feasible, reasonably balanced starting point.
//!
//! # Complexity
//!
//! O(n² + n·m) where n = number of stops, m = number of vehicles.

use tracing::debug;

use crate::evaluation::RouteEvaluator;
use crate::models::{Route, RouteInstance, Solution};

/// Constructs a solution using round-robin cheapest-arc insertion.
///
/// Every vehicle starts at the depot. Repeatedly, the vehicle with the
/// lowest open-path cost (return leg excluded, ties to the lowest vehicle
/// index) appends the unrouted stop nearest to its last location (ties to
/// the lowest location index). When every stop is routed, the routes are
/// closed at the depot.
///
/// Vehicles left without stops keep an empty route. The result always has
/// exactly `vehicle_count` routes.
///
/// # Examples
///
/// ```
/// use optiroute::constructive::cheapest_arc;
/// use optiroute::distance::{DistanceProvider, EuclideanProvider};
/// use optiroute::models::{Coordinate, RouteInstance};
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(2.0, 0.0),
///     Coordinate::new(3.0, 0.0),
/// ];
/// let dm = EuclideanProvider.compute(&coords).unwrap();
/// let instance = RouteInstance::new(dm, 1, 0).unwrap();
///
/// let solution = cheapest_arc(&instance);
/// assert_eq!(solution.routes()[0].stops(), &[1, 2, 3]);
/// assert!((solution.total_cost() - 6.0).abs() < 1e-10);
/// ```
pub fn cheapest_arc(instance: &RouteInstance) -> Solution {
    let depot = instance.depot();
    let vehicles = instance.vehicle_count();
    let distances = instance.distances();

    let mut routes: Vec<Route> = (0..vehicles).map(Route::new).collect();
    let mut open_cost: Vec<f64> = vec![0.0; vehicles];
    let mut unrouted: Vec<usize> = instance.stops().collect();

    debug!(
        stops = unrouted.len(),
        vehicles, "Start cheapest-arc construction"
    );

    // A validated instance has at least one vehicle, so both argmins below
    // always see a non-empty range.
    while !unrouted.is_empty() {
        let vehicle = first_min(vehicles, |v| open_cost[v]);
        let last = routes[vehicle].last_or(depot);
        // `unrouted` stays sorted, so the tie goes to the lowest location index.
        let pos = first_min(unrouted.len(), |k| distances.get(last, unrouted[k]));
        let next = unrouted.remove(pos);

        open_cost[vehicle] += distances.get(last, next);
        routes[vehicle].push_stop(next);
    }

    let evaluator = RouteEvaluator::new(instance);
    let mut solution = Solution::new(depot);
    for mut route in routes {
        evaluator.refresh(&mut route);
        solution.add_route(route);
    }

    debug!(
        cost = solution.total_cost(),
        used = solution.num_used(),
        "Finished cheapest-arc construction"
    );

    solution
}

/// Index of the first minimum among `cost(0..len)`, or 0 when `len <= 1`.
fn first_min(len: usize, cost: impl Fn(usize) -> f64) -> usize {
    (1..len).fold(0, |best, k| if cost(k) < cost(best) { k } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, DistanceProvider, EuclideanProvider};
    use crate::models::Coordinate;

    fn planar(points: &[(f64, f64)], vehicles: usize, depot: usize) -> RouteInstance {
        let coords: Vec<Coordinate> = points.iter().map(|&p| p.into()).collect();
        let dm = EuclideanProvider.compute(&coords).expect("valid");
        RouteInstance::new(dm, vehicles, depot).expect("valid")
    }

    fn line(vehicles: usize) -> RouteInstance {
        planar(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], vehicles, 0)
    }

    #[test]
    fn test_single_vehicle_takes_all() {
        let sol = cheapest_arc(&line(1));
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.routes()[0].stops(), &[1, 2, 3]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((sol.routes()[0].distance() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_across_vehicles() {
        // Vehicle 0 takes 1 (cost 1); vehicle 1 is cheaper (0) and takes 2
        // (cost 2); vehicle 0 (cost 1) then takes 3 from 1 (cost 3).
        let sol = cheapest_arc(&line(2));
        assert_eq!(sol.routes()[0].stops(), &[1, 3]);
        assert_eq!(sol.routes()[1].stops(), &[2]);
    }

    #[test]
    fn test_excess_vehicles_get_empty_routes() {
        let sol = cheapest_arc(&line(5));
        assert_eq!(sol.num_routes(), 5);
        assert_eq!(sol.num_used(), 3);
        assert_eq!(sol.num_served(), 3);
        for route in &sol.routes()[3..] {
            assert!(route.is_empty());
            assert_eq!(route.distance(), 0.0);
        }
    }

    #[test]
    fn test_depot_only() {
        let sol = cheapest_arc(&planar(&[(0.0, 0.0)], 2, 0));
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.total_cost(), 0.0);
    }

    #[test]
    fn test_chooses_nearest() {
        let sol = cheapest_arc(&planar(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)], 1, 0));
        // Should pick 2 first (distance 1) then 1 (distance 9)
        assert_eq!(sol.routes()[0].stops(), &[2, 1]);
    }

    #[test]
    fn test_tie_breaks_on_lowest_index() {
        let sol = cheapest_arc(&planar(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)], 1, 0));
        assert_eq!(sol.routes()[0].stops(), &[1, 2]);
    }

    #[test]
    fn test_non_zero_depot() {
        let sol = cheapest_arc(&planar(&[(1.0, 0.0), (2.0, 0.0), (0.0, 0.0)], 1, 2));
        assert_eq!(sol.depot(), 2);
        assert_eq!(sol.routes()[0].stops(), &[0, 1]);
        assert!((sol.total_cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_directed_costs() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 1.0],
            vec![1.0, 0.0, 9.0],
            vec![9.0, 1.0, 0.0],
        ])
        .expect("valid");
        let instance = RouteInstance::new(dm, 1, 0).expect("valid");
        let sol = cheapest_arc(&instance);
        assert_eq!(sol.routes()[0].stops(), &[2, 1]);
        // 0→2 + 2→1 + 1→0
        assert!((sol.total_cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_cost_matches_routes() {
        let sol = cheapest_arc(&line(2));
        let sum: f64 = sol.routes().iter().map(|r| r.distance()).sum();
        assert!((sol.total_cost() - sum).abs() < 1e-10);
    }

    #[test]
    fn test_first_min_keeps_first_tie() {
        let costs = [3.0, 1.0, 2.0, 1.0];
        assert_eq!(first_min(costs.len(), |k| costs[k]), 1);
        assert_eq!(first_min(1, |_| 7.0), 0);
    }

    #[test]
    fn test_routes_every_stop() {
        let points: Vec<(f64, f64)> = (0..40)
            .map(|k| {
                let k = k as f64;
                ((k * 37.0) % 101.0, (k * 59.0) % 97.0)
            })
            .collect();
        for vehicles in [1, 3, 7, 60] {
            let instance = planar(&points, vehicles, 5);
            let sol = cheapest_arc(&instance);
            assert_eq!(sol.num_routes(), vehicles);
            assert_eq!(sol.num_served(), instance.num_stops());
            let (_, violations) = RouteEvaluator::new(&instance).evaluate_solution(&sol);
            assert!(violations.is_empty(), "{violations:?}");
        }
    }
}
