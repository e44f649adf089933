//! Route evaluator that computes distances and audits feasibility.

use crate::models::{Route, RouteInstance, Solution, Violation, ViolationType};

/// Evaluates routes against an instance: round-trip distances and the
/// visit-every-stop-once feasibility rule.
///
/// # Examples
///
/// ```
/// use optiroute::distance::DistanceMatrix;
/// use optiroute::evaluation::RouteEvaluator;
/// use optiroute::models::RouteInstance;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 10.0],
///     vec![5.0, 0.0, 5.0],
///     vec![10.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// let instance = RouteInstance::new(dm, 1, 0).unwrap();
///
/// let evaluator = RouteEvaluator::new(&instance);
/// let route = evaluator.build_route(0, &[1, 2]);
/// assert_eq!(route.distance(), 20.0);
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a RouteInstance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a RouteInstance) -> Self {
        Self { instance }
    }

    /// Round-trip distance `depot → stops[0] → ... → stops[k-1] → depot`.
    ///
    /// Zero for an empty route.
    pub fn route_cost(&self, stops: &[usize]) -> f64 {
        let depot = self.instance.depot();
        let mut prev = depot;
        let mut dist = 0.0;
        for &stop in stops {
            dist += self.instance.distance(prev, stop);
            prev = stop;
        }
        dist + self.instance.distance(prev, depot)
    }

    /// Builds a route from a sequence of stops, computing its distance.
    pub fn build_route(&self, vehicle_id: usize, stops: &[usize]) -> Route {
        let mut route = Route::new(vehicle_id);
        for &stop in stops {
            route.push_stop(stop);
        }
        self.refresh(&mut route);
        route
    }

    /// Recomputes a route's stored distance from the matrix.
    pub fn refresh(&self, route: &mut Route) {
        let d = self.route_cost(route.stops());
        route.set_distance(d);
    }

    /// Evaluates an entire solution, returning `(cost, violations)`.
    ///
    /// The cost is recomputed from the matrix rather than read from the
    /// routes. A feasible solution has one route per vehicle, visits every
    /// stop exactly once and never lists the depot as a stop.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let n = self.instance.num_locations();
        let depot = self.instance.depot();
        let mut violations = Vec::new();
        let mut seen = vec![false; n];
        let mut total_cost = 0.0;

        if solution.num_routes() != self.instance.vehicle_count() {
            violations.push(Violation::new(ViolationType::RouteCountMismatch {
                routes: solution.num_routes(),
                vehicles: self.instance.vehicle_count(),
            }));
        }

        for (route_index, route) in solution.routes().iter().enumerate() {
            let mut in_range = true;
            for &location in route.stops() {
                if location >= n {
                    violations.push(Violation::new(ViolationType::UnknownLocation {
                        route_index,
                        location,
                    }));
                    in_range = false;
                } else if location == depot {
                    violations.push(Violation::new(ViolationType::DepotInRoute { route_index }));
                } else if seen[location] {
                    violations.push(Violation::new(ViolationType::DuplicateStop {
                        stop: location,
                        route_index,
                    }));
                } else {
                    seen[location] = true;
                }
            }
            if in_range {
                total_cost += self.route_cost(route.stops());
            }
        }

        for stop in self.instance.stops() {
            if !seen[stop] {
                violations.push(Violation::new(ViolationType::MissingStop { stop }));
            }
        }

        (total_cost, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, DistanceProvider, EuclideanProvider};
    use crate::models::Coordinate;

    fn setup(vehicles: usize) -> RouteInstance {
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(3.0, 4.0),
            Coordinate::new(6.0, 8.0),
            Coordinate::new(0.0, 10.0),
        ];
        let dm = EuclideanProvider.compute(&coords).expect("valid");
        RouteInstance::new(dm, vehicles, 0).expect("valid")
    }

    fn solution_of(instance: &RouteInstance, routes: &[&[usize]]) -> Solution {
        let eval = RouteEvaluator::new(instance);
        let mut sol = Solution::new(instance.depot());
        for (v, stops) in routes.iter().enumerate() {
            sol.add_route(eval.build_route(v, stops));
        }
        sol
    }

    #[test]
    fn test_build_route_empty() {
        let instance = setup(1);
        let route = RouteEvaluator::new(&instance).build_route(0, &[]);
        assert!(route.is_empty());
        assert_eq!(route.distance(), 0.0);
    }

    #[test]
    fn test_build_route_single() {
        let instance = setup(1);
        let route = RouteEvaluator::new(&instance).build_route(0, &[1]);
        // depot->1 = 5.0, 1->depot = 5.0
        assert!((route.distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_directed() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 1.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid");
        let instance = RouteInstance::new(dm, 1, 0).expect("valid");
        let eval = RouteEvaluator::new(&instance);
        assert_eq!(eval.route_cost(&[1, 2]), 3.0);
        assert_eq!(eval.route_cost(&[2, 1]), 27.0);
    }

    #[test]
    fn test_refresh() {
        let instance = setup(1);
        let eval = RouteEvaluator::new(&instance);
        let mut route = eval.build_route(0, &[1]);
        route.push_stop(2);
        eval.refresh(&mut route);
        // 0->1 = 5, 1->2 = 5, 2->0 = 10
        assert!((route.distance() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_feasible() {
        let instance = setup(2);
        let sol = solution_of(&instance, &[&[1, 2], &[3]]);
        let (cost, violations) = RouteEvaluator::new(&instance).evaluate_solution(&sol);
        assert!(violations.is_empty());
        assert!((cost - sol.total_cost()).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_missing_and_duplicate() {
        let instance = setup(2);
        let sol = solution_of(&instance, &[&[1, 2], &[2]]);
        let (_, violations) = RouteEvaluator::new(&instance).evaluate_solution(&sol);
        assert_eq!(
            violations,
            vec![
                Violation::new(ViolationType::DuplicateStop {
                    stop: 2,
                    route_index: 1
                }),
                Violation::new(ViolationType::MissingStop { stop: 3 }),
            ]
        );
    }

    #[test]
    fn test_evaluate_depot_and_unknown() {
        let instance = setup(1);
        let mut sol = Solution::new(0);
        let mut route = Route::new(0);
        for stop in [1, 2, 3, 0, 9] {
            route.push_stop(stop);
        }
        sol.add_route(route);
        let (_, violations) = RouteEvaluator::new(&instance).evaluate_solution(&sol);
        assert!(violations.contains(&Violation::new(ViolationType::DepotInRoute {
            route_index: 0
        })));
        assert!(violations.contains(&Violation::new(ViolationType::UnknownLocation {
            route_index: 0,
            location: 9
        })));
    }

    #[test]
    fn test_evaluate_route_count() {
        let instance = setup(3);
        let sol = solution_of(&instance, &[&[1, 2, 3]]);
        let (_, violations) = RouteEvaluator::new(&instance).evaluate_solution(&sol);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::RouteCountMismatch {
                routes: 1,
                vehicles: 3
            })]
        );
    }
}
