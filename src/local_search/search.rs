//! Deadline-bounded first-improvement local search.
//!
//! Scans relocate, swap and 2-opt moves in that order, applying the first
//! move that strictly lowers total distance and restarting the scan from
//! relocate. Stops when a full scan finds nothing (converged) or when the
//! deadline passes.
//!
//! The deadline is polled before every candidate evaluation. Moves are
//! evaluated on the unchanged routes and applied in one step, so stopping at
//! any point leaves a consistent, feasible solution.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::evaluation::RouteEvaluator;
use crate::models::{Route, RouteInstance, Solution};

use super::relocate::{find_relocate, RelocateMove};
use super::swap::{find_swap, SwapMove};
use super::two_opt::{find_two_opt, TwoOptMove};

/// Minimum distance reduction for a move to count as improving.
pub(crate) const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// No relocate, swap or 2-opt move improves the solution.
    Converged,
    /// The deadline passed first; the solution is the best found so far and
    /// is fully usable.
    DeadlineReached,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Applied relocate moves.
    pub relocates: u64,
    /// Applied swap moves.
    pub swaps: u64,
    /// Applied 2-opt moves.
    pub two_opts: u64,
    /// Candidate moves evaluated.
    pub evaluated: u64,
}

impl SearchStats {
    /// Total number of applied moves.
    pub fn applied(&self) -> u64 {
        self.relocates + self.swaps + self.two_opts
    }
}

/// Result of [`improve`].
#[derive(Debug, Clone)]
pub struct Improvement {
    /// Improved solution.
    pub solution: Solution,
    /// Why the search stopped.
    pub termination: Termination,
    /// Search counters.
    pub stats: SearchStats,
}

/// Outcome of one operator scan.
pub(crate) enum Scan<M> {
    Found(M),
    Exhausted,
    Interrupted,
}

impl<M> Scan<M> {
    fn map<N>(self, f: impl FnOnce(M) -> N) -> Scan<N> {
        match self {
            Scan::Found(m) => Scan::Found(f(m)),
            Scan::Exhausted => Scan::Exhausted,
            Scan::Interrupted => Scan::Interrupted,
        }
    }
}

/// Shared state of the operator scans: instance, deadline, counter.
pub(crate) struct MoveScan<'a> {
    instance: &'a RouteInstance,
    deadline: Instant,
    symmetric: bool,
    evaluated: u64,
    max_evaluations: u64,
}

impl<'a> MoveScan<'a> {
    pub(crate) fn new(instance: &'a RouteInstance, deadline: Instant) -> Self {
        Self {
            instance,
            deadline,
            symmetric: instance.distances().is_symmetric(0.0),
            evaluated: 0,
            max_evaluations: u64::MAX,
        }
    }

    /// Treats the deadline as reached after `max` evaluations.
    #[cfg(test)]
    pub(crate) fn with_max_evaluations(mut self, max: u64) -> Self {
        self.max_evaluations = max;
        self
    }

    pub(crate) fn instance(&self) -> &'a RouteInstance {
        self.instance
    }

    pub(crate) fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub(crate) fn evaluated(&self) -> u64 {
        self.evaluated
    }

    fn deadline_reached(&self) -> bool {
        self.evaluated >= self.max_evaluations || Instant::now() >= self.deadline
    }

    /// Accounts for one more evaluation; `false` once the deadline has passed.
    pub(crate) fn tick(&mut self) -> bool {
        if self.deadline_reached() {
            return false;
        }
        self.evaluated += 1;
        true
    }
}

#[derive(Debug, Clone, Copy)]
enum LocalSearchMove {
    Relocate(RelocateMove),
    Swap(SwapMove),
    TwoOpt(TwoOptMove),
}

impl LocalSearchMove {
    fn operator_name(&self) -> &'static str {
        match self {
            LocalSearchMove::Relocate(_) => "relocate",
            LocalSearchMove::Swap(_) => "swap",
            LocalSearchMove::TwoOpt(_) => "2-opt",
        }
    }

    fn delta(&self) -> f64 {
        match self {
            LocalSearchMove::Relocate(m) => m.delta,
            LocalSearchMove::Swap(m) => m.delta,
            LocalSearchMove::TwoOpt(m) => m.delta,
        }
    }

    /// Applies the move and refreshes the distances of the routes it touched.
    fn apply(&self, routes: &mut [Route], evaluator: &RouteEvaluator<'_>, stats: &mut SearchStats) {
        let (a, b) = match self {
            LocalSearchMove::Relocate(m) => {
                m.apply(routes);
                stats.relocates += 1;
                (m.from_route, m.to_route)
            }
            LocalSearchMove::Swap(m) => {
                m.apply(routes);
                stats.swaps += 1;
                (m.route_a, m.route_b)
            }
            LocalSearchMove::TwoOpt(m) => {
                m.apply(routes);
                stats.two_opts += 1;
                (m.route, m.route)
            }
        };
        evaluator.refresh(&mut routes[a]);
        if b != a {
            evaluator.refresh(&mut routes[b]);
        }
    }
}

fn next_move(routes: &[Route], scan: &mut MoveScan<'_>) -> Scan<LocalSearchMove> {
    match find_relocate(routes, scan).map(LocalSearchMove::Relocate) {
        Scan::Exhausted => {}
        other => return other,
    }
    match find_swap(routes, scan).map(LocalSearchMove::Swap) {
        Scan::Exhausted => {}
        other => return other,
    }
    find_two_opt(routes, scan).map(LocalSearchMove::TwoOpt)
}

/// Improves `solution` with relocate, swap and 2-opt moves until no move
/// helps or `deadline` passes.
///
/// The returned solution is never more expensive than the input and visits
/// every stop exactly once if the input did. The scan order is fixed, so
/// identical inputs with a deadline that is not reached give identical
/// results.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use optiroute::constructive::cheapest_arc;
/// use optiroute::distance::{DistanceProvider, EuclideanProvider};
/// use optiroute::local_search::{improve, Termination};
/// use optiroute::models::{Coordinate, RouteInstance};
///
/// let coords: Vec<Coordinate> = [(0.0, 0.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)]
///     .into_iter()
///     .map(Coordinate::from)
///     .collect();
/// let dm = EuclideanProvider.compute(&coords).unwrap();
/// let instance = RouteInstance::new(dm, 2, 0).unwrap();
///
/// let initial = cheapest_arc(&instance);
/// let initial_cost = initial.total_cost();
/// let result = improve(&instance, initial, Instant::now() + Duration::from_secs(5));
/// assert_eq!(result.termination, Termination::Converged);
/// assert!(result.solution.total_cost() <= initial_cost + 1e-10);
/// ```
pub fn improve(instance: &RouteInstance, solution: Solution, deadline: Instant) -> Improvement {
    run(instance, solution, MoveScan::new(instance, deadline))
}

fn run(instance: &RouteInstance, mut solution: Solution, mut scan: MoveScan<'_>) -> Improvement {
    let evaluator = RouteEvaluator::new(instance);
    let mut stats = SearchStats::default();
    let initial_cost = solution.total_cost();

    let termination = loop {
        if scan.deadline_reached() {
            break Termination::DeadlineReached;
        }
        match next_move(solution.routes(), &mut scan) {
            Scan::Found(mv) => {
                trace!(
                    operator = mv.operator_name(),
                    delta = mv.delta(),
                    "Apply move"
                );
                mv.apply(solution.routes_mut(), &evaluator, &mut stats);
            }
            Scan::Exhausted => break Termination::Converged,
            Scan::Interrupted => break Termination::DeadlineReached,
        }
    };
    stats.evaluated = scan.evaluated();

    debug!(
        ?termination,
        initial_cost,
        final_cost = solution.total_cost(),
        relocates = stats.relocates,
        swaps = stats.swaps,
        two_opts = stats.two_opts,
        evaluated = stats.evaluated,
        "Local search finished"
    );

    Improvement {
        solution,
        termination,
        stats,
    }
}
