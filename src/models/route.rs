//! Per-vehicle route.

/// An ordered sequence of stops assigned to a single vehicle.
///
/// A route starts and ends at the depot, which is not stored in `stops`.
///
/// # Examples
///
/// ```
/// use optiroute::models::Route;
///
/// let mut route = Route::new(0);
/// route.push_stop(3);
/// route.push_stop(1);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.sequence(0), vec![0, 3, 1, 0]);
/// assert_eq!(Route::new(1).sequence(0), vec![0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<usize>,
    distance: f64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            stops: Vec::new(),
            distance: 0.0,
        }
    }

    /// Appends a stop to the end of this route.
    pub fn push_stop(&mut self, stop: usize) {
        self.stops.push(stop);
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the stops in visit order (depot excluded).
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    pub(crate) fn stops_mut(&mut self) -> &mut Vec<usize> {
        &mut self.stops
    }

    /// Returns the number of stops (excluding the depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Last location visited before returning to `depot`.
    pub fn last_or(&self, depot: usize) -> usize {
        self.stops.last().copied().unwrap_or(depot)
    }

    /// Closed round-trip distance (set by the evaluator).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Sets the round-trip distance.
    pub fn set_distance(&mut self, d: f64) {
        self.distance = d;
    }

    /// Full visiting sequence bounded by `depot`.
    ///
    /// A route with stops yields `[depot, s1, ..., sk, depot]`; an empty route
    /// yields the single-entry `[depot]`.
    pub fn sequence(&self, depot: usize) -> Vec<usize> {
        if self.stops.is_empty() {
            return vec![depot];
        }
        let mut seq = Vec::with_capacity(self.stops.len() + 2);
        seq.push(depot);
        seq.extend_from_slice(&self.stops);
        seq.push(depot);
        seq
    }
}
