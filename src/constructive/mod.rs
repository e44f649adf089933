//! Constructive heuristics for building initial solutions.
//!
//! - [`cheapest_arc`]: round-robin cheapest-arc insertion across the fleet, O(n²)

mod cheapest_arc;

pub use cheapest_arc::cheapest_arc;
