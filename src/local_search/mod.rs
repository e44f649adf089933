//! Local search for improving routing solutions.
//!
//! Three neighborhoods are scanned by [`improve`]:
//!
//! - relocate: move one stop to another position, in any route
//! - swap: exchange two stops, in the same or different routes
//! - 2-opt: reverse a segment of one route

mod relocate;
mod search;
mod swap;
mod two_opt;

pub use search::{improve, Improvement, SearchStats, Termination};
