//! Route cost evaluation and feasibility checking.

mod evaluator;

pub use evaluator::RouteEvaluator;
