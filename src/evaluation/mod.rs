//! Solution checking: capacity, depot anchoring, cost and delivery totals.

mod checker;

pub use checker::{SolutionChecker, Violation, ViolationType};
