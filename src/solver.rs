//! Exhaustive game solving: memoized minimax evaluation and full-tree
//! exploration.

pub mod explorer;
pub mod minimax;

pub use explorer::build_table;
pub use minimax::{Outcome, Solver};
