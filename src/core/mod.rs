//! Inverted-knapsack optimizer: pick the lightest subset of candidates that
//! still clears a value floor without breaking the weight ceiling.
//!
//! Everything in this module is a pure function of its arguments; no storage,
//! no shared state, no I/O.

pub mod exact;
pub mod heuristic;
pub mod model;
pub mod optimizer;
pub mod stats;

pub use model::{Constraints, Item, SolutionResult};
pub use optimizer::{EXACT_SEARCH_LIMIT, ValidationError, optimize, validate};
pub use stats::{ItemStats, statistics};
