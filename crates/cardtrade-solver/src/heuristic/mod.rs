//! Heuristic building blocks: moves and selectors.

pub mod r#move;
pub mod selector;

pub use r#move::{CycleMove, DiscardMove, Move};
pub use selector::{distinct_tuples, tuple_count};
