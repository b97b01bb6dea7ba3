//! Selectors enumerating candidate participants.

mod combination;

pub use combination::{distinct_tuples, tuple_count};
