//! cardtrade Solver Engine
//!
//! This crate provides the allocation machinery:
//! - Population directors with recorded, reversible changes
//! - Moves (trade cycles, duplicate discards)
//! - The combination generator enumerating candidate cycle members
//! - The allocation solver for a single participant, contest and tier
//! - The population-wide solve pass
//! - The contest batch builder
//! - Tiebreak assignment and search statistics
//!
//! Logging levels:
//! - **INFO**: Batch construction start/end, committed batches
//! - **WARN**: Batch construction halted early
//! - **DEBUG**: Rejected solve passes, exhausted allocations
//! - **TRACE**: Individual candidate cycles

pub mod director;
pub mod heuristic;
pub mod phase;
pub mod statistics;
pub mod tiebreak;

pub use director::{PopulationDirector, RecordingDirector, Undo};
pub use heuristic::{distinct_tuples, tuple_count, CycleMove, DiscardMove, Move};
pub use phase::{
    add_contests,
    allocation::{is_trade_cycle, solved_for, Allocation, AllocationSolver},
    batch::{BatchOutcome, ContestBatchBuilder},
    solve_pass::solve_population,
};
pub use statistics::SearchStatistics;
pub use tiebreak::set_tiebreaks;
