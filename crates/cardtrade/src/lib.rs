//! cardtrade - Tiered reward allocation through fair trade cycles
//!
//! Groups participants into contests and awards each participant a reward
//! for every contest it joined, where every award comes from a closed cycle
//! of trades in which nobody already holds what another member wants.
//!
//! # Example
//!
//! ```rust
//! use cardtrade::prelude::*;
//!
//! let mut population = Population::with_participants(6);
//! let participants = population.participant_ids();
//!
//! let config = AllocationConfig::new()
//!     .with_number_of_contests(1)
//!     .with_batch_size(1);
//! let (outcome, stats) = run_with(&config, &mut population, &participants);
//!
//! assert_eq!(outcome.contest_count(), 1);
//! assert_eq!(stats.batches_committed, 1);
//! for &reward in &outcome.rewards {
//!     assert!(population.reward(reward).unwrap().tiebreak() >= 1);
//! }
//! ```

mod run;

pub use run::{run, run_with, CONFIG_PATH};

pub use cardtrade_config::{AllocationConfig, ConfigError};
pub use cardtrade_core::{
    CardTradeError, Contest, ContestId, Participant, ParticipantId, Population, Position,
    QualityTier, Reward, RewardId, RewardRank,
};
pub use cardtrade_solver::{
    add_contests, is_trade_cycle, set_tiebreaks, solve_population, solved_for, Allocation,
    AllocationSolver, BatchOutcome, ContestBatchBuilder, PopulationDirector, RecordingDirector,
    SearchStatistics,
};

#[cfg(feature = "console")]
pub use cardtrade_console as console;

pub mod prelude {
    pub use super::{run, run_with};
    pub use super::{AllocationConfig, BatchOutcome, ContestBatchBuilder, SearchStatistics};
    pub use super::{ContestId, ParticipantId, Population, QualityTier, RewardId};
    pub use super::{add_contests, set_tiebreaks};
}
