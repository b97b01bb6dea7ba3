//! Result of a batch construction run.

use cardtrade_core::{ContestId, RewardId};

/// Contests and rewards committed by a batch construction run.
///
/// A run that halts early still carries everything committed before the
/// halt. Falling short of the requested contest count is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Committed contests in commit order.
    pub contests: Vec<ContestId>,
    /// Rewards kept by the solve passes of committed batches.
    pub rewards: Vec<RewardId>,
    /// True if some batch found no workable grouping.
    pub halted: bool,
}

impl BatchOutcome {
    pub fn contest_count(&self) -> usize {
        self.contests.len()
    }

    pub fn reward_count(&self) -> usize {
        self.rewards.len()
    }

    /// Splits into `(contests, rewards)`.
    pub fn into_parts(self) -> (Vec<ContestId>, Vec<RewardId>) {
        (self.contests, self.rewards)
    }
}
