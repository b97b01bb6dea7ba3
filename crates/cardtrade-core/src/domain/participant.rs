//! Participant entity.

use crate::id::{ContestId, ParticipantId, RewardId};

/// A member of the population: owns rewards and joins contests.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub(crate) id: ParticipantId,
    pub(crate) rewards: Vec<RewardId>,
    pub(crate) contests: Vec<ContestId>,
}

impl Participant {
    pub(crate) fn new(id: ParticipantId) -> Self {
        Self {
            id,
            rewards: Vec::new(),
            contests: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Owned rewards in the order they were received.
    #[inline]
    pub fn rewards(&self) -> &[RewardId] {
        &self.rewards
    }

    /// Joined contests in the order they were joined.
    #[inline]
    pub fn contests(&self) -> &[ContestId] {
        &self.contests
    }

    #[inline]
    pub fn reward_count(&self) -> usize {
        self.rewards.len()
    }

    pub fn owns(&self, reward: RewardId) -> bool {
        self.rewards.contains(&reward)
    }

    pub fn has_joined(&self, contest: ContestId) -> bool {
        self.contests.contains(&contest)
    }
}
