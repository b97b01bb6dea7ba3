//! Contest entity.

use std::collections::BTreeSet;

use super::reward::RewardRank;
use crate::id::{ContestId, ParticipantId, RewardId};

/// A fixed group of participants.
///
/// Two contests are duplicates when their member sets are equal, regardless
/// of order; see [`Contest::has_lineup`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contest {
    pub(crate) id: ContestId,
    pub(crate) participants: Vec<ParticipantId>,
}

impl Contest {
    #[inline]
    pub fn id(&self) -> ContestId {
        self.id
    }

    #[inline]
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Member set, ignoring order.
    pub fn lineup(&self) -> BTreeSet<ParticipantId> {
        self.participants.iter().copied().collect()
    }

    /// Returns true if `members` names exactly this contest's member set.
    pub fn has_lineup(&self, members: &[ParticipantId]) -> bool {
        self.lineup() == members.iter().copied().collect()
    }

    /// Returns true if both contests have the same member set.
    pub fn is_duplicate_of(&self, other: &Contest) -> bool {
        self.lineup() == other.lineup()
    }
}

/// A participant's best reward within one contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub participant: ParticipantId,
    pub reward: RewardId,
    pub rank: RewardRank,
}
