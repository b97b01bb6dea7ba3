//! Typed identities for population entities.
//!
//! Every participant, contest and reward draws its number from one
//! [`IdAllocator`] owned by the population, so numbers are unique across
//! entity kinds and increase in creation order.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(u64);

        impl $name {
            /// Returns the raw identity number.
            #[inline]
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a participant.
    ParticipantId,
    "Participant"
);
entity_id!(
    /// Identity of a contest.
    ContestId,
    "Contest"
);
entity_id!(
    /// Identity of a reward.
    RewardId,
    "Reward"
);

/// Hands out identity numbers starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    pub fn next_participant(&mut self) -> ParticipantId {
        ParticipantId(self.next())
    }

    pub fn next_contest(&mut self) -> ContestId {
        ContestId(self.next())
    }

    pub fn next_reward(&mut self) -> RewardId {
        RewardId(self.next())
    }

    /// Returns the most recently issued number (0 before any allocation).
    pub fn last(&self) -> u64 {
        self.last
    }
}
