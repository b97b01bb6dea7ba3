//! Reward entity.

use crate::id::{ContestId, ParticipantId, RewardId};
use crate::tier::QualityTier;

/// One unit of a given tier, bound to at most one contest and owned by at
/// most one participant.
///
/// Owner and contest are changed only through [`Population`](super::Population),
/// which keeps the owner's reward list in step with [`Reward::owner`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub(crate) id: RewardId,
    pub(crate) quality: QualityTier,
    pub(crate) contest: Option<ContestId>,
    pub(crate) owner: Option<ParticipantId>,
    pub(crate) tiebreak: u32,
}

impl Reward {
    pub(crate) fn new(id: RewardId, quality: QualityTier) -> Self {
        Self {
            id,
            quality,
            contest: None,
            owner: None,
            tiebreak: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> RewardId {
        self.id
    }

    #[inline]
    pub fn quality(&self) -> QualityTier {
        self.quality
    }

    #[inline]
    pub fn contest(&self) -> Option<ContestId> {
        self.contest
    }

    #[inline]
    pub fn owner(&self) -> Option<ParticipantId> {
        self.owner
    }

    /// Per-contest tiebreak; 0 until assigned.
    #[inline]
    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }

    /// Returns true if the reward has neither owner nor contest.
    pub fn is_detached(&self) -> bool {
        self.owner.is_none() && self.contest.is_none()
    }

    /// Returns the ordering key: quality first, then tiebreak.
    pub fn rank(&self) -> RewardRank {
        RewardRank {
            quality: self.quality,
            tiebreak: self.tiebreak,
        }
    }
}

/// Ordering key for rewards.
///
/// Any lower-tier reward ranks below any higher-tier reward; rewards of the
/// same tier rank by ascending tiebreak.
///
/// # Example
///
/// ```
/// use cardtrade_core::{QualityTier, RewardRank};
///
/// let bronze = RewardRank { quality: QualityTier::Bronze, tiebreak: 9 };
/// let silver = RewardRank { quality: QualityTier::Silver, tiebreak: 1 };
/// assert!(bronze < silver);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RewardRank {
    pub quality: QualityTier,
    pub tiebreak: u32,
}
