//! Quality tiers for rewards.
//!
//! Tiers are totally ordered: bronze < silver < gold. Each tier also fixes the
//! arity of the trade cycle needed to award it.

use std::fmt;
use std::str::FromStr;

use crate::error::{CardTradeError, Result};

/// Ordinal quality of a reward.
///
/// # Example
///
/// ```
/// use cardtrade_core::QualityTier;
///
/// let tier: QualityTier = "silver".parse().unwrap();
/// assert_eq!(tier, QualityTier::Silver);
/// assert!(QualityTier::Bronze < tier && tier < QualityTier::Gold);
/// assert_eq!(tier.arity(), 4);
///
/// assert!(QualityTier::try_from(3_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QualityTier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl QualityTier {
    /// Tier names in ordinal order.
    pub const NAMES: [&'static str; 3] = ["bronze", "silver", "gold"];

    /// Returns every tier in ascending order.
    pub fn all() -> [QualityTier; 3] {
        [QualityTier::Bronze, QualityTier::Silver, QualityTier::Gold]
    }

    /// Returns the ordinal (0, 1 or 2).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase tier name.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Number of participants in a trade cycle awarding this tier.
    #[inline]
    pub fn arity(self) -> usize {
        self as usize + 3
    }

    /// Combination level used to enumerate the other cycle members.
    ///
    /// A level `L` yields tuples of `L + 2` participants, so a cycle of
    /// `arity()` members needs level `arity() - 3`.
    #[inline]
    pub fn level(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for QualityTier {
    type Error = CardTradeError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(QualityTier::Bronze),
            1 => Ok(QualityTier::Silver),
            2 => Ok(QualityTier::Gold),
            other => Err(CardTradeError::TierOutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for QualityTier {
    type Error = CardTradeError;

    fn try_from(value: u8) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl FromStr for QualityTier {
    type Err = CardTradeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::all()
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CardTradeError::UnknownTierName(s.to_string()))
    }
}
