//! cardtrade Core - Core types for tiered reward allocation
//!
//! This crate provides the fundamental abstractions for cardtrade:
//! - Quality tiers with their trade-cycle arity
//! - Typed identities and the allocator that hands them out
//! - Rewards, participants and contests
//! - The population graph tying ownership and contest membership together

pub mod domain;
pub mod error;
pub mod id;
pub mod tier;

pub use domain::{Contest, Ownership, Participant, Population, Position, Reward, RewardRank};
pub use error::{CardTradeError, Result};
pub use id::{ContestId, IdAllocator, ParticipantId, RewardId};
pub use tier::QualityTier;
