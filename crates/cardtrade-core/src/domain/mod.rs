//! Domain model: rewards, participants, contests and the population graph.
//!
//! Entities refer to each other through typed IDs. All mutation goes through
//! [`Population`], which keeps the ownership and membership links consistent.

mod contest;
mod participant;
mod population;
mod reward;


pub use contest::{Contest, Position};
pub use participant::Participant;
pub use population::{Ownership, Population};
pub use reward::{Reward, RewardRank};
