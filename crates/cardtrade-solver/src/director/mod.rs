//! Population directors.
//!
//! A director gives search code access to the working [`Population`] and
//! accepts undo closures for every change it makes. The plain population
//! discards them; a [`RecordingDirector`] stacks them so a speculative change
//! can be reversed exactly.
//!
//! The provided methods on [`PopulationDirector`] are the only mutators search
//! code uses. Each one performs the change and registers its own undo.

mod recording;

#[cfg(test)]
mod recording_tests;

use cardtrade_core::{ContestId, ParticipantId, Population, QualityTier, RewardId};

pub use recording::RecordingDirector;

/// Undo closure registered by a change.
pub type Undo = Box<dyn FnOnce(&mut Population) + Send>;

/// Access to a working population with undo registration.
pub trait PopulationDirector {
    /// Returns the working population.
    fn population(&self) -> &Population;

    /// Returns the working population for unrecorded mutation.
    fn population_mut(&mut self) -> &mut Population;

    /// Registers an undo closure for a change already applied.
    fn register_undo(&mut self, undo: Undo);

    /// Creates a detached reward.
    fn mint_reward(&mut self, quality: QualityTier) -> RewardId {
        let id = self.population_mut().mint_reward(quality);
        self.register_undo(Box::new(move |population| {
            population.remove_reward(id);
        }));
        id
    }

    /// Moves `reward` to `owner` (or leaves it ownerless).
    fn transfer_ownership(&mut self, reward: RewardId, owner: Option<ParticipantId>) {
        let previous = self.population_mut().transfer_ownership(reward, owner);
        let current = self.population().reward(reward).and_then(|r| r.owner());
        if current != previous.owner {
            self.register_undo(Box::new(move |population| {
                population.restore_ownership(reward, previous);
            }));
        }
    }

    /// Binds `reward` to `contest` (or unbinds it).
    fn bind_contest(&mut self, reward: RewardId, contest: Option<ContestId>) {
        let previous = self.population_mut().bind_contest(reward, contest);
        if previous != contest {
            self.register_undo(Box::new(move |population| {
                population.bind_contest(reward, previous);
            }));
        }
    }

    /// Detaches `reward` and drops it from the store.
    fn discard_reward(&mut self, reward: RewardId) {
        self.transfer_ownership(reward, None);
        self.bind_contest(reward, None);
        if let Some(removed) = self.population_mut().remove_reward(reward) {
            self.register_undo(Box::new(move |population| {
                population.restore_reward(removed);
            }));
        }
    }

    /// Creates a contest over `members` and joins them to it.
    fn open_contest(&mut self, members: &[ParticipantId]) -> ContestId {
        let id = self.population_mut().open_contest(members);
        self.register_undo(Box::new(move |population| {
            population.close_contest(id);
        }));
        id
    }
}

impl PopulationDirector for Population {
    fn population(&self) -> &Population {
        self
    }

    fn population_mut(&mut self) -> &mut Population {
        self
    }

    fn register_undo(&mut self, _undo: Undo) {}
}
