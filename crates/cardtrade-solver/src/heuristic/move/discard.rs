//! DiscardMove - detaches a reward and drops it from the population.

use cardtrade_core::{ParticipantId, RewardId};

use super::Move;
use crate::director::PopulationDirector;

/// Drops a newly minted reward whose owner already holds an equivalent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscardMove {
    reward: RewardId,
    owner: [ParticipantId; 1],
}

impl DiscardMove {
    pub fn new(reward: RewardId, owner: ParticipantId) -> Self {
        Self {
            reward,
            owner: [owner],
        }
    }

    #[inline]
    pub fn reward(&self) -> RewardId {
        self.reward
    }
}

impl Move for DiscardMove {
    fn is_doable(&self, director: &dyn PopulationDirector) -> bool {
        director
            .population()
            .reward(self.reward)
            .is_some_and(|reward| reward.owner() == Some(self.owner[0]))
    }

    fn do_move(&self, director: &mut dyn PopulationDirector) {
        director.discard_reward(self.reward);
    }

    fn participants(&self) -> &[ParticipantId] {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrade_core::{Population, QualityTier};

    #[test]
    fn test_discard_only_from_owner() {
        let mut population = Population::with_participants(2);
        let p = population.participant_ids();
        let reward = population.mint_reward(QualityTier::Bronze);
        population.assign(reward, p[0]);

        assert!(!DiscardMove::new(reward, p[1]).is_doable(&population));

        let discard = DiscardMove::new(reward, p[0]);
        assert!(discard.is_doable(&population));
        discard.do_move(&mut population);
        assert_eq!(population.reward_count(), 0);
        assert_eq!(population.reward_count_of(p[0]), 0);
        assert!(!discard.is_doable(&population));
    }
}
