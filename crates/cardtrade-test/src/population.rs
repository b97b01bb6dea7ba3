//! Population builders.

use cardtrade_core::{ContestId, ParticipantId, Population, QualityTier, RewardId};

/// A population together with its participant IDs in creation order.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub population: Population,
    pub participants: Vec<ParticipantId>,
}

impl Fixture {
    /// Participant `index` in creation order.
    pub fn p(&self, index: usize) -> ParticipantId {
        self.participants[index]
    }
}

/// Creates `n` participants with no rewards or contests.
pub fn population_with(n: usize) -> Fixture {
    let population = Population::with_participants(n);
    let participants = population.participant_ids();
    Fixture {
        population,
        participants,
    }
}

/// Creates `n` participants who have all joined one contest.
pub fn single_contest(n: usize) -> (Fixture, ContestId) {
    let mut fixture = population_with(n);
    let contest = fixture.population.open_contest(&fixture.participants);
    (fixture, contest)
}

/// Mints a reward bound to `contest` and gives it to `owner`.
pub fn grant(
    population: &mut Population,
    owner: ParticipantId,
    contest: ContestId,
    quality: QualityTier,
) -> RewardId {
    let reward = population.mint_reward(quality);
    population.bind_contest(reward, Some(contest));
    population.assign(reward, owner);
    reward
}
