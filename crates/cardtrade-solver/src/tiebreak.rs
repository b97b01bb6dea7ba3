//! Per-contest tiebreak assignment.

use std::collections::HashMap;

use cardtrade_core::{ContestId, Population, RewardId};

/// Numbers `rewards` within each contest, in sequence order, starting at 1.
///
/// Counters are independent per contest, so interleaving in the input does
/// not matter. Rewards bound to no contest, or unknown to the population,
/// are skipped.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
/// use cardtrade_solver::set_tiebreaks;
///
/// let mut population = Population::with_participants(2);
/// let members = population.participant_ids();
/// let contest = population.open_contest(&members);
/// let first = population.mint_reward(QualityTier::Bronze);
/// let second = population.mint_reward(QualityTier::Bronze);
/// for reward in [first, second] {
///     population.bind_contest(reward, Some(contest));
/// }
///
/// set_tiebreaks(&mut population, &[second, first]);
/// assert_eq!(population.reward(second).unwrap().tiebreak(), 1);
/// assert_eq!(population.reward(first).unwrap().tiebreak(), 2);
/// ```
pub fn set_tiebreaks(population: &mut Population, rewards: &[RewardId]) {
    let mut last: HashMap<ContestId, u32> = HashMap::new();
    for &reward in rewards {
        let Some(contest) = population.reward(reward).and_then(|r| r.contest()) else {
            continue;
        };
        let counter = last.entry(contest).or_default();
        *counter += 1;
        population.set_tiebreak(reward, *counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrade_core::QualityTier;
    use cardtrade_test::{grant, population_with};

    #[test]
    fn test_counters_are_per_contest() {
        let mut fixture = population_with(2);
        let p = fixture.participants.clone();
        let population = &mut fixture.population;
        let a = population.open_contest(&p);
        let b = population.open_contest(&p);

        let a1 = grant(population, p[0], a, QualityTier::Bronze);
        let b1 = grant(population, p[1], b, QualityTier::Bronze);
        let a2 = grant(population, p[1], a, QualityTier::Silver);
        let b2 = grant(population, p[0], b, QualityTier::Bronze);
        let a3 = grant(population, p[0], a, QualityTier::Gold);

        set_tiebreaks(population, &[a1, b1, a2, b2, a3]);

        let tiebreak = |id| population.reward(id).unwrap().tiebreak();
        assert_eq!([tiebreak(a1), tiebreak(a2), tiebreak(a3)], [1, 2, 3]);
        assert_eq!([tiebreak(b1), tiebreak(b2)], [1, 2]);
    }

    #[test]
    fn test_unbound_rewards_are_skipped() {
        let mut fixture = population_with(1);
        let p = fixture.participants.clone();
        let contest = fixture.population.open_contest(&p);
        let loose = fixture.population.mint_reward(QualityTier::Bronze);
        let bound = grant(&mut fixture.population, p[0], contest, QualityTier::Bronze);

        set_tiebreaks(&mut fixture.population, &[loose, bound]);

        assert_eq!(fixture.population.reward(loose).unwrap().tiebreak(), 0);
        assert_eq!(fixture.population.reward(bound).unwrap().tiebreak(), 1);
    }
}
