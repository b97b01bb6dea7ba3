//! Entry point that wires configuration, batch construction and tiebreaks.

use cardtrade_config::AllocationConfig;
use cardtrade_core::{ParticipantId, Population};
use cardtrade_solver::{set_tiebreaks, BatchOutcome, ContestBatchBuilder, SearchStatistics};

/// Configuration file read by [`run`].
pub const CONFIG_PATH: &str = "allocation.toml";

/// Adds contests over `participants` using `allocation.toml` from the working
/// directory, or the defaults when it is missing or invalid.
pub fn run(
    population: &mut Population,
    participants: &[ParticipantId],
) -> (BatchOutcome, SearchStatistics) {
    let config = AllocationConfig::load(CONFIG_PATH).unwrap_or_default();
    run_with(&config, population, participants)
}

/// Adds contests over `participants` and numbers the committed rewards
/// within each contest. Returns the outcome with the search effort spent.
pub fn run_with(
    config: &AllocationConfig,
    population: &mut Population,
    participants: &[ParticipantId],
) -> (BatchOutcome, SearchStatistics) {
    #[cfg(feature = "console")]
    cardtrade_console::init();

    let mut builder = ContestBatchBuilder::new(config.clone());
    let outcome = builder.build(population, participants);
    set_tiebreaks(population, &outcome.rewards);
    (outcome, builder.into_statistics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrade_test::{assert_ownership_consistent, population_with};

    #[test]
    fn test_run_with_numbers_rewards() {
        let mut fixture = population_with(6);
        let p = fixture.participants.clone();
        let config = AllocationConfig::new()
            .with_number_of_contests(1)
            .with_batch_size(1);

        let (outcome, stats) = run_with(&config, &mut fixture.population, &p);

        assert_eq!(outcome.contest_count(), 1);
        assert_eq!(stats.batches_committed, 1);
        assert_eq!(stats.solve_passes, 1);
        assert_eq!(stats.rewards_minted - stats.duplicates_dropped, 6);
        let mut tiebreaks: Vec<u32> = outcome
            .rewards
            .iter()
            .map(|&r| fixture.population.reward(r).unwrap().tiebreak())
            .collect();
        tiebreaks.sort_unstable();
        assert_eq!(tiebreaks, (1..=outcome.reward_count() as u32).collect::<Vec<_>>());
        assert_ownership_consistent(&fixture.population);
    }
}
