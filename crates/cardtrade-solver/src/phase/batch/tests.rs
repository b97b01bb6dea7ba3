//! Tests for the contest batch builder.

use std::collections::BTreeSet;

use cardtrade_config::AllocationConfig;
use cardtrade_core::{Population, QualityTier};
use cardtrade_test::{assert_ownership_consistent, population_with};

use super::*;

fn lineups(population: &Population, contests: &[ContestId]) -> Vec<BTreeSet<ParticipantId>> {
    contests
        .iter()
        .map(|&c| population.contest(c).unwrap().lineup())
        .collect()
}

#[test]
fn test_single_batch_commits() {
    let mut fixture = population_with(6);
    let p = fixture.participants.clone();
    let config = AllocationConfig::new()
        .with_number_of_contests(1)
        .with_batch_size(1);
    let mut builder = ContestBatchBuilder::new(config);

    let outcome = builder.build(&mut fixture.population, &p);

    assert!(!outcome.halted);
    assert_eq!(outcome.contest_count(), 1);
    assert_eq!(
        lineups(&fixture.population, &outcome.contests),
        vec![p[..3].iter().copied().collect::<BTreeSet<_>>()]
    );
    assert_eq!(outcome.reward_count(), 6);
    assert_eq!(fixture.population.reward_count(), 6);
    assert_eq!(builder.statistics().batches_committed, 1);
    assert_eq!(builder.statistics().solve_passes, 1);
    assert_ownership_consistent(&fixture.population);
}

#[test]
fn test_duplicate_lineup_rejected_before_solving() {
    let mut fixture = population_with(3);
    let p = fixture.participants.clone();
    let committed = fixture.population.open_contest(&[p[0], p[1], p[2]]);
    let config = AllocationConfig::new()
        .with_number_of_contests(1)
        .with_batch_size(1);
    let mut builder = ContestBatchBuilder::new(config);

    let outcome = builder.build(&mut fixture.population, &p);

    assert!(outcome.halted);
    assert!(outcome.contests.is_empty());
    // Every ordering of the three participants repeats the lineup.
    assert_eq!(builder.statistics().duplicate_batches, 6);
    assert_eq!(builder.statistics().solve_passes, 0);
    assert_eq!(fixture.population.contest_count(), 1);
    assert!(fixture.population.contest(committed).is_some());
}

#[test]
fn test_rejected_batch_closes_its_contests() {
    let mut fixture = population_with(3);
    let p = fixture.participants.clone();
    let config = AllocationConfig::new()
        .with_number_of_contests(1)
        .with_batch_size(1);
    let mut builder = ContestBatchBuilder::new(config);

    // Three participants alone cannot solve a contest of three.
    let outcome = builder.build(&mut fixture.population, &p);

    assert!(outcome.halted);
    assert_eq!(outcome, BatchOutcome { halted: true, ..Default::default() });
    assert_eq!(fixture.population.contest_count(), 0);
    assert_eq!(fixture.population.reward_count(), 0);
    assert!(fixture
        .population
        .participants()
        .all(|participant| participant.contests().is_empty()));
    assert_eq!(builder.statistics().solve_passes_rejected, 6);
}

#[test]
fn test_solve_pass_limit_halts() {
    let mut fixture = population_with(3);
    let p = fixture.participants.clone();
    let config = AllocationConfig::new()
        .with_number_of_contests(1)
        .with_batch_size(1)
        .with_solve_pass_limit(2);
    let mut builder = ContestBatchBuilder::new(config);

    let outcome = builder.build(&mut fixture.population, &p);

    assert!(outcome.halted);
    assert_eq!(builder.statistics().solve_passes, 2);
}

#[test]
fn test_too_few_participants_is_not_a_halt() {
    let mut fixture = population_with(2);
    let p = fixture.participants.clone();
    let mut builder = ContestBatchBuilder::new(AllocationConfig::default());

    let outcome = builder.build(&mut fixture.population, &p);

    assert!(!outcome.halted);
    assert!(outcome.contests.is_empty());
}

#[test]
fn test_zero_sizes_halt_immediately() {
    let mut fixture = population_with(3);
    let p = fixture.participants.clone();
    let mut config = AllocationConfig::default();
    config.size_of_contests = 0;
    let mut builder = ContestBatchBuilder::new(config);

    let outcome = builder.build(&mut fixture.population, &p);
    assert!(outcome.halted);
    assert_eq!(fixture.population.contest_count(), 0);
}

#[test]
fn test_nine_players_halt_after_first_batch() {
    let mut fixture = population_with(9);
    let p = fixture.participants.clone();
    let config = AllocationConfig::new()
        .with_number_of_contests(6)
        .with_size_of_contests(3)
        .with_batch_size(3)
        .with_tier(QualityTier::Bronze)
        .with_solve_pass_limit(25);
    let mut builder = ContestBatchBuilder::new(config);

    let outcome = builder.build(&mut fixture.population, &p);

    // The first batch solves on its first permutation; every later batch of
    // three runs out of passes.
    assert!(outcome.halted);
    assert_eq!(outcome.contest_count(), 3);
    assert_eq!(outcome.reward_count(), 17);
    assert_eq!(builder.statistics().batches_committed, 1);
    assert_eq!(builder.statistics().solve_passes, 26);

    // The halt keeps what the first batch committed.
    assert_eq!(fixture.population.contest_count(), 3);
    assert_eq!(fixture.population.reward_count(), 17);
    let seen = lineups(&fixture.population, &outcome.contests);
    assert!(seen.iter().all(|lineup| lineup.len() == 3));
    let members: BTreeSet<ParticipantId> = seen.iter().flatten().copied().collect();
    assert_eq!(members, p.iter().copied().collect::<BTreeSet<_>>());
    for &reward in &outcome.rewards {
        let contest = fixture.population.reward(reward).unwrap().contest();
        assert!(contest.is_some_and(|c| outcome.contests.contains(&c)));
    }
    assert_ownership_consistent(&fixture.population);
}
