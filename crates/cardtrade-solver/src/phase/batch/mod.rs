//! Contest batch builder.
//!
//! Groups participants into contests a batch at a time. Each candidate batch
//! is a permutation of the remaining participants cut into contiguous groups
//! of `size_of_contests`:
//!
//! 1. a batch repeating the lineup of a live contest is skipped outright;
//! 2. otherwise its contests are opened and a population-wide solve pass runs;
//! 3. a successful pass commits the batch and its rewards, and the batch's
//!    participants leave the remaining pool;
//! 4. a failed pass closes the contests again and the next permutation is
//!    tried.
//!
//! When the remaining pool is too small for another contest, a new round
//! starts from the full population. Construction stops once the requested
//! number of contests is reached, or halts when a batch has no workable
//! permutation.

mod outcome;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{info, trace, warn};

use cardtrade_config::AllocationConfig;
use cardtrade_core::{Contest, ContestId, ParticipantId, RewardId};

use super::allocation::AllocationSolver;
use super::solve_pass::solve_population;
use crate::director::{PopulationDirector, RecordingDirector};
use crate::statistics::SearchStatistics;

pub use outcome::BatchOutcome;

/// A committed batch: its contests, the rewards of its solve pass, and the
/// participants it used.
struct Batch {
    contests: Vec<ContestId>,
    rewards: Vec<RewardId>,
    members: Vec<ParticipantId>,
}

/// Builds non-duplicate contests whose reward assignment solves.
///
/// # Example
///
/// ```
/// use cardtrade_config::AllocationConfig;
/// use cardtrade_core::Population;
/// use cardtrade_solver::ContestBatchBuilder;
///
/// let mut population = Population::with_participants(6);
/// let participants = population.participant_ids();
///
/// let config = AllocationConfig::new()
///     .with_number_of_contests(1)
///     .with_batch_size(1);
/// let mut builder = ContestBatchBuilder::new(config);
/// let outcome = builder.build(&mut population, &participants);
///
/// assert_eq!(outcome.contest_count(), 1);
/// assert!(!outcome.halted);
/// ```
#[derive(Debug, Clone)]
pub struct ContestBatchBuilder {
    config: AllocationConfig,
    solver: AllocationSolver,
    statistics: SearchStatistics,
}

impl ContestBatchBuilder {
    pub fn new(config: AllocationConfig) -> Self {
        let solver = AllocationSolver::new(config.tier);
        Self {
            config,
            solver,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn into_statistics(self) -> SearchStatistics {
        self.statistics
    }

    /// Adds up to `number_of_contests` contests over `participants`.
    pub fn build(
        &mut self,
        director: &mut dyn PopulationDirector,
        participants: &[ParticipantId],
    ) -> BatchOutcome {
        let size = self.config.size_of_contests;
        let batch_size = self.config.batch_size;
        let target = self.config.number_of_contests;
        let mut outcome = BatchOutcome::default();

        self.statistics.start();
        info!(
            event = "add_contests_start",
            participants = participants.len(),
            number_of_contests = target,
            size_of_contests = size,
            batch_size = batch_size,
            tier = %self.config.tier,
        );

        if size == 0 || batch_size == 0 {
            warn!(
                event = "batch_halt",
                size_of_contests = size,
                batch_size = batch_size,
                "Contest and batch sizes must be positive"
            );
            outcome.halted = true;
            return outcome;
        }

        'rounds: while outcome.contests.len() < target {
            let committed = outcome.contests.len();
            let mut remaining = participants.to_vec();

            while remaining.len() >= size && outcome.contests.len() < target {
                let count = batch_size
                    .min(remaining.len() / size)
                    .min(target - outcome.contests.len());

                let Some(batch) = self.next_batch(director, participants, &remaining, count) else {
                    warn!(
                        event = "batch_halt",
                        batch_size = batch_size,
                        committed = outcome.contests.len(),
                        "Can't add any more batches of {} contests",
                        batch_size
                    );
                    outcome.halted = true;
                    break 'rounds;
                };

                remaining.retain(|p| !batch.members.contains(p));
                self.statistics.record_batch_committed();
                info!(
                    event = "batch_committed",
                    contests = batch.contests.len(),
                    rewards = batch.rewards.len(),
                    remaining = remaining.len(),
                );
                outcome.contests.extend(batch.contests);
                outcome.rewards.extend(batch.rewards);
            }

            if outcome.contests.len() == committed {
                break;
            }
        }

        info!(
            event = "add_contests_end",
            contests = outcome.contests.len(),
            rewards = outcome.rewards.len(),
            halted = outcome.halted,
            duration_ms = self.statistics.elapsed().as_millis() as u64,
            solve_passes = self.statistics.solve_passes,
            cycles_tried = self.statistics.cycles_tried,
            rollbacks = self.statistics.rollbacks,
        );
        outcome
    }

    /// Finds the first permutation of `remaining` whose `count` contests are
    /// new and whose solve pass over `participants` succeeds.
    fn next_batch(
        &mut self,
        director: &mut dyn PopulationDirector,
        participants: &[ParticipantId],
        remaining: &[ParticipantId],
        count: usize,
    ) -> Option<Batch> {
        let size = self.config.size_of_contests;
        let existing: Vec<BTreeSet<ParticipantId>> = director
            .population()
            .contests()
            .map(Contest::lineup)
            .collect();
        let mut passes: u64 = 0;

        for draw in remaining.iter().copied().permutations(count * size) {
            let groups: Vec<&[ParticipantId]> = draw.chunks(size).collect();
            let repeats = groups.iter().any(|group| {
                let lineup: BTreeSet<ParticipantId> = group.iter().copied().collect();
                existing.contains(&lineup)
            });
            if repeats {
                self.statistics.record_duplicate_batch();
                trace!(event = "duplicate_batch", members = ?draw);
                continue;
            }

            if self
                .config
                .solve_pass_limit
                .is_some_and(|limit| passes >= limit)
            {
                return None;
            }
            passes += 1;

            let mut attempt = RecordingDirector::new(&mut *director);
            let contests: Vec<ContestId> = groups
                .iter()
                .map(|group| attempt.open_contest(group))
                .collect();

            match solve_population(&mut attempt, participants, &self.solver, &mut self.statistics) {
                Some(rewards) => {
                    attempt.commit();
                    return Some(Batch {
                        contests,
                        rewards,
                        members: draw,
                    });
                }
                None => attempt.undo_changes(),
            }
        }
        None
    }
}
