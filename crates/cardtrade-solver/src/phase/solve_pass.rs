//! Population-wide solve pass.
//!
//! Runs the allocation solver once for every participant/contest pair,
//! participants taken in ascending reward-count order. One exhausted
//! allocation rejects the whole pass and rolls back everything it awarded.

use tracing::debug;

use cardtrade_core::{ParticipantId, RewardId};

use super::allocation::{Allocation, AllocationSolver};
use crate::director::{PopulationDirector, RecordingDirector};
use crate::statistics::SearchStatistics;

/// Solves every contest each member of `pool` has joined.
///
/// Returns the rewards newly kept by the pass, or `None` (with the
/// population unchanged) if any allocation was exhausted.
pub fn solve_population(
    director: &mut dyn PopulationDirector,
    pool: &[ParticipantId],
    solver: &AllocationSolver,
    stats: &mut SearchStatistics,
) -> Option<Vec<RewardId>> {
    let order = director.population().sorted_by_reward_count(pool);
    let mut pass = RecordingDirector::new(director);
    let mut awarded: Vec<RewardId> = Vec::new();

    for &participant in &order {
        let contests = pass
            .population()
            .participant(participant)
            .map(|p| p.contests().to_vec())
            .unwrap_or_default();

        for contest in contests {
            match solver.allocate(&mut pass, participant, &order, contest, stats) {
                Allocation::AlreadySolved => {}
                Allocation::Awarded(rewards) => {
                    for reward in rewards {
                        if !awarded.contains(&reward) {
                            awarded.push(reward);
                        }
                    }
                }
                Allocation::Exhausted => {
                    pass.undo_changes();
                    stats.record_solve_pass(false);
                    debug!(
                        event = "solve_pass_rejected",
                        participant = %participant,
                        contest = %contest,
                        rolled_back = awarded.len(),
                    );
                    return None;
                }
            }
        }
    }

    pass.commit();
    stats.record_solve_pass(true);
    Some(awarded)
}
