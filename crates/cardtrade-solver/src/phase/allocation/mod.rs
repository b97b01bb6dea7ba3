//! Allocation solver for a single participant, contest and tier.
//!
//! The solver first looks for a trade cycle that already exists. Failing
//! that, it mints one reward per cycle member and tries candidate cycles
//! in the combination generator's order:
//!
//! 1. apply the rotation speculatively inside a recording;
//! 2. keep it if no member already holds something a member it helps wants;
//! 3. otherwise undo it and move on to the next candidate.
//!
//! The first feasible cycle wins. When none is feasible the minted rewards
//! are rolled back as well, leaving the population exactly as it was.

mod cycle;


use smallvec::SmallVec;
use tracing::{debug, trace};

use cardtrade_core::{ContestId, ParticipantId, QualityTier, RewardId};

use crate::director::{PopulationDirector, RecordingDirector};
use crate::heuristic::{distinct_tuples, CycleMove, DiscardMove, Move};
use crate::statistics::SearchStatistics;

pub use cycle::{is_trade_cycle, solved_for};

/// Result of one allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// An existing trade cycle already covers the request. Nothing changed.
    AlreadySolved,
    /// A new cycle was applied. Holds the minted rewards that were kept.
    Awarded(Vec<RewardId>),
    /// No candidate cycle works. Nothing changed.
    Exhausted,
}

impl Allocation {
    /// Returns true unless the search was exhausted.
    pub fn is_success(&self) -> bool {
        !matches!(self, Allocation::Exhausted)
    }

    /// Rewards newly kept by this allocation.
    pub fn rewards(&self) -> &[RewardId] {
        match self {
            Allocation::Awarded(rewards) => rewards.as_slice(),
            _ => &[],
        }
    }
}

/// Finds trade cycles that award one tier.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
/// use cardtrade_solver::{Allocation, AllocationSolver, SearchStatistics};
///
/// let mut population = Population::with_participants(3);
/// let p = population.participant_ids();
/// let contest = population.open_contest(&p);
///
/// let solver = AllocationSolver::new(QualityTier::Bronze);
/// let mut stats = SearchStatistics::default();
/// let outcome = solver.allocate(&mut population, p[0], &p, contest, &mut stats);
///
/// assert_eq!(outcome.rewards().len(), 3);
/// assert!(p.iter().all(|&member| population.reward_count_of(member) == 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocationSolver {
    tier: QualityTier,
}

impl AllocationSolver {
    pub fn new(tier: QualityTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Tries to award `requester` a reward of this solver's tier for `contest`,
    /// drawing the other cycle members from `pool`.
    ///
    /// On [`Allocation::Exhausted`] the population is left unchanged, apart
    /// from the identity allocator having moved on.
    pub fn allocate(
        &self,
        director: &mut dyn PopulationDirector,
        requester: ParticipantId,
        pool: &[ParticipantId],
        contest: ContestId,
        stats: &mut SearchStatistics,
    ) -> Allocation {
        stats.record_allocation_request();

        if solved_for(director.population(), requester, pool, contest, self.tier) {
            stats.record_already_solved();
            debug!(
                event = "already_solved",
                participant = %requester,
                contest = %contest,
                tier = %self.tier,
            );
            return Allocation::AlreadySolved;
        }

        let k = self.tier.arity();
        let mut minting = RecordingDirector::new(director);
        let rewards: SmallVec<[RewardId; 5]> =
            (0..k).map(|_| minting.mint_reward(self.tier)).collect();
        stats.record_minted(k);

        let candidates = distinct_tuples(minting.population(), requester, pool, self.tier.level());
        for others in candidates {
            let cycle = CycleMove::new(requester, &others, &rewards, contest);
            if !cycle.is_doable(&minting) {
                continue;
            }

            let mut attempt = RecordingDirector::new(&mut minting);
            cycle.do_move(&mut attempt);
            let feasible = cycle.is_feasible(attempt.population());
            stats.record_cycle(feasible);

            if feasible {
                attempt.commit();
                let kept = drop_duplicates(&mut minting, &cycle, stats);
                minting.commit();
                return Allocation::Awarded(kept);
            }

            trace!(
                event = "cycle_rejected",
                participant = %requester,
                contest = %contest,
                members = ?cycle.members(),
            );
            attempt.undo_changes();
        }

        minting.undo_changes();
        stats.record_exhausted();
        debug!(
            event = "allocation_exhausted",
            participant = %requester,
            contest = %contest,
            tier = %self.tier,
        );
        Allocation::Exhausted
    }
}

/// Discards every reward of `cycle` whose owner already holds another reward
/// of the same quality for the same contest. Returns the rewards kept.
fn drop_duplicates(
    director: &mut dyn PopulationDirector,
    cycle: &CycleMove,
    stats: &mut SearchStatistics,
) -> Vec<RewardId> {
    let mut kept = Vec::with_capacity(cycle.arity());
    for &reward in cycle.rewards() {
        let discard = {
            let population = director.population();
            population.reward(reward).and_then(|minted| {
                let owner = minted.owner()?;
                let participant = population.participant(owner)?;
                let equivalent = participant
                    .rewards()
                    .iter()
                    .filter(|&&other| other != reward)
                    .filter_map(|&other| population.reward(other))
                    .any(|other| {
                        other.quality() == minted.quality() && other.contest() == minted.contest()
                    });
                equivalent.then(|| DiscardMove::new(reward, owner))
            })
        };

        match discard {
            Some(discard) if discard.is_doable(&*director) => {
                discard.do_move(director);
                stats.record_duplicate_dropped();
                trace!(event = "duplicate_dropped", reward = %reward);
            }
            _ => kept.push(reward),
        }
    }
    kept
}
