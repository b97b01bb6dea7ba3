//! Search phases, innermost first:
//! - `allocation`: one participant, one contest, one tier
//! - `solve_pass`: every participant/contest pair of a population
//! - `batch`: grouping participants into contests that solve

pub mod allocation;
pub mod batch;
pub mod solve_pass;

use cardtrade_config::AllocationConfig;
use cardtrade_core::{ParticipantId, QualityTier};

use crate::director::PopulationDirector;
use batch::{BatchOutcome, ContestBatchBuilder};

/// Adds up to `number_of_contests` contests of `size_of_contests` members
/// over `participants`, `batch_size` contests at a time, validating each
/// batch with a solve pass at `tier`.
///
/// Returns everything committed, which may be fewer contests than requested.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
/// use cardtrade_solver::add_contests;
///
/// let mut population = Population::with_participants(6);
/// let participants = population.participant_ids();
///
/// let outcome = add_contests(&mut population, &participants, 1, 3, QualityTier::Bronze, 1);
/// let (contests, rewards) = outcome.into_parts();
/// assert_eq!(contests.len(), 1);
/// assert!(!rewards.is_empty());
/// ```
pub fn add_contests(
    director: &mut dyn PopulationDirector,
    participants: &[ParticipantId],
    number_of_contests: usize,
    size_of_contests: usize,
    tier: QualityTier,
    batch_size: usize,
) -> BatchOutcome {
    let config = AllocationConfig::new()
        .with_number_of_contests(number_of_contests)
        .with_size_of_contests(size_of_contests)
        .with_tier(tier)
        .with_batch_size(batch_size);
    ContestBatchBuilder::new(config).build(director, participants)
}
