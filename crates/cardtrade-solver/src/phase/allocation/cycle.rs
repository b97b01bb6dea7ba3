//! Existing trade cycles.
//!
//! A participant already has a path to a tier for a contest when it sits at
//! the start of a closed chain `x_0 = requester, x_1, ..., x_{k-1}` where:
//! - every member holds something its predecessor `x_{i-1}` wants;
//! - the edge `x_1 -> x_0` is backed by a reward bound to the contest, at or
//!   above the tier;
//! - no member holds anything any other member wants.

use cardtrade_core::{ContestId, ParticipantId, Population, QualityTier};

use crate::heuristic::distinct_tuples;

/// Returns true if `cycle` is a closed trade cycle for `contest` at `tier`.
///
/// `cycle[0]` is the requester. Cycles of fewer than two members never
/// qualify.
pub fn is_trade_cycle(
    population: &Population,
    cycle: &[ParticipantId],
    contest: ContestId,
    tier: QualityTier,
) -> bool {
    let k = cycle.len();
    if k < 2 {
        return false;
    }

    (0..k).all(|i| {
        let member = cycle[i];
        let predecessor = (i + k - 1) % k;
        let linked = if i == 1 {
            population.wants_in(member, cycle[0], Some(contest), Some(tier))
        } else {
            population.wants(member, cycle[predecessor])
        };
        linked
            && (0..k)
                .filter(|&j| j != i && j != predecessor)
                .all(|j| !population.wants(member, cycle[j]))
    })
}

/// Returns true if `requester` already closes a trade cycle of the tier's
/// arity for `contest`, drawing the other members from `pool`.
pub fn solved_for(
    population: &Population,
    requester: ParticipantId,
    pool: &[ParticipantId],
    contest: ContestId,
    tier: QualityTier,
) -> bool {
    distinct_tuples(population, requester, pool, tier.level()).any(|others| {
        let mut cycle = Vec::with_capacity(others.len() + 1);
        cycle.push(requester);
        cycle.extend(others);
        is_trade_cycle(population, &cycle, contest, tier)
    })
}
