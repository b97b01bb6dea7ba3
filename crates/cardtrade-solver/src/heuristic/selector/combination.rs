//! Combination generator for trade-cycle candidates.
//!
//! For a requesting participant and a pool, yields every ordered tuple of
//! `level + 2` distinct participants other than the requester. The pool is
//! first sorted by ascending reward count (stable), so lightly loaded
//! participants are tried first. Tuples come out in lexicographic order of
//! that sorted pool.
//!
//! The returned iterator owns its sorted snapshot of the pool, so it does not
//! borrow the population and can be consumed while the population changes.
//! Calling the function again restarts the enumeration.

use itertools::Itertools;

use cardtrade_core::{ParticipantId, Population};

/// Enumerates ordered tuples of `level + 2` distinct participants from
/// `pool`, excluding `requester`.
///
/// # Example
///
/// ```
/// use cardtrade_core::Population;
/// use cardtrade_solver::distinct_tuples;
///
/// let population = Population::with_participants(4);
/// let p = population.participant_ids();
///
/// let pairs: Vec<_> = distinct_tuples(&population, p[0], &p, 0).collect();
/// assert_eq!(pairs.len(), 3 * 2);
/// assert_eq!(pairs[0], vec![p[1], p[2]]);
/// assert!(pairs.iter().all(|pair| !pair.contains(&p[0])));
/// ```
pub fn distinct_tuples(
    population: &Population,
    requester: ParticipantId,
    pool: &[ParticipantId],
    level: usize,
) -> impl Iterator<Item = Vec<ParticipantId>> {
    population
        .sorted_by_reward_count(pool)
        .into_iter()
        .filter(move |&p| p != requester)
        .unique()
        .permutations(level + 2)
}

/// Number of tuples [`distinct_tuples`] yields for `others` candidates
/// (pool size without the requester): `others · (others-1) · … ·
/// (others-level-1)`, or zero when `level + 2 > others`.
///
/// Returns `None` if the count does not fit in a `usize`.
pub fn tuple_count(others: usize, level: usize) -> Option<usize> {
    let k = level + 2;
    if k > others {
        return Some(0);
    }
    (others - k + 1..=others).try_fold(1_usize, |acc, n| acc.checked_mul(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrade_core::QualityTier;
    use proptest::prelude::*;

    #[test]
    fn test_pairs_in_sorted_order() {
        let mut population = Population::with_participants(3);
        let p = population.participant_ids();
        let reward = population.mint_reward(QualityTier::Bronze);
        population.assign(reward, p[1]);

        let pairs: Vec<_> = distinct_tuples(&population, p[0], &p, 0).collect();
        assert_eq!(pairs, vec![vec![p[2], p[1]], vec![p[1], p[2]]]);
    }

    #[test]
    fn test_tuples_are_distinct() {
        let population = Population::with_participants(6);
        let p = population.participant_ids();

        for tuple in distinct_tuples(&population, p[3], &p, 2) {
            assert_eq!(tuple.len(), 4);
            assert!(tuple.iter().all_unique());
            assert!(!tuple.contains(&p[3]));
        }
    }

    #[test]
    fn test_restartable() {
        let population = Population::with_participants(5);
        let p = population.participant_ids();

        let first: Vec<_> = distinct_tuples(&population, p[0], &p, 1).collect();
        let second: Vec<_> = distinct_tuples(&population, p[0], &p, 1).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_few_candidates() {
        let population = Population::with_participants(3);
        let p = population.participant_ids();
        assert_eq!(distinct_tuples(&population, p[0], &p, 1).count(), 0);
        assert_eq!(tuple_count(2, 1), Some(0));
    }

    #[test]
    fn test_requester_outside_pool() {
        let population = Population::with_participants(4);
        let p = population.participant_ids();
        let count = distinct_tuples(&population, p[0], &p[1..], 0).count();
        assert_eq!(Some(count), tuple_count(3, 0));
    }

    #[test]
    fn test_tuple_count_overflow() {
        assert_eq!(tuple_count(20, 2), Some(20 * 19 * 18 * 17));
        assert_eq!(tuple_count(usize::MAX, 0), None);
        assert_eq!(tuple_count(usize::MAX, 2), None);
    }

    proptest! {
        #[test]
        fn prop_tuple_count_matches(n in 1usize..8, level in 0usize..3) {
            let population = Population::with_participants(n);
            let p = population.participant_ids();
            let count = distinct_tuples(&population, p[0], &p, level).count();
            prop_assert_eq!(Some(count), tuple_count(n - 1, level));
        }
    }
}
