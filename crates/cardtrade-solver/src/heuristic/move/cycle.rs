//! CycleMove - hands one new reward to each member of a trade cycle.
//!
//! Members are labelled `p_0 = requester, p_1, ..., p_{k-1}`. Reward `i` is
//! the one destined for `p_i`'s trade; member `p_i` receives reward
//! `i - 1 (mod k)`, so the rewards rotate once around the cycle. Every reward
//! is bound to the target contest.

use itertools::Itertools;
use smallvec::SmallVec;

use cardtrade_core::{ContestId, ParticipantId, Population, RewardId};

use super::Move;
use crate::director::PopulationDirector;

/// A speculative trade cycle.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
/// use cardtrade_solver::{CycleMove, Move, PopulationDirector, RecordingDirector};
///
/// let mut population = Population::with_participants(3);
/// let p = population.participant_ids();
/// let contest = population.open_contest(&p);
/// let rewards: Vec<_> = (0..3).map(|_| population.mint_reward(QualityTier::Bronze)).collect();
///
/// let cycle = CycleMove::new(p[0], &p[1..], &rewards, contest);
/// assert!(cycle.is_doable(&population));
///
/// let mut attempt = RecordingDirector::new(&mut population);
/// cycle.do_move(&mut attempt);
/// assert!(cycle.is_feasible(attempt.population()));
/// attempt.undo_changes();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleMove {
    members: SmallVec<[ParticipantId; 5]>,
    rewards: SmallVec<[RewardId; 5]>,
    contest: ContestId,
}

impl CycleMove {
    /// Creates a cycle starting at `requester` followed by `others`.
    pub fn new(
        requester: ParticipantId,
        others: &[ParticipantId],
        rewards: &[RewardId],
        contest: ContestId,
    ) -> Self {
        let mut members = SmallVec::with_capacity(others.len() + 1);
        members.push(requester);
        members.extend_from_slice(others);
        Self {
            members,
            rewards: SmallVec::from_slice(rewards),
            contest,
        }
    }

    #[inline]
    pub fn members(&self) -> &[ParticipantId] {
        &self.members
    }

    #[inline]
    pub fn rewards(&self) -> &[RewardId] {
        &self.rewards
    }

    #[inline]
    pub fn contest(&self) -> ContestId {
        self.contest
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.members.len()
    }

    /// Reward received by member `index`.
    pub fn reward_for(&self, index: usize) -> RewardId {
        let k = self.arity();
        self.rewards[(index + k - 1) % k]
    }

    /// Members that member `index` must not already hold anything for:
    /// the next `k - 2` members around the cycle.
    pub fn helped(&self, index: usize) -> impl Iterator<Item = ParticipantId> + '_ {
        let k = self.arity();
        (1..k.saturating_sub(1)).map(move |offset| self.members[(index + offset) % k])
    }

    /// Returns true if no member already holds, outside this cycle's own
    /// rewards, something a member it helps would want.
    pub fn is_feasible(&self, population: &Population) -> bool {
        (0..self.arity()).all(|index| {
            let helper = self.members[index];
            self.helped(index)
                .all(|helped| !population.wants_ignoring(helper, helped, &self.rewards))
        })
    }
}

impl Move for CycleMove {
    fn is_doable(&self, director: &dyn PopulationDirector) -> bool {
        let population = director.population();
        self.arity() >= 2
            && self.members.len() == self.rewards.len()
            && self.members.iter().all_unique()
            && population.contest(self.contest).is_some()
            && self
                .members
                .iter()
                .all(|&p| population.participant(p).is_some())
            && self
                .rewards
                .iter()
                .all(|&r| population.reward(r).is_some())
    }

    fn do_move(&self, director: &mut dyn PopulationDirector) {
        for (index, &member) in self.members.iter().enumerate() {
            let reward = self.reward_for(index);
            director.bind_contest(reward, Some(self.contest));
            director.transfer_ownership(reward, Some(member));
        }
    }

    fn participants(&self) -> &[ParticipantId] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::director::RecordingDirector;
    use cardtrade_core::QualityTier;

    fn cycle_of(n: usize) -> (Population, CycleMove) {
        let mut population = Population::with_participants(n);
        let p = population.participant_ids();
        let contest = population.open_contest(&p);
        let rewards: Vec<_> = (0..n)
            .map(|_| population.mint_reward(QualityTier::Silver))
            .collect();
        let cycle = CycleMove::new(p[0], &p[1..], &rewards, contest);
        (population, cycle)
    }

    #[test]
    fn test_rotation() {
        let (_, cycle) = cycle_of(4);
        let r = cycle.rewards().to_vec();
        assert_eq!(cycle.reward_for(0), r[3]);
        assert_eq!(cycle.reward_for(1), r[0]);
        assert_eq!(cycle.reward_for(3), r[2]);
    }

    #[test]
    fn test_helped_lists() {
        let (_, cycle) = cycle_of(4);
        let m = cycle.members().to_vec();
        assert_eq!(cycle.helped(0).collect::<Vec<_>>(), vec![m[1], m[2]]);
        assert_eq!(cycle.helped(2).collect::<Vec<_>>(), vec![m[3], m[0]]);
        assert_eq!(cycle.helped(3).collect::<Vec<_>>(), vec![m[0], m[1]]);
    }

    #[test]
    fn test_do_move_binds_and_assigns() {
        let (mut population, cycle) = cycle_of(3);
        cycle.do_move(&mut population);

        for (index, &member) in cycle.members().iter().enumerate() {
            let reward = population.reward(cycle.reward_for(index)).unwrap();
            assert_eq!(reward.owner(), Some(member));
            assert_eq!(reward.contest(), Some(cycle.contest()));
            assert_eq!(population.reward_count_of(member), 1);
        }
    }

    #[test]
    fn test_undo_detaches_every_reward() {
        let (mut population, cycle) = cycle_of(5);
        let mut attempt = RecordingDirector::new(&mut population);
        cycle.do_move(&mut attempt);
        attempt.undo_changes();
        drop(attempt);

        assert!(population.rewards().all(|r| r.is_detached()));
        assert!(population.participants().all(|p| p.rewards().is_empty()));
    }

    #[test]
    fn test_pre_existing_want_is_infeasible() {
        let (mut population, cycle) = cycle_of(3);
        let m = cycle.members().to_vec();
        let old = population.mint_reward(QualityTier::Bronze);
        population.bind_contest(old, Some(cycle.contest()));
        population.assign(old, m[1]);

        // m[1] helps m[2], who joined the contest `old` is bound to.
        assert!(!cycle.is_feasible(&population));
    }

    #[test]
    fn test_not_doable_with_repeated_member() {
        let (population, cycle) = cycle_of(3);
        let m = cycle.members().to_vec();
        let repeated = CycleMove::new(m[0], &[m[1], m[1]], cycle.rewards(), cycle.contest());
        assert!(cycle.is_doable(&population));
        assert!(!repeated.is_doable(&population));
    }
}
