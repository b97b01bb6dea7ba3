//! The population graph: participants, contests and rewards.

use std::collections::BTreeMap;

use super::contest::{Contest, Position};
use super::participant::Participant;
use super::reward::Reward;
use crate::id::{ContestId, IdAllocator, ParticipantId, RewardId};
use crate::tier::QualityTier;

/// Where a reward sat before an ownership change.
///
/// Returned by [`Population::transfer_ownership`] and consumed by
/// [`Population::restore_ownership`] to put a reward back exactly where it was,
/// including its slot in the previous owner's reward list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ownership {
    pub owner: Option<ParticipantId>,
    pub position: Option<usize>,
}

/// Owns every participant, contest and reward, and the identity allocator.
///
/// Invariants maintained by every mutator:
/// - a reward with `owner == Some(p)` appears exactly once in `p`'s reward list;
/// - a reward with no owner appears in no reward list;
/// - a contest appears in the contest list of each of its members.
///
/// The mutators here are not recorded. Search code goes through a director
/// that registers an undo for each change.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
///
/// let mut population = Population::new();
/// let a = population.add_participant();
/// let b = population.add_participant();
/// let contest = population.open_contest(&[a, b]);
///
/// let reward = population.mint_reward(QualityTier::Bronze);
/// population.bind_contest(reward, Some(contest));
/// population.assign(reward, a);
///
/// assert!(population.wants(a, b));
/// assert!(!population.wants(b, a));
/// assert_eq!(population.winner(contest).map(|p| p.participant), Some(a));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    ids: IdAllocator,
    participants: BTreeMap<ParticipantId, Participant>,
    contests: BTreeMap<ContestId, Contest>,
    rewards: BTreeMap<RewardId, Reward>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a population of `count` participants with no rewards or contests.
    pub fn with_participants(count: usize) -> Self {
        let mut population = Self::new();
        for _ in 0..count {
            population.add_participant();
        }
        population
    }

    pub fn add_participant(&mut self) -> ParticipantId {
        let id = self.ids.next_participant();
        self.participants.insert(id, Participant::new(id));
        id
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    // ---- participants ----

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    /// Participants in creation order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.keys().copied().collect()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of rewards owned by `participant` (0 if unknown).
    pub fn reward_count_of(&self, participant: ParticipantId) -> usize {
        self.participants
            .get(&participant)
            .map_or(0, Participant::reward_count)
    }

    /// Returns `pool` stably sorted by ascending reward count.
    pub fn sorted_by_reward_count(&self, pool: &[ParticipantId]) -> Vec<ParticipantId> {
        let mut sorted = pool.to_vec();
        sorted.sort_by_key(|&p| self.reward_count_of(p));
        sorted
    }

    // ---- contests ----

    pub fn contest(&self, id: ContestId) -> Option<&Contest> {
        self.contests.get(&id)
    }

    /// Live contests in creation order.
    pub fn contests(&self) -> impl Iterator<Item = &Contest> {
        self.contests.values()
    }

    pub fn contest_count(&self) -> usize {
        self.contests.len()
    }

    /// Best reward per member within `contest`, highest rank first.
    ///
    /// Members holding nothing bound to the contest are left out.
    pub fn positions(&self, contest: ContestId) -> Vec<Position> {
        let Some(entry) = self.contests.get(&contest) else {
            return Vec::new();
        };

        let mut positions: Vec<Position> = entry
            .participants
            .iter()
            .filter_map(|&member| {
                let best = self
                    .participants
                    .get(&member)?
                    .rewards
                    .iter()
                    .filter_map(|id| self.rewards.get(id))
                    .filter(|reward| reward.contest == Some(contest))
                    .max_by_key(|reward| reward.rank())?;
                Some(Position {
                    participant: member,
                    reward: best.id,
                    rank: best.rank(),
                })
            })
            .collect();

        positions.sort_by(|a, b| b.rank.cmp(&a.rank));
        positions
    }

    pub fn winner(&self, contest: ContestId) -> Option<Position> {
        self.positions(contest).into_iter().next()
    }

    // ---- rewards ----

    pub fn reward(&self, id: RewardId) -> Option<&Reward> {
        self.rewards.get(&id)
    }

    /// Rewards in creation order.
    pub fn rewards(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.values()
    }

    pub fn reward_count(&self) -> usize {
        self.rewards.len()
    }

    // ---- wants relation ----

    /// Returns true if `holder` owns a reward bound to a contest `other` joined.
    pub fn wants(&self, holder: ParticipantId, other: ParticipantId) -> bool {
        self.wants_where(holder, other, |_| true)
    }

    /// Like [`wants`](Self::wants), restricted to rewards bound to `contest`
    /// and/or at or above `min_quality`.
    pub fn wants_in(
        &self,
        holder: ParticipantId,
        other: ParticipantId,
        contest: Option<ContestId>,
        min_quality: Option<QualityTier>,
    ) -> bool {
        self.wants_where(holder, other, |reward| {
            contest.map_or(true, |c| reward.contest == Some(c))
                && min_quality.map_or(true, |q| reward.quality >= q)
        })
    }

    /// Like [`wants`](Self::wants), ignoring the rewards in `ignored`.
    pub fn wants_ignoring(
        &self,
        holder: ParticipantId,
        other: ParticipantId,
        ignored: &[RewardId],
    ) -> bool {
        self.wants_where(holder, other, |reward| !ignored.contains(&reward.id))
    }

    fn wants_where<F>(&self, holder: ParticipantId, other: ParticipantId, keep: F) -> bool
    where
        F: Fn(&Reward) -> bool,
    {
        let (Some(holder), Some(other)) =
            (self.participants.get(&holder), self.participants.get(&other))
        else {
            return false;
        };

        holder
            .rewards
            .iter()
            .filter_map(|id| self.rewards.get(id))
            .filter(|reward| keep(reward))
            .any(|reward| {
                reward
                    .contest
                    .is_some_and(|contest| other.contests.contains(&contest))
            })
    }

    // ---- unrecorded mutators ----

    /// Creates an unowned, unbound reward.
    pub fn mint_reward(&mut self, quality: QualityTier) -> RewardId {
        let id = self.ids.next_reward();
        self.rewards.insert(id, Reward::new(id, quality));
        id
    }

    /// Removes a reward from the store and from its owner's reward list.
    pub fn remove_reward(&mut self, id: RewardId) -> Option<Reward> {
        let reward = self.rewards.remove(&id)?;
        if let Some(owner) = reward.owner.and_then(|p| self.participants.get_mut(&p)) {
            owner.rewards.retain(|&r| r != id);
        }
        Some(reward)
    }

    /// Puts a previously removed reward back into the store.
    ///
    /// If the reward names an owner that does not list it, it is appended to
    /// that owner's reward list.
    pub fn restore_reward(&mut self, reward: Reward) {
        if let Some(owner) = reward.owner.and_then(|p| self.participants.get_mut(&p)) {
            if !owner.rewards.contains(&reward.id) {
                owner.rewards.push(reward.id);
            }
        }
        self.rewards.insert(reward.id, reward);
    }

    /// Moves `reward` to `new_owner`, returning where it was before.
    ///
    /// The reward is first removed from its previous owner's list, then added
    /// to the new owner's list. Giving a reward to its current owner, or to a
    /// participant that does not exist, changes nothing.
    pub fn transfer_ownership(
        &mut self,
        reward: RewardId,
        new_owner: Option<ParticipantId>,
    ) -> Ownership {
        let Some(current) = self.rewards.get(&reward).map(|r| r.owner) else {
            return Ownership::default();
        };
        let position = current
            .and_then(|p| self.participants.get(&p))
            .and_then(|p| p.rewards.iter().position(|&r| r == reward));
        let previous = Ownership {
            owner: current,
            position,
        };

        if current == new_owner {
            return previous;
        }
        if new_owner.is_some_and(|p| !self.participants.contains_key(&p)) {
            return previous;
        }

        if let (Some(old), Some(index)) = (current, position) {
            if let Some(old) = self.participants.get_mut(&old) {
                old.rewards.remove(index);
            }
        }
        if let Some(entry) = self.rewards.get_mut(&reward) {
            entry.owner = new_owner;
        }
        if let Some(new) = new_owner.and_then(|p| self.participants.get_mut(&p)) {
            new.rewards.push(reward);
        }
        previous
    }

    /// Gives `reward` to `participant`.
    pub fn assign(&mut self, reward: RewardId, participant: ParticipantId) -> Ownership {
        self.transfer_ownership(reward, Some(participant))
    }

    /// Takes `reward` away from `participant`.
    ///
    /// Returns false, changing nothing, if `participant` does not own it.
    pub fn unassign(&mut self, reward: RewardId, participant: ParticipantId) -> bool {
        if self.rewards.get(&reward).and_then(|r| r.owner) != Some(participant) {
            return false;
        }
        self.transfer_ownership(reward, None);
        true
    }

    /// Reverses a [`transfer_ownership`](Self::transfer_ownership).
    pub fn restore_ownership(&mut self, reward: RewardId, previous: Ownership) {
        let Some(current) = self.rewards.get(&reward).map(|r| r.owner) else {
            return;
        };
        if let Some(holder) = current.and_then(|p| self.participants.get_mut(&p)) {
            holder.rewards.retain(|&r| r != reward);
        }
        if let Some(entry) = self.rewards.get_mut(&reward) {
            entry.owner = previous.owner;
        }
        if let Some(owner) = previous.owner.and_then(|p| self.participants.get_mut(&p)) {
            if !owner.rewards.contains(&reward) {
                let index = previous
                    .position
                    .map_or(owner.rewards.len(), |i| i.min(owner.rewards.len()));
                owner.rewards.insert(index, reward);
            }
        }
    }

    /// Binds `reward` to `contest`, returning the previous binding.
    pub fn bind_contest(
        &mut self,
        reward: RewardId,
        contest: Option<ContestId>,
    ) -> Option<ContestId> {
        let entry = self.rewards.get_mut(&reward)?;
        std::mem::replace(&mut entry.contest, contest)
    }

    /// Sets a reward's tiebreak, returning the previous value.
    pub fn set_tiebreak(&mut self, reward: RewardId, tiebreak: u32) -> u32 {
        self.rewards
            .get_mut(&reward)
            .map_or(0, |entry| std::mem::replace(&mut entry.tiebreak, tiebreak))
    }

    /// Creates a contest over `members` and joins each member to it.
    ///
    /// Unknown participants are left out of the contest.
    pub fn open_contest(&mut self, members: &[ParticipantId]) -> ContestId {
        let id = self.ids.next_contest();
        let mut participants = Vec::with_capacity(members.len());
        for &member in members {
            if let Some(participant) = self.participants.get_mut(&member) {
                if !participant.contests.contains(&id) {
                    participant.contests.push(id);
                }
                participants.push(member);
            }
        }
        self.contests.insert(id, Contest { id, participants });
        id
    }

    /// Removes a contest and drops it from every member's contest list.
    ///
    /// Rewards still bound to the contest keep their binding; callers unbind
    /// them first.
    pub fn close_contest(&mut self, id: ContestId) -> Option<Contest> {
        let contest = self.contests.remove(&id)?;
        for member in &contest.participants {
            if let Some(participant) = self.participants.get_mut(member) {
                participant.contests.retain(|&c| c != id);
            }
        }
        Some(contest)
    }
}
