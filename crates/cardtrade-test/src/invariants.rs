//! Assertions over the ownership graph.

use cardtrade_core::{Participant, Population};

/// Asserts that every reward sits in exactly its recorded owner's list and
/// that every listed reward names that owner.
pub fn assert_ownership_consistent(population: &Population) {
    for reward in population.rewards() {
        let holders: Vec<_> = population
            .participants()
            .filter(|p| p.owns(reward.id()))
            .map(Participant::id)
            .collect();
        match reward.owner() {
            Some(owner) => assert_eq!(holders, vec![owner], "{} has wrong holders", reward.id()),
            None => assert!(holders.is_empty(), "{} is unowned but held", reward.id()),
        }
    }
    for participant in population.participants() {
        for &id in participant.rewards() {
            let reward = population
                .reward(id)
                .unwrap_or_else(|| panic!("{} holds unknown {}", participant.id(), id));
            assert_eq!(reward.owner(), Some(participant.id()));
        }
    }
}

/// Asserts that two populations hold the same participants, contests and
/// rewards, ignoring how far their identity allocators have advanced.
pub fn assert_same_holdings(actual: &Population, expected: &Population) {
    assert!(
        actual.participants().eq(expected.participants()),
        "participants differ"
    );
    assert!(actual.contests().eq(expected.contests()), "contests differ");
    assert!(actual.rewards().eq(expected.rewards()), "rewards differ");
}
