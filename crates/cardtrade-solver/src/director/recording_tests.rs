// Tests for RecordingDirector.

use cardtrade_core::{Population, QualityTier};

use super::*;

#[test]
fn test_undo_restores_ownership_and_store() {
    let mut population = Population::with_participants(2);
    let p = population.participant_ids();
    let before = population.clone();

    let mut recording = RecordingDirector::new(&mut population);
    let reward = recording.mint_reward(QualityTier::Silver);
    recording.transfer_ownership(reward, Some(p[0]));
    recording.transfer_ownership(reward, Some(p[1]));
    assert_eq!(recording.change_count(), 3);

    recording.undo_changes();
    assert!(recording.is_empty());
    drop(recording);

    assert_eq!(population.reward_count(), 0);
    assert!(population.participants().eq(before.participants()));
}

#[test]
fn test_noop_changes_are_not_recorded() {
    let mut population = Population::with_participants(1);
    let p = population.participant_ids();
    let reward = population.mint_reward(QualityTier::Bronze);
    population.assign(reward, p[0]);

    let mut recording = RecordingDirector::new(&mut population);
    recording.transfer_ownership(reward, Some(p[0]));
    recording.bind_contest(reward, None);
    assert!(recording.is_empty());
}

#[test]
fn test_commit_forwards_to_enclosing_recording() {
    let mut population = Population::with_participants(2);
    let p = population.participant_ids();

    let mut outer = RecordingDirector::new(&mut population);
    {
        let mut inner = RecordingDirector::new(&mut outer);
        let reward = inner.mint_reward(QualityTier::Gold);
        inner.transfer_ownership(reward, Some(p[1]));
        inner.commit();
    }
    assert_eq!(outer.change_count(), 2);
    assert_eq!(outer.population().reward_count_of(p[1]), 1);

    outer.undo_changes();
    assert_eq!(outer.population().reward_count(), 0);
    assert_eq!(outer.population().reward_count_of(p[1]), 0);
}

#[test]
fn test_inner_undo_leaves_outer_changes() {
    let mut population = Population::with_participants(2);
    let p = population.participant_ids();

    let mut outer = RecordingDirector::new(&mut population);
    let kept = outer.mint_reward(QualityTier::Bronze);
    {
        let mut inner = RecordingDirector::new(&mut outer);
        inner.transfer_ownership(kept, Some(p[0]));
        inner.mint_reward(QualityTier::Bronze);
        inner.undo_changes();
    }
    assert_eq!(outer.change_count(), 1);
    assert_eq!(outer.population().reward_count(), 1);
    assert_eq!(outer.population().reward(kept).unwrap().owner(), None);
}

#[test]
fn test_discard_is_reversible() {
    let mut population = Population::with_participants(2);
    let p = population.participant_ids();
    let contest = population.open_contest(&p);
    let first = population.mint_reward(QualityTier::Bronze);
    let second = population.mint_reward(QualityTier::Bronze);
    for reward in [first, second] {
        population.bind_contest(reward, Some(contest));
        population.assign(reward, p[0]);
    }
    let before = population.clone();

    let mut recording = RecordingDirector::new(&mut population);
    recording.discard_reward(first);
    assert_eq!(recording.population().reward_count(), 1);
    assert_eq!(
        recording.population().participant(p[0]).unwrap().rewards(),
        &[second]
    );

    recording.undo_changes();
    drop(recording);
    assert_eq!(population, before);
}

#[test]
fn test_open_contest_is_reversible() {
    let mut population = Population::with_participants(3);
    let p = population.participant_ids();

    let mut recording = RecordingDirector::new(&mut population);
    let contest = recording.open_contest(&p);
    assert!(recording
        .population()
        .participant(p[2])
        .unwrap()
        .has_joined(contest));

    recording.undo_changes();
    assert_eq!(recording.population().contest_count(), 0);
    assert!(recording
        .population()
        .participants()
        .all(|participant| participant.contests().is_empty()));
}

#[test]
fn test_drop_commits() {
    let mut population = Population::with_participants(1);
    {
        let mut recording = RecordingDirector::new(&mut population);
        recording.mint_reward(QualityTier::Bronze);
    }
    assert_eq!(population.reward_count(), 1);
}
