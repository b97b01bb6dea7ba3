//! Plain-text report of a finished population.

use std::fmt::Write as _;
use std::io::{self, Write};

use num_format::{Locale, ToFormattedString};

use cardtrade_core::{ContestId, ParticipantId, Population, RewardId};
use cardtrade_solver::SearchStatistics;

/// One line describing a reward: quality, contest, owner and tiebreak.
pub fn describe_reward(population: &Population, id: RewardId) -> String {
    let Some(reward) = population.reward(id) else {
        return format!("{id}: gone");
    };
    format!(
        "{id}: {} │ {} │ {} │ tiebreak {}",
        reward.quality(),
        reward
            .contest()
            .map_or_else(|| "no contest".to_string(), |c| c.to_string()),
        reward
            .owner()
            .map_or_else(|| "unowned".to_string(), |p| p.to_string()),
        reward.tiebreak(),
    )
}

/// One line describing a participant's rewards and contests.
pub fn describe_participant(population: &Population, id: ParticipantId) -> String {
    let Some(participant) = population.participant(id) else {
        return format!("{id}: unknown");
    };
    let rewards = participant
        .rewards()
        .iter()
        .filter_map(|&r| population.reward(r))
        .map(|r| format!("{} {}", r.quality(), r.id().get()))
        .collect::<Vec<_>>()
        .join(", ");
    let contests = participant
        .contests()
        .iter()
        .map(|c| c.get().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{id}: rewards [{rewards}] │ contests [{contests}]")
}

/// One line describing a contest's lineup and winner.
pub fn describe_contest(population: &Population, id: ContestId) -> String {
    let Some(contest) = population.contest(id) else {
        return format!("{id}: closed");
    };
    let members = contest
        .participants()
        .iter()
        .map(|p| p.get().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let winner = match population.winner(id) {
        Some(position) => format!(
            "winner {} ({} #{})",
            position.participant, position.rank.quality, position.rank.tiebreak
        ),
        None => "no winner".to_string(),
    };
    format!("{id}: participants [{members}] │ {winner}")
}

/// Participants, then `contests`, then `rewards`, one line each, with a blank
/// line between sections.
pub fn format_report(
    population: &Population,
    contests: &[ContestId],
    rewards: &[RewardId],
) -> String {
    let mut out = String::new();
    for participant in population.participants() {
        let _ = writeln!(out, "{}", describe_participant(population, participant.id()));
    }
    out.push('\n');
    for &contest in contests {
        let _ = writeln!(out, "{}", describe_contest(population, contest));
    }
    out.push('\n');
    for &reward in rewards {
        let _ = writeln!(out, "{}", describe_reward(population, reward));
    }
    out
}

/// Writes [`format_report`] to stdout.
pub fn print_report(population: &Population, contests: &[ContestId], rewards: &[RewardId]) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = write!(stdout, "{}", format_report(population, contests, rewards));
    let _ = stdout.flush();
}

/// One line summarizing search effort.
pub fn format_statistics(stats: &SearchStatistics) -> String {
    let n = |value: u64| value.to_formatted_string(&Locale::en);
    format!(
        "{} allocations ({} already solved, {} exhausted) │ {} cycles tried │ {} rolled back │ \
         {} rewards minted │ {} duplicates dropped │ {} solve passes ({} rejected) │ \
         {} duplicate batches │ {} batches committed",
        n(stats.allocation_requests),
        n(stats.already_solved),
        n(stats.exhausted),
        n(stats.cycles_tried),
        n(stats.rollbacks),
        n(stats.rewards_minted),
        n(stats.duplicates_dropped),
        n(stats.solve_passes),
        n(stats.solve_passes_rejected),
        n(stats.duplicate_batches),
        n(stats.batches_committed),
    )
}
