//! Search statistics.
//!
//! Plain counters the allocation solver, solve pass and batch builder bump as
//! they work. One value is threaded through a whole `add_contests` run.

use std::time::{Duration, Instant};

/// Counters for one batch construction run.
///
/// # Example
///
/// ```
/// use cardtrade_solver::SearchStatistics;
///
/// let mut stats = SearchStatistics::default();
/// stats.start();
/// stats.record_cycle(false);
/// stats.record_cycle(true);
///
/// assert_eq!(stats.cycles_tried, 2);
/// assert_eq!(stats.rollbacks, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStatistics {
    start_time: Option<Instant>,
    /// Allocation solver invocations.
    pub allocation_requests: u64,
    /// Invocations satisfied by an existing trade cycle.
    pub already_solved: u64,
    /// Candidate cycles speculatively applied.
    pub cycles_tried: u64,
    /// Candidate cycles rolled back as infeasible.
    pub rollbacks: u64,
    /// Invocations that ran out of candidates.
    pub exhausted: u64,
    /// Rewards minted, including those later rolled back.
    pub rewards_minted: u64,
    /// Minted rewards dropped because the owner held an equivalent.
    pub duplicates_dropped: u64,
    /// Population-wide solve passes run.
    pub solve_passes: u64,
    /// Solve passes rolled back because one allocation failed.
    pub solve_passes_rejected: u64,
    /// Candidate batches skipped for repeating a contest lineup.
    pub duplicate_batches: u64,
    /// Batches kept.
    pub batches_committed: u64,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Elapsed time since [`start`](Self::start), zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_allocation_request(&mut self) {
        self.allocation_requests += 1;
    }

    pub fn record_already_solved(&mut self) {
        self.already_solved += 1;
    }

    /// Records a candidate cycle and whether it was kept.
    pub fn record_cycle(&mut self, accepted: bool) {
        self.cycles_tried += 1;
        if !accepted {
            self.rollbacks += 1;
        }
    }

    pub fn record_exhausted(&mut self) {
        self.exhausted += 1;
    }

    pub fn record_minted(&mut self, count: usize) {
        self.rewards_minted += count as u64;
    }

    pub fn record_duplicate_dropped(&mut self) {
        self.duplicates_dropped += 1;
    }

    /// Records a solve pass and whether it succeeded.
    pub fn record_solve_pass(&mut self, accepted: bool) {
        self.solve_passes += 1;
        if !accepted {
            self.solve_passes_rejected += 1;
        }
    }

    pub fn record_duplicate_batch(&mut self) {
        self.duplicate_batches += 1;
    }

    pub fn record_batch_committed(&mut self) {
        self.batches_committed += 1;
    }

    /// Fraction of tried cycles that were kept.
    pub fn cycle_acceptance_rate(&self) -> f64 {
        if self.cycles_tried == 0 {
            0.0
        } else {
            (self.cycles_tried - self.rollbacks) as f64 / self.cycles_tried as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_rate() {
        let mut stats = SearchStatistics::new();
        assert_eq!(stats.cycle_acceptance_rate(), 0.0);

        stats.record_cycle(true);
        stats.record_cycle(false);
        stats.record_cycle(false);
        stats.record_cycle(true);
        assert_eq!(stats.cycle_acceptance_rate(), 0.5);
    }

    #[test]
    fn test_solve_pass_counters() {
        let mut stats = SearchStatistics::new();
        stats.record_solve_pass(true);
        stats.record_solve_pass(false);
        assert_eq!(stats.solve_passes, 2);
        assert_eq!(stats.solve_passes_rejected, 1);
    }

    #[test]
    fn test_elapsed_before_start() {
        let stats = SearchStatistics::new();
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }
}
