// Recording director for speculative, reversible changes.
//
// The `RecordingDirector` wraps another director and stores the undo closures
// registered by every change made through it:
//
// ```text
// let mut attempt = RecordingDirector::new(&mut population);
// cycle.do_move(&mut attempt);   // registers undo closures
// if !cycle.is_feasible(attempt.population()) {
//     attempt.undo_changes();    // runs them in reverse order
// }
// ```
//
// Recordings nest. Committing hands the undo log to the wrapped director, so
// an enclosing recording can still reverse everything.

use cardtrade_core::Population;

use super::{PopulationDirector, Undo};

/// A director wrapper that stores undo closures.
///
/// Dropping a recording without calling [`undo_changes`](Self::undo_changes)
/// commits it.
///
/// # Example
///
/// ```
/// use cardtrade_core::{Population, QualityTier};
/// use cardtrade_solver::{PopulationDirector, RecordingDirector};
///
/// let mut population = Population::with_participants(2);
/// let p = population.participant_ids();
///
/// let mut recording = RecordingDirector::new(&mut population);
/// let reward = recording.mint_reward(QualityTier::Bronze);
/// recording.transfer_ownership(reward, Some(p[0]));
/// assert_eq!(recording.population().reward_count_of(p[0]), 1);
///
/// recording.undo_changes();
/// assert_eq!(recording.population().reward_count(), 0);
/// ```
pub struct RecordingDirector<'a> {
    inner: &'a mut dyn PopulationDirector,
    undo_stack: Vec<Undo>,
}

impl<'a> RecordingDirector<'a> {
    /// Creates a new recording director wrapping `inner`.
    pub fn new(inner: &'a mut dyn PopulationDirector) -> Self {
        Self {
            inner,
            undo_stack: Vec::with_capacity(16),
        }
    }

    /// Undoes all recorded changes in reverse order.
    pub fn undo_changes(&mut self) {
        while let Some(undo) = self.undo_stack.pop() {
            undo(self.inner.population_mut());
        }
    }

    /// Keeps all recorded changes, handing their undo closures to the wrapped
    /// director.
    pub fn commit(mut self) {
        self.forward();
    }

    /// Returns the number of recorded undo closures.
    pub fn change_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns true if there are no recorded changes.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    fn forward(&mut self) {
        for undo in self.undo_stack.drain(..) {
            self.inner.register_undo(undo);
        }
    }
}

impl PopulationDirector for RecordingDirector<'_> {
    fn population(&self) -> &Population {
        self.inner.population()
    }

    fn population_mut(&mut self) -> &mut Population {
        self.inner.population_mut()
    }

    fn register_undo(&mut self, undo: Undo) {
        self.undo_stack.push(undo);
    }
}

impl Drop for RecordingDirector<'_> {
    fn drop(&mut self) {
        self.forward();
    }
}

impl std::fmt::Debug for RecordingDirector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingDirector")
            .field("change_count", &self.undo_stack.len())
            .finish()
    }
}
