//! Move system for modifying the population.
//!
//! Moves are the changes the allocation solver tries during search:
//! - `CycleMove` - hands one new reward to each member of a trade cycle
//! - `DiscardMove` - drops a reward the owner already holds an equivalent of
//!
//! Undo is handled by `RecordingDirector`, not by moves returning undo data.

mod cycle;
mod discard;

use std::fmt::Debug;

use cardtrade_core::ParticipantId;

use crate::director::PopulationDirector;

pub use cycle::CycleMove;
pub use discard::DiscardMove;

/// A change to the population that registers its own undo.
///
/// # Implementation Notes
/// - Moves should be lightweight
/// - Wrap the director in a `RecordingDirector` to enable `undo_changes()`
pub trait Move: Debug {
    /// Returns true if this move can be executed in the current state.
    fn is_doable(&self, director: &dyn PopulationDirector) -> bool;

    /// Executes this move through the director.
    fn do_move(&self, director: &mut dyn PopulationDirector);

    /// Returns the participants affected by this move.
    fn participants(&self) -> &[ParticipantId];
}
