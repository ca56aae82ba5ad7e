//! Capture and restore of all mutable match state
//!
//! Snapshots bracket every speculative step the planner takes, so sibling
//! branches never contaminate each other and the live state is bit-identical
//! after a planning call. Level geometry is immutable during a match and is
//! deliberately not captured.

use serde::{Deserialize, Serialize};

use crate::arena::{Actor, EventsBackup, GameState, Item};
use crate::core::types::GameTime;

/// A restorable structural copy of everything that varies during simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    actors: Vec<Actor>,
    items: Vec<Item>,
    events: EventsBackup,
    clock: GameTime,
}

impl GameSnapshot {
    /// Produce a structural copy of `state`. Pure, no side effects.
    pub fn capture(state: &GameState) -> Self {
        Self {
            actors: state.actors.clone(),
            items: state.items.clone(),
            events: state.events.backup(),
            clock: state.clock,
        }
    }

    /// Overwrite `state` in place to match this snapshot.
    ///
    /// Panics if the snapshot's shape does not match the live state's:
    /// actors and items are never added or removed mid-match, so a count
    /// mismatch is a programmer error, not a recoverable condition.
    pub fn restore(&self, state: &mut GameState) {
        assert_eq!(
            state.actors.len(),
            self.actors.len(),
            "snapshot shape mismatch: actor count"
        );
        assert_eq!(
            state.items.len(),
            self.items.len(),
            "snapshot shape mismatch: item count"
        );

        state.actors.clone_from(&self.actors);
        state.items.clone_from(&self.items);
        state.events.restore(&self.events);
        state.clock = self.clock;
    }

    pub fn clock(&self) -> GameTime {
        self.clock
    }
}
