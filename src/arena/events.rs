//! Timed events: state changes scheduled for a future clock value
//!
//! A lot of match mechanics run through here (invincibility windows,
//! upgrade expiry), so the queue exposes its own backup/restore and the
//! snapshot layer includes it transitively.

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorIndex, GameTime};

/// What a timed event does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventEffect {
    EndInvincibility { actor: ActorIndex },
    EndUpgrade { actor: ActorIndex },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Clock value at which the effect fires
    pub at: GameTime,
    pub effect: EventEffect,
}

/// Pending timed events, ordered by insertion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedEvents {
    events: Vec<TimedEvent>,
}

/// Opaque saved queue state, restorable with [`TimedEvents::restore`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsBackup(Vec<TimedEvent>);

impl TimedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: GameTime, effect: EventEffect) {
        self.events.push(TimedEvent { at, effect });
    }

    /// Remove and return every effect due at or before `now`, in schedule order
    pub fn take_due(&mut self, now: GameTime) -> Vec<EventEffect> {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.events.iter().copied().partition(|e| e.at <= now);
        self.events = pending;
        due.into_iter().map(|e| e.effect).collect()
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn backup(&self) -> EventsBackup {
        EventsBackup(self.events.clone())
    }

    pub fn restore(&mut self, backup: &EventsBackup) {
        self.events = backup.0.clone();
    }
}
