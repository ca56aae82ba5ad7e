//! The arena world: actors, level geometry, items, timed events and the
//! per-frame match pipeline the AI core simulates against

pub mod actor;
pub mod events;
pub mod game;
pub mod item;
pub mod level;

pub use actor::Actor;
pub use events::{EventEffect, EventsBackup, TimedEvents};
pub use game::GameState;
pub use item::{Item, ItemKind};
pub use level::Level;
