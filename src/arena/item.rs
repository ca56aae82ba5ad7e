//! Items lying around the arena

use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Grants the `upgraded` flag for a while
    Upgrade,
    /// Removes accumulated damage
    Heal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Vec2,
    /// False once picked up
    pub present: bool,
}

impl Item {
    pub fn new(kind: ItemKind, position: Vec2) -> Self {
        Self { kind, position, present: true }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, 16.0, 16.0)
    }
}
