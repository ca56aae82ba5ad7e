//! Level geometry: playable rectangle and platforms
//!
//! Geometry is immutable for the lifetime of a match, so snapshots never
//! capture it.

use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// The playable rectangle; leaving it (plus the configured margin)
    /// costs a life
    pub rect: Rect,
    /// Platform rectangles actors can stand on
    pub platforms: Vec<Rect>,
    /// Where actors enter the match and respawn
    pub entry_points: Vec<Vec2>,
}

impl Level {
    /// A small symmetric arena used by the demo binary and tests:
    /// one wide floor platform and two raised side platforms.
    pub fn default_arena() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, 800.0, 600.0),
            platforms: vec![
                Rect::new(100.0, 450.0, 600.0, 20.0),
                Rect::new(120.0, 300.0, 160.0, 16.0),
                Rect::new(520.0, 300.0, 160.0, 16.0),
            ],
            entry_points: vec![
                Vec2::new(200.0, 420.0),
                Vec2::new(600.0, 420.0),
                Vec2::new(300.0, 270.0),
                Vec2::new(500.0, 270.0),
            ],
        }
    }

    pub fn entry_point(&self, slot: usize) -> Vec2 {
        if self.entry_points.is_empty() {
            return Vec2::new(self.rect.width / 2.0, self.rect.height / 2.0);
        }
        self.entry_points[slot % self.entry_points.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_wrap() {
        let level = Level::default_arena();
        let n = level.entry_points.len();
        assert_eq!(level.entry_point(0), level.entry_point(n));
    }

    #[test]
    fn test_platforms_inside_level() {
        let level = Level::default_arena();
        for p in &level.platforms {
            assert!(level.rect.intersects(p));
        }
    }
}
