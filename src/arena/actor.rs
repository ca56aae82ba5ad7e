//! Actor state component
//!
//! Everything here is captured by [`crate::ai::GameSnapshot`], so the struct
//! derives structural equality.

use serde::{Deserialize, Serialize};

use crate::actions::ActionId;
use crate::core::config::ArenaConfig;
use crate::core::types::{Rect, Vec2};

/// A controllable character in a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    /// Center of the bounding box
    pub position: Vec2,
    /// Residual velocity (knockback, gravity); walking is tracked separately
    pub velocity: Vec2,
    /// Bounding box dimensions
    pub size: Vec2,
    /// Facing left when true
    pub reversed: bool,
    /// Horizontal locomotion speed magnitude, set by walk actions
    pub walking_speed: f32,
    /// Current animation, which is also the legality context for the next action
    pub animation: ActionId,
    /// Remaining animation time, `None` for looping animations
    pub animation_time_left: Option<f32>,
    pub on_ground: bool,
    /// Accumulated damage, in percent
    pub percents: f32,
    pub lives: u32,
    pub invincible: bool,
    pub upgraded: bool,
    /// Fully passive marker: when pursuing, this actor just stays in place
    pub passive: bool,
    /// Respawn point after losing a life
    pub entry_point: Vec2,
}

impl Actor {
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Self {
            name: name.into(),
            position,
            velocity: Vec2::default(),
            size: Vec2::new(24.0, 36.0),
            reversed: false,
            walking_speed: 0.0,
            animation: ActionId::Static,
            animation_time_left: None,
            on_ground: false,
            percents: 0.0,
            lives: 3,
            invincible: false,
            upgraded: false,
            passive: false,
            entry_point: position,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, self.size.x, self.size.y)
    }

    pub fn distance_to(&self, other: &Actor) -> f32 {
        self.position.distance(&other.position)
    }

    pub fn alive(&self) -> bool {
        self.lives > 0
    }

    /// Switch the animation state machine to `action`
    ///
    /// Jump animations carry their upward impulse with them, so speculative
    /// simulation and live play launch the actor identically.
    pub fn change_animation(&mut self, action: ActionId, cfg: &ArenaConfig) {
        self.animation = action;
        self.animation_time_left = action.duration();

        match action {
            ActionId::Jump => self.velocity.y = -cfg.jump_impulse,
            ActionId::SecondJump => self.velocity.y = -cfg.jump_impulse * 0.85,
            ActionId::RisingSmash => self.velocity.y = -cfg.jump_impulse * 0.6,
            _ => {}
        }
    }

    /// Signed facing direction: +1 right, -1 left
    pub fn facing(&self) -> f32 {
        if self.reversed {
            -1.0
        } else {
            1.0
        }
    }

    /// Reset after losing a life: back to the entry point, clean slate
    pub fn respawn(&mut self) {
        self.position = self.entry_point;
        self.velocity = Vec2::default();
        self.walking_speed = 0.0;
        self.animation = ActionId::Static;
        self.animation_time_left = None;
        self.percents = 0.0;
        self.upgraded = false;
        self.on_ground = false;
        self.invincible = true;
    }
}
