//! Hand-tuned scoring of simulated states
//!
//! Every score is lower-is-better; the planner minimizes the sum of a
//! role-specific score and the positional safety score. Weights are fixed
//! tuning constants; the terms are independent and order does not matter.

use crate::arena::{GameState, Level};
use crate::core::config::ArenaConfig;
use crate::core::types::{ActorIndex, Vec2};

/// Stance an actor takes for one planning call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    /// Far from everyone: close the distance using displacement actions
    Pursuer,
    /// In range: fight using combat actions
    Combatant,
}

/// Penalty for leaving the playable rectangle
const OFF_LEVEL_PENALTY: f32 = 1000.0;
/// Penalty for not being invincible
const VULNERABLE_PENALTY: f32 = 200.0;
/// Penalty for being airborne; keeps the search conservative about jumps
const AIRBORNE_PENALTY: f32 = 63.0;
/// Penalty for not holding an upgrade
const NOT_UPGRADED_PENALTY: f32 = 100.0;
/// Penalty for having fallen below every platform
const UNDER_EVERYTHING_PENALTY: f32 = 1000.0;
/// Penalty for not standing vertically over any platform
const NO_PLATFORM_BELOW_PENALTY: f32 = 30.0;

/// True if `pos` is lower than every platform in the level
fn under_lowest_platform(level: &Level, pos: Vec2) -> bool {
    level.platforms.iter().all(|p| p.top() <= pos.y)
}

/// True if `pos` is vertically over some platform (which is not the same
/// as merely not being lowest)
fn over_some_platform(level: &Level, pos: Vec2) -> bool {
    level
        .platforms
        .iter()
        .any(|p| p.top() > pos.y && p.x < pos.x && pos.x < p.right())
}

/// Additive positional-danger score for one actor, lower is safer
pub fn positional_safety(state: &GameState, actor: ActorIndex) -> f32 {
    let a = &state.actors[actor];
    let level = &state.level;
    let pos = a.position;

    let mut score = 0.0;
    if !a.rect().intersects(&level.rect) {
        score += OFF_LEVEL_PENALTY;
    }
    if !a.invincible {
        score += VULNERABLE_PENALTY;
    }
    if !a.on_ground {
        score += AIRBORNE_PENALTY;
    }
    if !a.upgraded {
        score += NOT_UPGRADED_PENALTY;
    }
    if under_lowest_platform(level, pos) {
        score += UNDER_EVERYTHING_PENALTY;
    }
    if !over_some_platform(level, pos) {
        score += NO_PLATFORM_BELOW_PENALTY;
    }
    score
}

/// Distance to the nearest living opponent, lower means closing in.
/// Infinite when nobody else is left.
pub fn pursuit_score(state: &GameState, actor: ActorIndex) -> f32 {
    let a = &state.actors[actor];
    state
        .opponents_of(actor)
        .into_iter()
        .map(|i| a.distance_to(&state.actors[i]))
        .fold(f32::INFINITY, f32::min)
}

/// Fighting value of a state, lower is better: keep own damage low,
/// take opponents' lives, raise their damage.
pub fn combat_score(state: &GameState, actor: ActorIndex) -> f32 {
    let a = &state.actors[actor];
    let opponents = state.opponents_of(actor);

    let their_lives: u32 = opponents.iter().map(|&i| state.actors[i].lives).sum();
    let their_percents: f32 = opponents.iter().map(|&i| state.actors[i].percents).sum();

    a.percents + their_lives as f32 * 100.0 - their_percents
}

/// Pick the role for one planning call from the distance to the nearest
/// opponent. Strictly greater than the threshold pursues; at exactly the
/// threshold the actor already fights.
pub fn select_role(state: &GameState, cfg: &ArenaConfig, actor: ActorIndex) -> ActorRole {
    if pursuit_score(state, actor) > cfg.pursuit_distance {
        ActorRole::Pursuer
    } else {
        ActorRole::Combatant
    }
}

/// Role-specific component of a branch score
pub fn role_score(state: &GameState, actor: ActorIndex, role: ActorRole) -> f32 {
    match role {
        ActorRole::Pursuer => pursuit_score(state, actor),
        ActorRole::Combatant => combat_score(state, actor),
    }
}
