//! Speculative one-quantum simulation of an action candidate
//!
//! The state passed in must already be isolated (a private copy or a
//! snapshot-bracketed live state); all effects are confined to it.

use crate::ai::plan::ActionCandidate;
use crate::arena::GameState;
use crate::core::config::ArenaConfig;
use crate::core::types::ActorIndex;

/// Apply `candidate` to the actor and advance the whole world by one fixed
/// time quantum, using the same per-frame update as live gameplay.
pub fn simulate(
    state: &mut GameState,
    cfg: &ArenaConfig,
    actor: ActorIndex,
    candidate: &ActionCandidate,
) {
    let a = &mut state.actors[actor];
    a.reversed = candidate.reversed;
    a.walking_speed = if candidate.walk { cfg.walk_speed } else { 0.0 };
    a.change_animation(candidate.action, cfg);

    state.update(cfg, cfg.sim_timestep);
}
