//! Per-actor planning scheduler
//!
//! Decides when each computer-controlled actor replans, caches the current
//! plan, and applies one due action per tick to the live actor. This is the
//! only place where planning output touches live state.

use ahash::AHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::ai::plan::{ActionCandidate, PlannerBudget};
use crate::ai::planner::Planner;
use crate::arena::GameState;
use crate::core::types::{ActorIndex, GameTime};

/// Scheduler state for all AI-driven actors of a match
pub struct AiController {
    /// Cached plan per actor, consumed head-first
    plans: AHashMap<ActorIndex, Vec<ActionCandidate>>,
    /// Earliest clock value at which each actor may replan
    next_update: AHashMap<ActorIndex, GameTime>,
    budget: PlannerBudget,
    /// Drives only the replan jitter; planning itself is deterministic
    rng: ChaCha8Rng,
}

impl AiController {
    pub fn new(budget: PlannerBudget) -> Self {
        Self::with_seed(budget, 42)
    }

    /// Create with a specific RNG seed for deterministic behavior
    pub fn with_seed(budget: PlannerBudget, seed: u64) -> Self {
        Self {
            plans: AHashMap::new(),
            next_update: AHashMap::new(),
            budget,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Run one scheduling tick for `actor`
    ///
    /// Replans when the cached plan has run dry and the jitter window has
    /// passed, then applies the head action if it is due. An empty plan
    /// no-ops: an idle actor is an acceptable failure mode, a corrupted
    /// live state is not.
    pub fn update(&mut self, planner: &Planner<'_>, state: &mut GameState, actor: ActorIndex) {
        let clock = state.clock;

        // Cached plan whose next action is still in the future: nothing to do
        if let Some(plan) = self.plans.get(&actor) {
            if plan.first().is_some_and(|c| c.scheduled_time > clock) {
                return;
            }
        }

        let due_for_replan = self
            .next_update
            .get(&actor)
            .map_or(true, |t| *t <= clock);
        if due_for_replan {
            // Jitter desynchronizes replanning across many actors
            let (lo, hi) = planner.config().replan_jitter;
            let jitter = self.rng.gen_range(lo..=hi);
            self.next_update.insert(actor, clock + jitter);

            let plan = planner.plan(state, actor, &self.budget);
            if plan.is_empty() {
                debug!(actor, "no legal actions, staying idle this tick");
                return;
            }
            self.plans.insert(actor, plan.actions);
        }

        // Apply the head action if its scheduled time has elapsed
        if let Some(plan) = self.plans.get_mut(&actor) {
            if plan.first().is_some_and(|c| c.scheduled_time <= clock) {
                let candidate = plan.remove(0);
                apply_to_live_actor(planner, state, actor, &candidate);
            }
        }
    }

    /// Number of actions left in an actor's cached plan
    pub fn pending_actions(&self, actor: ActorIndex) -> usize {
        self.plans.get(&actor).map_or(0, Vec::len)
    }
}

fn apply_to_live_actor(
    planner: &Planner<'_>,
    state: &mut GameState,
    actor: ActorIndex,
    candidate: &ActionCandidate,
) {
    let cfg = planner.config();
    let a = &mut state.actors[actor];
    a.reversed = candidate.reversed;
    a.walking_speed = if candidate.walk { cfg.walk_speed } else { 0.0 };
    a.change_animation(candidate.action, cfg);
    debug!(actor, action = %candidate.action, walk = candidate.walk, "applied plan action");
}
