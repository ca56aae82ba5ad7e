//! Depth-limited best-first search over speculatively simulated futures
//!
//! From a known position, look for the most interesting reachable state and
//! how to get there. Each recursion level simulates every legal action in
//! all four walk/reversed combinations, scores the results, then expands a
//! skill-dependent window of the best branches one level deeper. Snapshot
//! and restore bracket every speculative step, so the input state is
//! bit-identical when the search returns.

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::actions::{ActionClass, ActionId, MovementCatalog};
use crate::ai::heuristics::{positional_safety, role_score, select_role, ActorRole};
use crate::ai::plan::{ActionCandidate, Plan, PlannerBudget};
use crate::ai::simulate::simulate;
use crate::ai::snapshot::GameSnapshot;
use crate::arena::GameState;
use crate::core::config::ArenaConfig;
use crate::core::types::ActorIndex;

/// The four walk/reversed combinations tried for every action
const COMBINATIONS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// One scored branch at a recursion level
struct Branch {
    score: f32,
    candidate: ActionCandidate,
    /// World state right after the candidate's simulated quantum
    after: GameSnapshot,
}

/// The search engine; cheap to construct, holds only configuration
pub struct Planner<'a> {
    cfg: &'a ArenaConfig,
    catalog: &'a MovementCatalog,
}

impl<'a> Planner<'a> {
    pub fn new(cfg: &'a ArenaConfig, catalog: &'a MovementCatalog) -> Self {
        Self { cfg, catalog }
    }

    pub fn config(&self) -> &ArenaConfig {
        self.cfg
    }

    /// Compute the best plan for `actor`
    ///
    /// Deterministic given identical inputs. The state is mutated during
    /// the search but restored before returning.
    pub fn plan(&self, state: &mut GameState, actor: ActorIndex, budget: &PlannerBudget) -> Plan {
        let mut nodes = 0u32;
        let (score, actions) =
            self.search(state, actor, budget.max_depth, budget.skill_level, &mut nodes);
        debug!(
            actor,
            score,
            steps = actions.len(),
            nodes,
            "plan computed"
        );
        Plan { score, actions }
    }

    fn search(
        &self,
        state: &mut GameState,
        actor: ActorIndex,
        depth: u32,
        skill: usize,
        nodes: &mut u32,
    ) -> (f32, Vec<ActionCandidate>) {
        let role = select_role(state, self.cfg, actor);

        // A fully passive pursuer just stays in place, at zero cost
        if role == ActorRole::Pursuer && state.actors[actor].passive {
            let a = &state.actors[actor];
            return (
                0.0,
                vec![ActionCandidate {
                    scheduled_time: state.clock,
                    action: ActionId::Static,
                    reversed: a.reversed,
                    walk: false,
                }],
            );
        }

        let class = match role {
            ActorRole::Pursuer => ActionClass::Displacement,
            ActorRole::Combatant => ActionClass::Combat,
        };
        let actions = self
            .catalog
            .legal_actions_of_class(state.actors[actor].animation, class);
        if actions.is_empty() {
            return (0.0, Vec::new());
        }

        let before = GameSnapshot::capture(state);
        let scheduled_time = state.clock;

        let mut branches: Vec<Branch> = Vec::with_capacity(actions.len() * 4);
        for action in actions {
            for (walk, reversed) in COMBINATIONS {
                let candidate = ActionCandidate {
                    scheduled_time,
                    action,
                    reversed,
                    walk,
                };
                simulate(state, self.cfg, actor, &candidate);
                *nodes += 1;
                let score = role_score(state, actor, role) + positional_safety(state, actor);
                trace!(actor, %action, walk, reversed, score, "branch simulated");
                branches.push(Branch {
                    score,
                    candidate,
                    after: GameSnapshot::capture(state),
                });
                before.restore(state);
            }
        }

        branches.sort_by_key(|b| OrderedFloat(b.score));

        let mut results: Vec<(f32, Vec<ActionCandidate>)> = Vec::new();
        if depth == 0 || *nodes >= self.cfg.node_budget {
            // Keep the two best single-action plans as a tie buffer; the
            // minimum below picks between them
            for b in branches.iter().take(2) {
                results.push((b.score, vec![b.candidate]));
            }
        } else {
            let window = if branches.len() >= 5 {
                &branches[5usize.saturating_sub(skill)..5]
            } else {
                &branches[branches.len().saturating_sub(skill)..]
            };

            for b in window {
                b.after.restore(state);
                let (score, continuation) = self.search(state, actor, depth - 1, skill, nodes);
                let mut plan = Vec::with_capacity(1 + continuation.len());
                plan.push(b.candidate);
                plan.extend(continuation);
                results.push((b.score + score, plan));
            }
        }

        before.restore(state);

        // First minimum wins on ties
        results
            .into_iter()
            .min_by_key(|(score, _)| OrderedFloat(*score))
            .unwrap_or((0.0, Vec::new()))
    }
}
