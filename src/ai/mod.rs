//! Decision engine for computer-controlled actors
//!
//! Plans movement/attack sequences by searching over speculatively
//! simulated futures: snapshot the world, try an action for one time
//! quantum, score the result, restore, recurse on the best branches.

pub mod controller;
pub mod heuristics;
pub mod plan;
pub mod planner;
pub mod simulate;
pub mod snapshot;

pub use controller::AiController;
pub use heuristics::ActorRole;
pub use plan::{ActionCandidate, Plan, PlannerBudget};
pub use planner::Planner;
pub use snapshot::GameSnapshot;
