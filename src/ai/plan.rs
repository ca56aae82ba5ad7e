//! Plan value types: action candidates, scored plans, search budgets

use serde::{Deserialize, Serialize};

use crate::actions::ActionId;
use crate::core::types::GameTime;

/// One atomic decision: an action, when to run it, and its flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionCandidate {
    /// Clock value at which this action becomes due
    pub scheduled_time: GameTime,
    pub action: ActionId,
    /// Face left while executing
    pub reversed: bool,
    /// Keep walking while executing
    pub walk: bool,
}

/// Time-ordered action sequence with a cumulative score, lower = better
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub score: f32,
    pub actions: Vec<ActionCandidate>,
}

impl Plan {
    /// The "nothing to do" plan; callers treat it as a no-op, not an error
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

/// Bounds on one planning call
#[derive(Debug, Clone, Copy)]
pub struct PlannerBudget {
    /// Lookahead levels beyond the first
    pub max_depth: u32,
    /// Width/position of the branch window expanded at each level,
    /// clamped to 1..=5
    pub skill_level: usize,
}

impl PlannerBudget {
    pub fn new(max_depth: u32, skill_level: usize) -> Self {
        Self {
            max_depth,
            skill_level: skill_level.clamp(1, 5),
        }
    }
}

impl Default for PlannerBudget {
    fn default() -> Self {
        Self::new(1, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = Plan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.score, 0.0);
    }

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(PlannerBudget::new(1, 0).skill_level, 1);
        assert_eq!(PlannerBudget::new(1, 9).skill_level, 5);
        assert_eq!(PlannerBudget::new(1, 4).skill_level, 4);
    }
}
