//! Simulation and AI configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose.
//! The config is built once at startup and passed by reference into the
//! world step, the simulator, the heuristics and the planner. There is no
//! ambient global lookup.

/// Configuration for the arena world and the AI search
///
/// These values have been tuned against the stock arena. Changing them
/// affects both live gameplay pacing and the quality of AI plans, because
/// speculative lookahead runs the same world step as live play.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    // === LOCOMOTION ===
    /// Horizontal walking speed, units per second
    ///
    /// Applied whenever an action candidate carries `walk = true`, both in
    /// speculative simulation and when a plan's action reaches the live actor.
    pub walk_speed: f32,

    /// Upward impulse applied when an actor enters a jump animation
    pub jump_impulse: f32,

    /// Downward acceleration, units per second squared
    pub gravity: f32,

    /// Fraction of residual (knockback) velocity lost per second
    pub friction: f32,

    // === COMBAT ===
    /// Reach of a combat animation, units (center to center)
    pub strike_reach: f32,

    /// Damage percent inflicted per second while a strike connects
    pub strike_damage: f32,

    /// Base horizontal knockback, units per second², scaled up by the
    /// victim's accumulated damage percent
    pub knockback_base: f32,

    /// Upward lift accompanying knockback, units per second²
    pub knockback_lift: f32,

    // === MATCH RULES ===
    /// How far outside the level rectangle an actor may drift before it
    /// loses a life and respawns
    pub bounds_margin: f32,

    /// Invincibility window after a respawn, seconds
    pub respawn_invincibility: f32,

    /// How long an item upgrade lasts, seconds
    pub upgrade_duration: f32,

    // === AI SEARCH ===
    /// Fixed speculative time quantum, seconds
    ///
    /// One planner branch advances the world by exactly this much. Larger
    /// values amortize search cost over coarser tactical granularity.
    pub sim_timestep: f32,

    /// Nearest-opponent distance above which an actor pursues instead of
    /// fighting. The comparison is strict: exactly this distance still
    /// selects the combatant role.
    pub pursuit_distance: f32,

    /// Ceiling on simulated branches per planning call
    ///
    /// Search cost grows sharply with depth; once the ceiling is hit the
    /// remaining recursion stops expanding and the best plan found so far
    /// wins. Deterministic, unlike a wall-clock cutoff.
    pub node_budget: u32,

    /// Bounds of the replan jitter window, seconds
    ///
    /// Each recompute is scheduled `jitter` into the future, with jitter
    /// drawn from this range, so many actors do not all replan in the same
    /// frame.
    pub replan_jitter: (f32, f32),
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            // Locomotion
            walk_speed: 120.0,
            jump_impulse: 320.0,
            gravity: 600.0,
            friction: 4.0,

            // Combat
            strike_reach: 45.0,
            strike_damage: 40.0,
            knockback_base: 280.0,
            knockback_lift: 120.0,

            // Match rules
            bounds_margin: 80.0,
            respawn_invincibility: 2.0,
            upgrade_duration: 8.0,

            // AI search
            sim_timestep: 0.25,
            pursuit_distance: 100.0,
            node_budget: 4096,
            replan_jitter: (0.20, 0.60),
        }
    }
}

impl ArenaConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.sim_timestep <= 0.0 {
            return Err("sim_timestep must be positive".into());
        }

        if self.walk_speed <= 0.0 {
            return Err("walk_speed must be positive".into());
        }

        let (lo, hi) = self.replan_jitter;
        if lo < 0.0 || hi < lo {
            return Err(format!(
                "replan_jitter ({lo}, {hi}) must satisfy 0 <= lo <= hi"
            ));
        }

        if self.node_budget == 0 {
            return Err("node_budget must be at least 1".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_jitter_rejected() {
        let cfg = ArenaConfig {
            replan_jitter: (0.6, 0.2),
            ..ArenaConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_timestep_rejected() {
        let cfg = ArenaConfig {
            sim_timestep: 0.0,
            ..ArenaConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
