//! The live match state and its per-frame world step
//!
//! `GameState::update` is the single pipeline used by live gameplay *and*
//! by speculative AI lookahead: the planner advances isolated copies with
//! the exact same code, so simulated futures are physically faithful.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arena::actor::Actor;
use crate::arena::events::{EventEffect, TimedEvents};
use crate::arena::item::{Item, ItemKind};
use crate::arena::level::Level;
use crate::core::config::ArenaConfig;
use crate::core::types::{ActorIndex, GameTime, Vec2};

/// Damage removed by a heal item
const HEAL_AMOUNT: f32 = 50.0;

/// All mutable simulation state of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub actors: Vec<Actor>,
    pub items: Vec<Item>,
    pub events: TimedEvents,
    /// Elapsed simulated time, seconds
    pub clock: GameTime,
}

impl GameState {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            actors: Vec::new(),
            items: Vec::new(),
            events: TimedEvents::new(),
            clock: 0.0,
        }
    }

    /// Add an actor at the next free entry point, returning its index
    pub fn spawn_actor(&mut self, name: impl Into<String>) -> ActorIndex {
        let index = self.actors.len();
        let entry = self.level.entry_point(index);
        self.actors.push(Actor::new(name, entry));
        index
    }

    pub fn spawn_item(&mut self, kind: ItemKind, position: Vec2) {
        self.items.push(Item::new(kind, position));
    }

    /// Indices of every other living actor
    pub fn opponents_of(&self, actor: ActorIndex) -> Vec<ActorIndex> {
        (0..self.actors.len())
            .filter(|&i| i != actor && self.actors[i].alive())
            .collect()
    }

    /// Living actors remaining in the match
    pub fn survivors(&self) -> usize {
        self.actors.iter().filter(|a| a.alive()).count()
    }

    /// Advance the whole world by `dt` seconds: locomotion, gravity,
    /// platform landing, strike resolution, item pickups, bounds deaths
    /// and timed events.
    pub fn update(&mut self, cfg: &ArenaConfig, dt: f32) {
        self.clock += dt;

        self.step_physics(cfg, dt);
        self.resolve_strikes(cfg, dt);
        self.pick_up_items(cfg);
        self.apply_bounds_deaths(cfg);
        self.fire_due_events();
    }

    fn step_physics(&mut self, cfg: &ArenaConfig, dt: f32) {
        let platforms = self.level.platforms.clone();

        for actor in self.actors.iter_mut().filter(|a| a.alive()) {
            // Knockback decays, gravity accumulates
            actor.velocity.x -= actor.velocity.x * (cfg.friction * dt).min(1.0);
            actor.velocity.y += cfg.gravity * dt;

            let vx = actor.walking_speed * actor.facing() + actor.velocity.x;
            let new_x = actor.position.x + vx * dt;
            let new_y = actor.position.y + actor.velocity.y * dt;

            // Land on the first platform whose top edge the feet cross this step
            let feet_before = actor.position.y + actor.size.y / 2.0;
            let feet_after = new_y + actor.size.y / 2.0;
            let mut landed = None;
            if actor.velocity.y >= 0.0 {
                landed = platforms
                    .iter()
                    .find(|p| {
                        feet_before <= p.top()
                            && p.top() <= feet_after
                            && p.x <= new_x
                            && new_x <= p.right()
                    })
                    .copied();
            }

            match landed {
                Some(platform) => {
                    actor.position = Vec2::new(new_x, platform.top() - actor.size.y / 2.0);
                    actor.velocity.y = 0.0;
                    actor.on_ground = true;
                }
                None => {
                    actor.position = Vec2::new(new_x, new_y);
                    actor.on_ground = false;
                }
            }

            // Non-looping animations run out and return to static
            if let Some(left) = actor.animation_time_left {
                let left = left - dt;
                if left <= 0.0 {
                    actor.animation = crate::actions::ActionId::Static;
                    actor.animation_time_left = None;
                } else {
                    actor.animation_time_left = Some(left);
                }
            }
        }
    }

    fn resolve_strikes(&mut self, cfg: &ArenaConfig, dt: f32) {
        use crate::actions::{ActionClass, ActionId};

        let mut hits: Vec<(ActorIndex, ActorIndex)> = Vec::new();
        for (i, attacker) in self.actors.iter().enumerate() {
            let striking = attacker.alive()
                && attacker.animation.class() == ActionClass::Combat
                && !matches!(attacker.animation, ActionId::Static | ActionId::Block)
                && attacker.animation_time_left.is_some();
            if !striking {
                continue;
            }

            for (j, victim) in self.actors.iter().enumerate() {
                if i == j || !victim.alive() || victim.invincible {
                    continue;
                }
                let in_reach = attacker.distance_to(victim) <= cfg.strike_reach;
                let in_front =
                    (victim.position.x - attacker.position.x) * attacker.facing() >= 0.0;
                if in_reach && in_front {
                    hits.push((i, j));
                }
            }
        }

        for (i, j) in hits {
            let facing = self.actors[i].facing();
            let victim = &mut self.actors[j];
            victim.percents += cfg.strike_damage * dt;
            // Knockback scales with accumulated damage, smash-style
            let shove = cfg.knockback_base * (1.0 + victim.percents / 100.0);
            victim.velocity.x += facing * shove * dt;
            victim.velocity.y -= cfg.knockback_lift * dt;
        }
    }

    fn pick_up_items(&mut self, cfg: &ArenaConfig) {
        let clock = self.clock;
        for item in self.items.iter_mut().filter(|i| i.present) {
            let rect = item.rect();
            let taker = self
                .actors
                .iter_mut()
                .enumerate()
                .find(|(_, a)| a.alive() && a.rect().intersects(&rect));
            if let Some((index, actor)) = taker {
                match item.kind {
                    ItemKind::Upgrade => {
                        actor.upgraded = true;
                        self.events.schedule(
                            clock + cfg.upgrade_duration,
                            EventEffect::EndUpgrade { actor: index },
                        );
                    }
                    ItemKind::Heal => {
                        actor.percents = (actor.percents - HEAL_AMOUNT).max(0.0);
                    }
                }
                item.present = false;
            }
        }
    }

    fn apply_bounds_deaths(&mut self, cfg: &ArenaConfig) {
        let border = self.level.rect.expanded(cfg.bounds_margin);
        let clock = self.clock;
        for (index, actor) in self.actors.iter_mut().enumerate() {
            if !actor.alive() || actor.rect().intersects(&border) {
                continue;
            }

            actor.lives -= 1;
            debug!(actor = %actor.name, lives = actor.lives, "out of bounds");
            if actor.alive() {
                actor.respawn();
                self.events.schedule(
                    clock + cfg.respawn_invincibility,
                    EventEffect::EndInvincibility { actor: index },
                );
            }
        }
    }

    fn fire_due_events(&mut self) {
        for effect in self.events.take_due(self.clock) {
            match effect {
                EventEffect::EndInvincibility { actor } => {
                    if let Some(a) = self.actors.get_mut(actor) {
                        a.invincible = false;
                    }
                }
                EventEffect::EndUpgrade { actor } => {
                    if let Some(a) = self.actors.get_mut(actor) {
                        a.upgraded = false;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionId;

    fn grounded_state() -> (ArenaConfig, GameState) {
        let cfg = ArenaConfig::default();
        let mut state = GameState::new(Level::default_arena());
        state.spawn_actor("a");
        state.spawn_actor("b");
        // Settle both actors onto the floor platform
        for _ in 0..20 {
            state.update(&cfg, 1.0 / 60.0);
        }
        (cfg, state)
    }

    #[test]
    fn test_actors_settle_on_platforms() {
        let (_, state) = grounded_state();
        assert!(state.actors[0].on_ground);
        assert!(state.actors[1].on_ground);
    }

    #[test]
    fn test_walking_moves_in_facing_direction() {
        let (cfg, mut state) = grounded_state();
        let x0 = state.actors[0].position.x;
        state.actors[0].walking_speed = cfg.walk_speed;
        state.actors[0].reversed = false;
        state.update(&cfg, 0.25);
        assert!(state.actors[0].position.x > x0);

        let x1 = state.actors[0].position.x;
        state.actors[0].reversed = true;
        state.update(&cfg, 0.25);
        assert!(state.actors[0].position.x < x1);
    }

    #[test]
    fn test_jump_leaves_ground_and_lands_again() {
        let (cfg, mut state) = grounded_state();
        state.actors[0].change_animation(ActionId::Jump, &cfg);
        state.update(&cfg, 0.1);
        assert!(!state.actors[0].on_ground);

        for _ in 0..120 {
            state.update(&cfg, 1.0 / 60.0);
        }
        assert!(state.actors[0].on_ground);
    }

    #[test]
    fn test_attack_animation_expires_to_static() {
        let (cfg, mut state) = grounded_state();
        state.actors[0].change_animation(ActionId::Punch, &cfg);
        state.update(&cfg, 1.0);
        assert_eq!(state.actors[0].animation, ActionId::Static);
        assert_eq!(state.actors[0].animation_time_left, None);
    }

    #[test]
    fn test_strike_damages_opponent_in_reach() {
        let (cfg, mut state) = grounded_state();
        // Put the victim just right of the attacker, inside reach
        state.actors[1].position = state.actors[0].position + Vec2::new(30.0, 0.0);
        state.actors[0].reversed = false;
        state.actors[0].change_animation(ActionId::Punch, &cfg);
        state.update(&cfg, 0.1);
        assert!(state.actors[1].percents > 0.0);
        assert!(state.actors[1].velocity.x > 0.0);
    }

    #[test]
    fn test_strike_misses_behind_attacker() {
        let (cfg, mut state) = grounded_state();
        state.actors[1].position = state.actors[0].position - Vec2::new(30.0, 0.0);
        state.actors[0].reversed = false;
        state.actors[0].change_animation(ActionId::Punch, &cfg);
        state.update(&cfg, 0.1);
        assert_eq!(state.actors[1].percents, 0.0);
    }

    #[test]
    fn test_invincible_opponent_takes_no_damage() {
        let (cfg, mut state) = grounded_state();
        state.actors[1].position = state.actors[0].position + Vec2::new(30.0, 0.0);
        state.actors[1].invincible = true;
        state.actors[0].change_animation(ActionId::Punch, &cfg);
        state.update(&cfg, 0.1);
        assert_eq!(state.actors[1].percents, 0.0);
    }

    #[test]
    fn test_out_of_bounds_costs_a_life_and_respawns_invincible() {
        let (cfg, mut state) = grounded_state();
        let lives = state.actors[0].lives;
        state.actors[0].position = Vec2::new(-500.0, 300.0);
        state.update(&cfg, 1.0 / 60.0);

        let actor = &state.actors[0];
        assert_eq!(actor.lives, lives - 1);
        assert_eq!(actor.position, actor.entry_point);
        assert!(actor.invincible);
        assert_eq!(state.events.pending(), 1);
    }

    #[test]
    fn test_respawn_invincibility_expires() {
        let (cfg, mut state) = grounded_state();
        state.actors[0].position = Vec2::new(-500.0, 300.0);
        state.update(&cfg, 1.0 / 60.0);
        assert!(state.actors[0].invincible);

        for _ in 0..((cfg.respawn_invincibility * 60.0) as usize + 10) {
            state.update(&cfg, 1.0 / 60.0);
        }
        assert!(!state.actors[0].invincible);
    }

    #[test]
    fn test_upgrade_item_pickup_and_expiry() {
        let (cfg, mut state) = grounded_state();
        let pos = state.actors[0].position;
        state.spawn_item(ItemKind::Upgrade, pos);
        state.update(&cfg, 1.0 / 60.0);

        assert!(state.actors[0].upgraded);
        assert!(!state.items[0].present);

        for _ in 0..((cfg.upgrade_duration * 60.0) as usize + 10) {
            state.update(&cfg, 1.0 / 60.0);
        }
        assert!(!state.actors[0].upgraded);
    }

    #[test]
    fn test_heal_item_reduces_percents() {
        let (cfg, mut state) = grounded_state();
        state.actors[0].percents = 80.0;
        let pos = state.actors[0].position;
        state.spawn_item(ItemKind::Heal, pos);
        state.update(&cfg, 1.0 / 60.0);
        assert_eq!(state.actors[0].percents, 30.0);
    }

    #[test]
    fn test_opponents_of_skips_self_and_dead() {
        let (_, mut state) = grounded_state();
        assert_eq!(state.opponents_of(0), vec![1]);
        state.actors[1].lives = 0;
        assert!(state.opponents_of(0).is_empty());
    }

    #[test]
    fn test_platform_boundary_is_a_cliff() {
        let (cfg, mut state) = grounded_state();
        // Walk left off the floor platform
        state.actors[0].position.x = 110.0;
        state.actors[0].reversed = true;
        state.actors[0].walking_speed = cfg.walk_speed;
        for _ in 0..30 {
            state.update(&cfg, 1.0 / 60.0);
        }
        assert!(!state.actors[0].on_ground);
    }
}
