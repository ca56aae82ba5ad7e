//! Action vocabulary and the movement catalog
//!
//! The catalog is the static, process-lifetime table mapping an actor's
//! current animation context to the set of legal next actions. It is built
//! eagerly once (from the sequences resource, or from the built-in stock
//! table) and never mutated afterwards.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Unique action identifier
///
/// Doubles as the animation-context identifier: an actor's current
/// animation is the action that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    Static,
    Walk,
    Jump,
    SecondJump,
    RisingSmash,
    Roll,
    Pick,
    Punch,
    Kick,
    SmashSide,
    SmashUp,
    SmashDown,
    Block,
}

/// Partition of the action vocabulary used for role-based filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClass {
    Displacement,
    Combat,
}

impl ActionId {
    pub const ALL: [ActionId; 13] = [
        ActionId::Static,
        ActionId::Walk,
        ActionId::Jump,
        ActionId::SecondJump,
        ActionId::RisingSmash,
        ActionId::Roll,
        ActionId::Pick,
        ActionId::Punch,
        ActionId::Kick,
        ActionId::SmashSide,
        ActionId::SmashUp,
        ActionId::SmashDown,
        ActionId::Block,
    ];

    /// Displacement moves you around; everything else is combat.
    pub fn class(&self) -> ActionClass {
        match self {
            ActionId::Walk
            | ActionId::Jump
            | ActionId::SecondJump
            | ActionId::RisingSmash
            | ActionId::Roll
            | ActionId::Pick => ActionClass::Displacement,
            _ => ActionClass::Combat,
        }
    }

    /// Contexts reached through a jump never get the implicit walk action
    pub fn is_airborne_context(&self) -> bool {
        matches!(
            self,
            ActionId::Jump | ActionId::SecondJump | ActionId::RisingSmash
        )
    }

    /// Animation length in seconds, `None` for looping animations
    pub fn duration(&self) -> Option<f32> {
        match self {
            ActionId::Static | ActionId::Walk => None,
            ActionId::Jump => Some(0.45),
            ActionId::SecondJump => Some(0.40),
            ActionId::RisingSmash => Some(0.50),
            ActionId::Roll => Some(0.40),
            ActionId::Pick => Some(0.30),
            ActionId::Punch => Some(0.30),
            ActionId::Kick => Some(0.35),
            ActionId::SmashSide => Some(0.40),
            ActionId::SmashUp => Some(0.45),
            ActionId::SmashDown => Some(0.45),
            ActionId::Block => Some(0.50),
        }
    }

    /// Identifier used by the sequences resource
    pub fn name(&self) -> &'static str {
        match self {
            ActionId::Static => "static",
            ActionId::Walk => "walk",
            ActionId::Jump => "jump",
            ActionId::SecondJump => "second-jump",
            ActionId::RisingSmash => "rising-smash",
            ActionId::Roll => "roll",
            ActionId::Pick => "pick",
            ActionId::Punch => "punch",
            ActionId::Kick => "kick",
            ActionId::SmashSide => "smash-side",
            ActionId::SmashUp => "smash-up",
            ActionId::SmashDown => "smash-down",
            ActionId::Block => "block",
        }
    }

    pub fn parse(name: &str) -> Option<ActionId> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static table of legal next actions per animation context
#[derive(Debug, Clone)]
pub struct MovementCatalog {
    table: AHashMap<ActionId, Vec<ActionId>>,
}

impl MovementCatalog {
    /// Build the catalog from (context, next actions) entries
    ///
    /// Non-airborne contexts implicitly gain the baseline walk action.
    /// Duplicate actions within a context collapse; entry order is kept
    /// otherwise so lookups stay deterministic.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ActionId, Vec<ActionId>)>,
    {
        let mut table: AHashMap<ActionId, Vec<ActionId>> = AHashMap::new();

        for (context, actions) in entries {
            let slot = table.entry(context).or_default();
            if !context.is_airborne_context() && !slot.contains(&ActionId::Walk) {
                slot.push(ActionId::Walk);
            }
            for action in actions {
                if !slot.contains(&action) {
                    slot.push(action);
                }
            }
        }

        Self { table }
    }

    /// Catalog mirroring the stock game data, for use without the resource file
    pub fn default_catalog() -> Self {
        use ActionId::*;
        Self::from_entries([
            (
                Static,
                vec![Jump, Roll, Pick, Punch, Kick, SmashSide, SmashUp, SmashDown, Block],
            ),
            (Walk, vec![Jump, Roll, Pick, Punch, Kick, SmashSide]),
            (Jump, vec![SecondJump, RisingSmash, Kick]),
            (SecondJump, vec![RisingSmash, Kick]),
            (RisingSmash, vec![]),
            (Roll, vec![Jump, Punch]),
            (Pick, vec![]),
            (Punch, vec![Punch, Kick]),
            (Kick, vec![]),
            (SmashSide, vec![]),
            (SmashUp, vec![]),
            (SmashDown, vec![]),
            (Block, vec![]),
        ])
    }

    /// Legal next actions for an animation context
    ///
    /// Unknown contexts resolve to the empty set (airborne) or to the lone
    /// implicit walk (grounded); the planner treats an empty set as
    /// "nothing to do", never as an error.
    pub fn legal_actions(&self, context: ActionId) -> Vec<ActionId> {
        match self.table.get(&context) {
            Some(actions) => actions.clone(),
            None if context.is_airborne_context() => Vec::new(),
            None => vec![ActionId::Walk],
        }
    }

    /// Legal next actions restricted to one class
    pub fn legal_actions_of_class(&self, context: ActionId, class: ActionClass) -> Vec<ActionId> {
        self.legal_actions(context)
            .into_iter()
            .filter(|a| a.class() == class)
            .collect()
    }

    pub fn context_count(&self) -> usize {
        self.table.len()
    }
}
