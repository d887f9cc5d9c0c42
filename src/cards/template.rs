//! Card templates - immutable catalog definitions.
//!
//! A `CardTemplate` is the shared, never-mutated description of a card:
//! either a monster (hit points plus an ordered list of combat commands)
//! or a magic card (a cost and an effect description). Templates are
//! stamped into distinguishable [`CardInstance`](super::CardInstance)s
//! before they enter a match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Catalog-scoped template identifier.
///
/// Two instances stamped from the same template share a `TemplateId`;
/// identity decisions during play use `InstanceId` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// How far a combat command reaches across the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackRange {
    /// Reaches only the opposing front-row monster in the same lane.
    Melee,
    /// Reaches every enemy monster except that same-lane front-row blocker.
    Ranged,
}

/// A single combat command on a monster template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// Stones required to use this command.
    pub stone_cost: i32,
    /// Damage dealt to the target.
    pub damage: i32,
    /// Flavor/effect description.
    pub description: String,
    /// Targeting reach.
    pub range: AttackRange,
}

impl Command {
    /// Create a new command.
    #[must_use]
    pub fn new(
        stone_cost: i32,
        damage: i32,
        description: impl Into<String>,
        range: AttackRange,
    ) -> Self {
        assert!(stone_cost >= 0, "Command cost must be non-negative");
        assert!(damage >= 0, "Command damage must be non-negative");
        Self {
            stone_cost,
            damage,
            description: description.into(),
            range,
        }
    }
}

/// Monster-specific template fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterStats {
    /// Starting hit points. Always positive.
    pub hp: i32,

    /// Ordered, non-empty command list. The first command is the
    /// monster's default attack.
    pub commands: SmallVec<[Command; 2]>,
}

impl MonsterStats {
    /// The monster's default attack: the first command in the list.
    #[must_use]
    pub fn primary_command(&self) -> &Command {
        &self.commands[0]
    }

    /// The highest-damage command. Ties resolve to the earliest command.
    #[must_use]
    pub fn strongest_command(&self) -> &Command {
        let mut best = &self.commands[0];
        for command in &self.commands[1..] {
            if command.damage > best.damage {
                best = command;
            }
        }
        best
    }

    /// Greedy placement value: hit points plus total command damage.
    #[must_use]
    pub fn combat_value(&self) -> i32 {
        self.hp + self.commands.iter().map(|c| c.damage).sum::<i32>()
    }
}

/// Magic-specific template fields.
///
/// Magic cards never enter the battlefield grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagicStats {
    /// Stones required to cast.
    pub stone_cost: i32,
    /// Effect description.
    pub description: String,
}

/// Kind-specific template data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster(MonsterStats),
    Magic(MagicStats),
}

/// An immutable card definition shared by every instance stamped from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Catalog identifier.
    pub id: TemplateId,

    /// Display name.
    pub name: String,

    /// Monster or magic fields.
    pub kind: CardKind,
}

impl CardTemplate {
    /// Create a monster template.
    ///
    /// Panics if `hp` is not positive or `commands` is empty; both
    /// indicate malformed catalog data.
    #[must_use]
    pub fn monster(
        id: TemplateId,
        name: impl Into<String>,
        hp: i32,
        commands: Vec<Command>,
    ) -> Self {
        assert!(hp > 0, "Monster hp must be positive");
        assert!(!commands.is_empty(), "Monster needs at least one command");
        Self {
            id,
            name: name.into(),
            kind: CardKind::Monster(MonsterStats {
                hp,
                commands: SmallVec::from_vec(commands),
            }),
        }
    }

    /// Create a magic template.
    #[must_use]
    pub fn magic(
        id: TemplateId,
        name: impl Into<String>,
        stone_cost: i32,
        description: impl Into<String>,
    ) -> Self {
        assert!(stone_cost >= 0, "Magic cost must be non-negative");
        Self {
            id,
            name: name.into(),
            kind: CardKind::Magic(MagicStats {
                stone_cost,
                description: description.into(),
            }),
        }
    }

    /// Check if this template is a monster.
    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self.kind, CardKind::Monster(_))
    }

    /// Get the monster stats, if this is a monster template.
    #[must_use]
    pub fn monster_stats(&self) -> Option<&MonsterStats> {
        match &self.kind {
            CardKind::Monster(stats) => Some(stats),
            CardKind::Magic(_) => None,
        }
    }
}
