//! The game-data resource kinds stored by the catalog.
//!
//! Each submodule declares one kind with the `resource!` macro. The
//! [`ResourceKind`] enum is the runtime handle used where the kind is only
//! known as a string, such as the `schema` command.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::ArmoryError,
    schema::{Resource, TableSchema},
};

mod character;
mod class;
mod combat_art;
mod skill;
mod skill_list;
mod spell;
mod weapon;

pub use character::{Character, CharacterPatch};
pub use class::{Class, ClassPatch};
pub use combat_art::{CombatArt, CombatArtPatch};
pub use skill::{Skill, SkillPatch};
pub use skill_list::{SkillList, SkillListPatch};
pub use spell::{Spell, SpellPatch};
pub use weapon::{Weapon, WeaponPatch};

/// Runtime identifier of a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Character,
    Class,
    Skill,
    Spell,
    CombatArt,
    Weapon,
    SkillList,
}

impl ResourceKind {
    /// Every kind, in table provisioning order.
    pub const ALL: [ResourceKind; 7] = [
        Self::Character,
        Self::Class,
        Self::Skill,
        Self::Spell,
        Self::CombatArt,
        Self::Weapon,
        Self::SkillList,
    ];

    /// Singular snake_case name, identical to [`Resource::KIND`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => Character::KIND,
            Self::Class => Class::KIND,
            Self::Skill => Skill::KIND,
            Self::Spell => Spell::KIND,
            Self::CombatArt => CombatArt::KIND,
            Self::Weapon => Weapon::KIND,
            Self::SkillList => SkillList::KIND,
        }
    }

    /// Human label used in messages, identical to [`Resource::LABEL`].
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => Character::LABEL,
            Self::Class => Class::LABEL,
            Self::Skill => Skill::LABEL,
            Self::Spell => Spell::LABEL,
            Self::CombatArt => CombatArt::LABEL,
            Self::Weapon => Weapon::LABEL,
            Self::SkillList => SkillList::LABEL,
        }
    }

    /// Type-erased schema of the kind's table.
    pub fn describe(self) -> TableSchema {
        match self {
            Self::Character => TableSchema::of::<Character>(),
            Self::Class => TableSchema::of::<Class>(),
            Self::Skill => TableSchema::of::<Skill>(),
            Self::Spell => TableSchema::of::<Spell>(),
            Self::CombatArt => TableSchema::of::<CombatArt>(),
            Self::Weapon => TableSchema::of::<Weapon>(),
            Self::SkillList => TableSchema::of::<SkillList>(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ArmoryError;

    /// Accepts the snake_case name, its kebab-case spelling, or the table
    /// name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str() == normalized || kind.describe().table == normalized
            })
            .ok_or_else(|| {
                ArmoryError::invalid_input("kind")
                    .with_reason(format!("unknown resource kind '{s}'"))
            })
    }
}
