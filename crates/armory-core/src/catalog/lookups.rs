//! Named lookups served alongside the generic operations.

use super::Catalog;
use crate::{
    error::Result,
    params::{title_case, Lookup, ResourceKey},
    resources::{Character, SkillList, Weapon},
};

impl Catalog {
    /// Characters belonging to a house, matched exactly.
    pub async fn characters_by_affinity(&self, affinity: &str) -> Result<Vec<Character>> {
        self.find(Lookup::exact("affinity", affinity)).await
    }

    /// Characters with the given name. The name is title-cased first, so
    /// "dimitri alexandre" finds "Dimitri Alexandre".
    ///
    /// Like every lookup this returns all matches, so an unknown name yields
    /// an empty `Vec` rather than [`ArmoryError::NotFound`].
    ///
    /// [`ArmoryError::NotFound`]: crate::error::ArmoryError::NotFound
    pub async fn characters_by_name(&self, name: &str) -> Result<Vec<Character>> {
        self.find(Lookup::exact("name", title_case(name))).await
    }

    /// Weapons whose name starts with `prefix` (case-sensitive).
    pub async fn weapons_by_name(&self, prefix: &str) -> Result<Vec<Weapon>> {
        self.find(Lookup::prefix("name", prefix)).await
    }

    /// Skill lists owned by a character.
    pub async fn skill_lists_for_character(&self, char_id: ResourceKey) -> Result<Vec<SkillList>> {
        self.find(Lookup::exact("char_id", char_id.to_string()))
            .await
    }
}
