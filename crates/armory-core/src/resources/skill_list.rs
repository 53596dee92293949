//! Per-character skill lists.

use crate::schema::resource;

resource! {
    /// Spells, combat arts and skill aptitudes learned by one character.
    ///
    /// All list columns hold IDs or skill category IDs.
    pub struct SkillList / SkillListPatch in "character_skills" as "skill_list", "Skill list" {
        name: String => "name",
        /// Owning character
        char_id: i64 => "char_id",
        spell_list: Vec<i64> => "spell_list",
        ca_list: Vec<i64> => "ca_list",
        /// Skill categories the character is strong in
        boons: Option<Vec<i64>> => "boons",
        /// Skill categories the character is weak in
        banes: Option<Vec<i64>> => "banes",
        budding_talent: Option<bool> => "budding_talent",
    }
}
