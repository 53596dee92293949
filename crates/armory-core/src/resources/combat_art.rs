//! Combat arts.

use crate::schema::resource;

resource! {
    /// A weapon technique that spends durability.
    pub struct CombatArt / CombatArtPatch in "combat_arts" as "combat_art", "Combat art" {
        name: String => "name",
        /// Skill category the art belongs to
        type_id: i64 => "type_id",
        /// Scaling stat, "str" or "mag"
        str_mag: Option<String> => "str_mag",
        might: Option<i64> => "might",
        hit: Option<i64> => "hit",
        critical: Option<i64> => "critical",
        durability_cost: i64 => "durability_cost",
        range_min: i64 => "range_min",
        range_max: Option<i64> => "range_max",
        description: Option<String> => "description",
    }
}
