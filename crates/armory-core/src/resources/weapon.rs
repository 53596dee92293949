//! Weapons.

use crate::schema::resource;

resource! {
    /// A weapon and its combat stats.
    pub struct Weapon / WeaponPatch in "weapons" as "weapon", "Weapon" {
        name: String => "name",
        /// Skill category used to wield it
        type_id: i64 => "type_id",
        /// Scaling stat, "str" or "mag"
        str_mag: Option<String> => "str_mag",
        might: Option<i64> => "might",
        hit: Option<i64> => "hit",
        critical: Option<i64> => "critical",
        durability: i64 => "durability",
        weight: i64 => "weight",
        range_min: i64 => "range_min",
        range_max: Option<i64> => "range_max",
        description: Option<String> => "description",
    }
}
