//! Spells.

use crate::schema::resource;

resource! {
    /// A spell. Offensive stats are absent for support magic.
    pub struct Spell / SpellPatch in "spells" as "spell", "Spell" {
        name: String => "name",
        /// Magic school, e.g. "Reason" or "Faith"
        #[serde(rename = "type")]
        spell_type: String => "type",
        might: Option<i64> => "might",
        hit: Option<i64> => "hit",
        critical: Option<i64> => "critical",
        uses: i64 => "uses",
        weight: Option<i64> => "weight",
        range_min: i64 => "range_min",
        range_max: Option<i64> => "range_max",
        description: Option<String> => "description",
    }
}
