//! Playable and recruitable units.

use crate::schema::resource;

resource! {
    /// A unit with its base stats and growth rates.
    pub struct Character / CharacterPatch in "characters" as "character", "Character" {
        name: String => "name",
        /// Portrait URL
        image_link: String => "image_link",
        /// House the unit belongs to
        affinity: String => "affinity",
        base_lv: i64 => "base_lv",
        hp: i64 => "hp",
        hp_growth: i64 => "hp_growth",
        strength: i64 => "strength",
        str_growth: i64 => "str_growth",
        magic: i64 => "magic",
        mag_growth: i64 => "mag_growth",
        dexterity: i64 => "dexterity",
        dex_growth: i64 => "dex_growth",
        speed: i64 => "speed",
        spd_growth: i64 => "spd_growth",
        luck: i64 => "luck",
        lck_growth: i64 => "lck_growth",
        defence: i64 => "defence",
        def_growth: i64 => "def_growth",
        resistance: i64 => "resistance",
        res_growth: i64 => "res_growth",
        charm: i64 => "charm",
        cha_growth: i64 => "cha_growth",
    }
}
