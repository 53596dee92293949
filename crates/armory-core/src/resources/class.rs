//! Character classes.

use crate::schema::resource;

resource! {
    /// A class with base, bonus and growth stat vectors.
    ///
    /// Stat vectors are ordered HP, Str, Mag, Dex, Spd, Lck, Def, Res, Cha.
    pub struct Class / ClassPatch in "classes" as "class", "Class" {
        name: String => "name",
        /// Tier such as "Beginner" or "Advanced"
        rank: String => "rank",
        base: Vec<i64> => "base",
        bonus: Option<Vec<i64>> => "bonus",
        growth: Option<Vec<i64>> => "growth",
    }
}
