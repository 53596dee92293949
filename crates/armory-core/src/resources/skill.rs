use crate::schema::resource;

resource! {
    /// A weapon or magic skill category (Sword, Reason, Faith, ...).
    pub struct Skill / SkillPatch in "skills" as "skill", "Skill" {
        name: String => "name",
        skill_icon: Option<String> => "skill_icon",
    }
}
