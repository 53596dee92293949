#![allow(dead_code)]

use armory_core::{
    resources::{Character, Class, CombatArt, Skill, SkillList, Spell, Weapon},
    Catalog, CatalogBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test catalog backed by a temporary file
pub async fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

pub fn character(name: &str, affinity: &str) -> Character {
    Character {
        name: name.to_string(),
        image_link: format!("https://example.com/{}.png", name.to_lowercase()),
        affinity: affinity.to_string(),
        base_lv: 1,
        hp: 28,
        hp_growth: 55,
        strength: 12,
        str_growth: 55,
        magic: 5,
        mag_growth: 35,
        dexterity: 7,
        dex_growth: 45,
        speed: 8,
        spd_growth: 45,
        luck: 6,
        lck_growth: 45,
        defence: 6,
        def_growth: 40,
        resistance: 4,
        res_growth: 30,
        charm: 7,
        cha_growth: 45,
        ..Default::default()
    }
}

pub fn class() -> Class {
    Class {
        name: "Myrmidon".to_string(),
        rank: "Beginner".to_string(),
        base: vec![1, 2, 3],
        bonus: Some(vec![0, 0, 0, 2, 2, 0, 0, 0, 0]),
        growth: Some(vec![10, 0, 0, 10, 10, 0, 0, 0, 0]),
        ..Default::default()
    }
}

pub fn skill() -> Skill {
    Skill {
        name: "Sword".to_string(),
        skill_icon: Some("sword.png".to_string()),
        ..Default::default()
    }
}

pub fn spell() -> Spell {
    Spell {
        name: "Fire".to_string(),
        spell_type: "Reason".to_string(),
        might: Some(3),
        hit: Some(90),
        critical: Some(0),
        uses: 5,
        weight: Some(4),
        range_min: 1,
        range_max: Some(2),
        description: Some("Black magic that scorches a foe.".to_string()),
        ..Default::default()
    }
}

pub fn combat_art() -> CombatArt {
    CombatArt {
        name: "Wrath Strike".to_string(),
        type_id: 1,
        str_mag: Some("str".to_string()),
        might: Some(5),
        hit: Some(10),
        critical: Some(0),
        durability_cost: 3,
        range_min: 1,
        range_max: Some(1),
        description: Some("A strong attack.".to_string()),
        ..Default::default()
    }
}

pub fn weapon(name: &str) -> Weapon {
    Weapon {
        name: name.to_string(),
        type_id: 1,
        str_mag: Some("str".to_string()),
        might: Some(5),
        hit: Some(90),
        critical: Some(0),
        durability: 40,
        weight: 5,
        range_min: 1,
        range_max: Some(1),
        description: None,
        ..Default::default()
    }
}

pub fn skill_list(char_id: i64) -> SkillList {
    SkillList {
        name: "Edelgard".to_string(),
        char_id,
        spell_list: vec![4, 12, 31],
        ca_list: vec![2, 5],
        boons: Some(vec![1, 3]),
        banes: Some(vec![]),
        budding_talent: Some(false),
        ..Default::default()
    }
}
