use armory_core::{
    params::decode_payload,
    resources::{Character, Class, ClassPatch, CombatArt, SkillList, Weapon, WeaponPatch},
    ArmoryError, CatalogBuilder, Lookup, ResourceKey,
};

mod common;

#[tokio::test]
async fn test_create_get_update_delete_workflow() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;

    let created = catalog
        .create(common::weapon("Killing Edge"))
        .await
        .expect("Failed to create weapon");
    let key = ResourceKey::new(created.id);

    let fetched: Weapon = catalog.get(key).await.expect("Failed to get weapon");
    assert_eq!(fetched, created);

    let patch: WeaponPatch = decode_payload(r#"{"critical": 30, "description": "Hits hard."}"#)
        .expect("Failed to decode patch");
    let updated = catalog
        .update::<Weapon>(key, patch)
        .await
        .expect("Failed to update weapon");
    assert_eq!(updated.critical, Some(30));
    assert_eq!(updated.description.as_deref(), Some("Hits hard."));
    assert_eq!(updated.might, created.might);

    assert!(catalog.exists::<Weapon>(key).await.unwrap());

    let status = catalog
        .delete::<Weapon>(key)
        .await
        .expect("Failed to delete weapon");
    assert!(status.success);
    assert_eq!(status.msg, "Weapon deleted successfully.");

    assert!(!catalog.exists::<Weapon>(key).await.unwrap());
    assert!(catalog.list::<Weapon>().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_resources_are_not_found() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    let key = ResourceKey::new(42);

    let err = catalog.get::<CombatArt>(key).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Combat art with ID 42 not found");

    let err = catalog
        .update::<Class>(key, ClassPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ArmoryError::NotFound { kind: "Class", id: 42 }));

    let err = catalog.delete::<SkillList>(key).await.unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    let class = catalog.create(common::class()).await.unwrap();
    let key = ResourceKey::new(class.id);

    catalog.delete::<Class>(key).await.unwrap();
    assert!(catalog.delete::<Class>(key).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_characters_by_name_normalizes_case() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    catalog
        .create(common::character("Dimitri Alexandre", "Blue Lions"))
        .await
        .unwrap();
    catalog
        .create(common::character("Dedue", "Blue Lions"))
        .await
        .unwrap();

    let found = catalog.characters_by_name("dimitri alexandre").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Dimitri Alexandre");

    assert!(catalog.characters_by_name("dimitri").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_characters_by_affinity() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    for (name, house) in [
        ("Edelgard", "Black Eagles"),
        ("Dimitri", "Blue Lions"),
        ("Claude", "Golden Deer"),
        ("Hubert", "Black Eagles"),
    ] {
        catalog.create(common::character(name, house)).await.unwrap();
    }

    let eagles: Vec<String> = catalog
        .characters_by_affinity("Black Eagles")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(eagles, vec!["Edelgard", "Hubert"]);

    assert!(catalog
        .characters_by_affinity("black eagles")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_weapons_by_name_prefix() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    for name in ["Iron Sword", "Iron Lance", "Steel Sword", "Irony"] {
        catalog.create(common::weapon(name)).await.unwrap();
    }

    let irons = catalog.weapons_by_name("Iron ").await.unwrap();
    assert_eq!(irons.len(), 2);
    assert!(irons.iter().all(|w| w.name.starts_with("Iron ")));
}

#[tokio::test]
async fn test_skill_lists_for_character() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    let edelgard: Character = catalog
        .create(common::character("Edelgard", "Black Eagles"))
        .await
        .unwrap();
    catalog.create(common::skill_list(edelgard.id)).await.unwrap();
    catalog.create(common::skill_list(edelgard.id + 100)).await.unwrap();

    let lists = catalog
        .skill_lists_for_character(ResourceKey::new(edelgard.id))
        .await
        .unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].char_id, edelgard.id);
    assert_eq!(lists[0].spell_list, vec![4, 12, 31]);
    assert_eq!(lists[0].banes, Some(vec![]));
}

#[tokio::test]
async fn test_find_rejects_unknown_column() {
    let (_temp_dir, catalog) = common::create_test_catalog().await;
    let err = catalog
        .find::<Weapon>(Lookup::exact("owner", "Byleth"))
        .await
        .unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_catalogs_share_the_database_file() {
    let (temp_dir, catalog) = common::create_test_catalog().await;
    let class = catalog.create(common::class()).await.unwrap();

    let reopened = CatalogBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .unwrap();
    let fetched: Class = reopened.get(ResourceKey::new(class.id)).await.unwrap();
    assert_eq!(fetched, class);
}
