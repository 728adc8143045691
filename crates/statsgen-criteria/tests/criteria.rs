use indexmap::IndexMap;

use statsgen_criteria::transform::category_entries;
use statsgen_criteria::{Category, CategorySpec, Policy, SourceTable, TransformError, default_specs};
use statsgen_registry::{Language, RecipeTable, RegistryEntry, VersionData};

fn item(text_id: &str, label: &str) -> RegistryEntry {
    RegistryEntry {
        text_id: Some(text_id.to_string()),
        display_name: Some(label.to_string()),
        ..Default::default()
    }
}

fn entity(name: &str, label: &str) -> RegistryEntry {
    RegistryEntry {
        name: Some(name.to_string()),
        display_name: Some(label.to_string()),
        ..Default::default()
    }
}

fn empty_data() -> VersionData {
    VersionData {
        blocks: Vec::new(),
        items: Vec::new(),
        entities: Vec::new(),
        recipes: RecipeTable::default(),
        language: Language {
            stat: IndexMap::new(),
        },
    }
}

fn spec_for(category: Category) -> CategorySpec {
    default_specs()
        .into_iter()
        .find(|s| s.category == category)
        .expect("category in table")
}

#[test]
fn category_table_is_fixed_and_prefixes_unique() {
    let specs = default_specs();
    let names: Vec<&str> = specs.iter().map(|s| s.category.name()).collect();
    assert_eq!(
        names,
        [
            "mined",
            "crafted",
            "broken",
            "dropped",
            "picked_up",
            "killed",
            "killed_by",
            "custom"
        ]
    );
    let prefixes: Vec<&str> = specs.iter().map(|s| s.prefix).collect();
    assert_eq!(prefixes, ["m", "c", "b", "d", "p", "k", "kb", "z"]);

    let categories: Vec<Category> = specs.iter().map(|s| s.category).collect();
    assert_eq!(categories, Category::ALL);

    let mut unique = prefixes.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), specs.len());
}

#[test]
fn blacklist_excludes_listed_keys() {
    let mut data = empty_data();
    data.blocks = vec![item("stone", "Stone"), item("air", "Air")];

    let spec = spec_for(Category::Mined);
    let entries = category_entries(&data, &spec).expect("transform");
    let names: Vec<&str> = entries.iter().map(|e| e.scoreboard_name.as_str()).collect();
    assert_eq!(names, ["m-stone"]);
}

#[test]
fn whitelist_admits_exactly_its_matching_entries() {
    let mut data = empty_data();
    data.items = vec![
        item("wooden_sword", "Wooden Sword"),
        item("diamond", "Diamond"),
        item("bow", "Bow"),
    ];

    let spec = spec_for(Category::Broken);
    let entries = category_entries(&data, &spec).expect("transform");
    let names: Vec<&str> = entries.iter().map(|e| e.scoreboard_name.as_str()).collect();
    // Every output key is whitelisted, and each matching registry entry
    // appears exactly once.
    assert_eq!(names, ["b-wooden_sword", "b-bow"]);
}

#[test]
fn crafted_requires_recipe_and_clean_blacklist() {
    let mut data = empty_data();
    data.items = vec![
        item("stick", "Stick"),
        item("diamond", "Diamond"),
        item("command_block", "Command Block"),
    ];
    data.recipes = serde_json::from_str(
        r#"{"stick": [{"ingredients": ["oak_planks"]}], "command_block": [{"ingredients": ["?"]}]}"#,
    )
    .expect("recipes");

    let spec = spec_for(Category::Crafted);
    let entries = category_entries(&data, &spec).expect("transform");
    // diamond has no recipe; command_block has one but is blacklisted.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].scoreboard_name, "c-stick");
    assert_eq!(entries[0].criterion, "minecraft.crafted:minecraft.stick");
    assert_eq!(entries[0].display_name, "Stick Crafted");
}

#[test]
fn custom_blacklist_suppresses_stat() {
    let mut data = empty_data();
    data.language.stat = IndexMap::from([
        ("jump".to_string(), "Jumps".to_string()),
        ("deaths".to_string(), "Deaths".to_string()),
    ]);

    let mut spec = spec_for(Category::Custom);
    spec.policy = Policy {
        blacklist: Some(vec!["jump".to_string()]),
        is_custom: true,
        ..Default::default()
    };
    let entries = category_entries(&data, &spec).expect("transform");
    let names: Vec<&str> = entries.iter().map(|e| e.scoreboard_name.as_str()).collect();
    assert_eq!(names, ["z-deaths"]);
    assert!(!names.contains(&"z-jump"));
}

#[test]
fn killed_whitelist_handles_namespaced_entity_names() {
    let mut data = empty_data();
    data.entities = vec![entity("minecraft.zombie", "Zombie")];

    let mut spec = spec_for(Category::Killed);
    spec.policy = Policy {
        whitelist: Some(vec!["minecraft.zombie".to_string()]),
        is_entity: true,
        ..Default::default()
    };
    let entries = category_entries(&data, &spec).expect("transform");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].criterion, "minecraft.killed:minecraft.zombie");
    assert_eq!(entries[0].scoreboard_name, "k-minecraft.zombie");
    assert_eq!(entries[0].display_name, "Zombie Killed");
}

#[test]
fn record_without_any_key_field_fails_loudly() {
    // The source format leaves this case undefined; we fail rather than
    // silently dropping the record.
    let mut data = empty_data();
    data.blocks = vec![
        item("stone", "Stone"),
        RegistryEntry {
            display_name: Some("Mystery".to_string()),
            ..Default::default()
        },
    ];

    let spec = spec_for(Category::Mined);
    let err = category_entries(&data, &spec).unwrap_err();
    assert!(matches!(
        err,
        TransformError::MissingKey {
            category: Category::Mined,
            index: 1
        }
    ));
}

#[test]
fn item_id_wins_over_text_id_for_naming() {
    let mut data = empty_data();
    data.blocks = vec![RegistryEntry {
        item_id: Some("granite".to_string()),
        text_id: Some("granite_block".to_string()),
        display_name: Some("Granite".to_string()),
        ..Default::default()
    }];

    let spec = spec_for(Category::Mined);
    let entries = category_entries(&data, &spec).expect("transform");
    assert_eq!(entries[0].scoreboard_name, "m-granite");
    assert_eq!(entries[0].criterion, "minecraft.mined:minecraft.granite");
}

#[test]
fn missing_label_is_accepted_and_rendered() {
    let mut data = empty_data();
    data.blocks = vec![RegistryEntry {
        text_id: Some("stone".to_string()),
        ..Default::default()
    }];

    let spec = spec_for(Category::Mined);
    let entries = category_entries(&data, &spec).expect("transform");
    assert_eq!(entries[0].display_name, "None Mined");
}

#[test]
fn entity_whitelists_do_not_match_on_item_fields() {
    let mut data = empty_data();
    // An entity record whose text_id happens to be whitelisted must not
    // slip through: entity rules test the name field only.
    data.entities = vec![RegistryEntry {
        name: Some("armor_stand".to_string()),
        text_id: Some("zombie".to_string()),
        display_name: Some("Armor Stand".to_string()),
        ..Default::default()
    }];

    let spec = spec_for(Category::Killed);
    let entries = category_entries(&data, &spec).expect("transform");
    assert!(entries.is_empty());
}

#[test]
fn source_table_wiring_matches_categories() {
    let specs = default_specs();
    let sources: Vec<SourceTable> = specs.iter().map(|s| s.source).collect();
    assert_eq!(
        sources,
        [
            SourceTable::Blocks,
            SourceTable::Items,
            SourceTable::Items,
            SourceTable::Items,
            SourceTable::Items,
            SourceTable::Entities,
            SourceTable::Entities,
            SourceTable::CustomStats,
        ]
    );
}
