use std::fmt;

use crate::lists;
use crate::rule::Policy;

/// The eight stat categories, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mined,
    Crafted,
    Broken,
    Dropped,
    PickedUp,
    Killed,
    KilledBy,
    Custom,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Mined,
        Category::Crafted,
        Category::Broken,
        Category::Dropped,
        Category::PickedUp,
        Category::Killed,
        Category::KilledBy,
        Category::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Mined => "mined",
            Category::Crafted => "crafted",
            Category::Broken => "broken",
            Category::Dropped => "dropped",
            Category::PickedUp => "picked_up",
            Category::Killed => "killed",
            Category::KilledBy => "killed_by",
            Category::Custom => "custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which registry table a category draws its entries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTable {
    Blocks,
    Items,
    Entities,
    CustomStats,
}

/// Static configuration for one category: where its entries come from, how
/// they are named, and which inclusion policy applies.
#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub category: Category,
    pub source: SourceTable,
    pub prefix: &'static str,
    pub namespace: &'static str,
    pub template: &'static str,
    pub policy: Policy,
}

fn join(a: &[&str], b: &[&str]) -> Vec<String> {
    a.iter().chain(b).map(|k| k.to_string()).collect()
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

/// The fixed category table, in output order.
pub fn default_specs() -> Vec<CategorySpec> {
    vec![
        CategorySpec {
            category: Category::Mined,
            source: SourceTable::Blocks,
            prefix: "m",
            namespace: "minecraft.mined",
            template: "{} Mined",
            policy: Policy {
                blacklist: Some(join(lists::MINED_BLACKLIST, lists::BASE_BLACKLIST)),
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::Crafted,
            source: SourceTable::Items,
            prefix: "c",
            namespace: "minecraft.crafted",
            template: "{} Crafted",
            policy: Policy {
                blacklist: Some(owned(lists::BASE_BLACKLIST)),
                needs_recipe: true,
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::Broken,
            source: SourceTable::Items,
            prefix: "b",
            namespace: "minecraft.broken",
            template: "{} Broken",
            policy: Policy {
                whitelist: Some(owned(lists::BREAKABLE_ITEMS)),
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::Dropped,
            source: SourceTable::Items,
            prefix: "d",
            namespace: "minecraft.dropped",
            template: "{} Dropped",
            policy: Policy {
                blacklist: Some(join(lists::DROPPED_BLACKLIST, lists::BREAKABLE_ITEMS)),
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::PickedUp,
            source: SourceTable::Items,
            prefix: "p",
            namespace: "minecraft.picked_up",
            template: "{} Picked up",
            policy: Policy {
                blacklist: Some(join(lists::PICKED_UP_BLACKLIST, lists::BASE_BLACKLIST)),
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::Killed,
            source: SourceTable::Entities,
            prefix: "k",
            namespace: "minecraft.killed",
            template: "{} Killed",
            policy: Policy {
                whitelist: Some(owned(lists::KILLED_WHITELIST)),
                is_entity: true,
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::KilledBy,
            source: SourceTable::Entities,
            prefix: "kb",
            namespace: "minecraft.killed_by",
            template: "Killed by {}",
            policy: Policy {
                whitelist: Some(owned(lists::KILLED_BY_WHITELIST)),
                is_entity: true,
                ..Default::default()
            },
        },
        CategorySpec {
            category: Category::Custom,
            source: SourceTable::CustomStats,
            prefix: "z",
            namespace: "minecraft.custom",
            template: "{}",
            policy: Policy {
                blacklist: Some(join(lists::CUSTOM_BLACKLIST, lists::BASE_BLACKLIST)),
                is_custom: true,
                ..Default::default()
            },
        },
    ]
}
