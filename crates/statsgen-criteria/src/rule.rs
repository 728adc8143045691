use std::collections::HashSet;

use statsgen_registry::RecipeTable;

/// Raw per-category policy configuration, as the category table states it.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    pub blacklist: Option<Vec<String>>,
    pub whitelist: Option<Vec<String>>,
    pub needs_recipe: bool,
    pub is_entity: bool,
    pub is_custom: bool,
}

/// One inclusion predicate, selected per category from its [`Policy`].
///
/// A tagged enum rather than stored closures: each variant owns the set it
/// tests against, and [`IncludeRule::includes`] matches on the tag.
#[derive(Debug, Clone)]
pub enum IncludeRule {
    EntityWhitelist(HashSet<String>),
    ItemWhitelist(HashSet<String>),
    RecipeCheck(HashSet<String>),
    CustomBlacklist(HashSet<String>),
    DefaultBlacklist(HashSet<String>),
}

impl IncludeRule {
    /// Pick the one rule a policy configures. First match wins:
    /// entity-whitelist, item-whitelist, recipe-check, custom-blacklist,
    /// default-blacklist.
    pub fn select(policy: &Policy) -> IncludeRule {
        fn set(keys: &Option<Vec<String>>) -> HashSet<String> {
            keys.iter().flatten().cloned().collect()
        }
        if policy.is_entity && policy.whitelist.is_some() {
            IncludeRule::EntityWhitelist(set(&policy.whitelist))
        } else if policy.whitelist.is_some() {
            IncludeRule::ItemWhitelist(set(&policy.whitelist))
        } else if policy.needs_recipe {
            IncludeRule::RecipeCheck(set(&policy.blacklist))
        } else if policy.is_custom {
            IncludeRule::CustomBlacklist(set(&policy.blacklist))
        } else {
            IncludeRule::DefaultBlacklist(set(&policy.blacklist))
        }
    }

    /// Whether the entry with `key` participates in the category.
    ///
    /// A missing recipe is "condition false", never an error.
    pub fn includes(&self, key: &str, recipes: &RecipeTable) -> bool {
        match self {
            IncludeRule::EntityWhitelist(allow) | IncludeRule::ItemWhitelist(allow) => {
                allow.contains(key)
            }
            IncludeRule::RecipeCheck(deny) => !deny.contains(key) && recipes.has_recipe(key),
            IncludeRule::CustomBlacklist(deny) | IncludeRule::DefaultBlacklist(deny) => {
                !deny.contains(key)
            }
        }
    }
}
