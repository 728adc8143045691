use indexmap::IndexMap;
use serde::Deserialize;

/// One record from the blocks, items, or entities table.
///
/// The registry format carries many more fields than the generator reads;
/// serde drops the rest. Key fields are optional because the three tables
/// spell their identifying key differently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryEntry {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub text_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RegistryEntry {
    /// Item-like key: `item_id`, falling back to `text_id`.
    pub fn item_key(&self) -> Option<&str> {
        self.item_id.as_deref().or(self.text_id.as_deref())
    }

    /// Entity-like key.
    pub fn entity_key(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Recipe table keyed by item key, in file order. Recipe contents are
/// opaque here; only the presence of a non-empty recipe matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RecipeTable(pub IndexMap<String, serde_json::Value>);

impl RecipeTable {
    pub fn has_recipe(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Array(a)) => !a.is_empty(),
            Some(serde_json::Value::Object(o)) => !o.is_empty(),
            Some(_) => true,
        }
    }
}

/// Localization table. Only the `stat` sub-table is read: it maps a custom
/// stat key to its localized display label, in file order.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub stat: IndexMap<String, String>,
}

/// Everything the generator reads from one version data file. All five
/// tables are required; a file missing one fails to parse.
#[derive(Debug, Deserialize)]
pub struct VersionData {
    pub blocks: Vec<RegistryEntry>,
    pub items: Vec<RegistryEntry>,
    pub entities: Vec<RegistryEntry>,
    pub recipes: RecipeTable,
    pub language: Language,
}

impl VersionData {
    pub fn custom_stats(&self) -> &IndexMap<String, String> {
        &self.language.stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_key_prefers_item_id_over_text_id() {
        let entry = RegistryEntry {
            item_id: Some("stick".into()),
            text_id: Some("legacy_stick".into()),
            ..Default::default()
        };
        assert_eq!(entry.item_key(), Some("stick"));

        let entry = RegistryEntry {
            text_id: Some("stick".into()),
            ..Default::default()
        };
        assert_eq!(entry.item_key(), Some("stick"));
        assert_eq!(RegistryEntry::default().item_key(), None);
    }

    #[test]
    fn empty_and_null_recipes_do_not_count() {
        let table: RecipeTable =
            serde_json::from_str(r#"{"a": null, "b": [], "c": {}, "d": [{"result": "d"}]}"#)
                .unwrap();
        assert!(!table.has_recipe("a"));
        assert!(!table.has_recipe("b"));
        assert!(!table.has_recipe("c"));
        assert!(table.has_recipe("d"));
        assert!(!table.has_recipe("missing"));
    }

    #[test]
    fn recipe_table_preserves_file_order() {
        let table: RecipeTable =
            serde_json::from_str(r#"{"zzz": [1], "aaa": [1], "mmm": [1]}"#).unwrap();
        let keys: Vec<&str> = table.0.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["zzz", "aaa", "mmm"]);
    }
}
