use indexmap::IndexMap;
use thiserror::Error;

use statsgen_registry::{RecipeTable, RegistryEntry, VersionData};

use crate::category::{Category, CategorySpec, SourceTable};
use crate::rule::IncludeRule;

/// One generated stat: the triple every included registry entry produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub scoreboard_name: String,
    pub criterion: String,
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{category} entry #{index} has no usable key field")]
    MissingKey { category: Category, index: usize },
}

/// Key and label for one registry row, however its table spells them.
#[derive(Debug, Clone, Copy)]
pub struct Keyed<'a> {
    pub key: &'a str,
    pub label: Option<&'a str>,
}

pub fn scoreboard_name(prefix: &str, key: &str) -> String {
    format!("{prefix}-{key}")
}

/// Criterion string for a key. A key already carrying the "minecraft."
/// prefix is stripped once so the namespace is never doubled.
pub fn criterion(namespace: &str, key: &str) -> String {
    let bare = key.strip_prefix("minecraft.").unwrap_or(key);
    format!("{namespace}:minecraft.{bare}")
}

/// Fill the template's single `{}` slot. An absent label renders as the
/// literal `None`; missing labels are a registry fact, not an error.
pub fn display_name(template: &str, label: Option<&str>) -> String {
    template.replacen("{}", label.unwrap_or("None"), 1)
}

/// Run one category: filter keyed entries through `rule` and name the
/// survivors, preserving iteration order.
pub fn transform_keyed<'a, I>(
    entries: I,
    spec: &CategorySpec,
    rule: &IncludeRule,
    recipes: &RecipeTable,
) -> Vec<StatEntry>
where
    I: IntoIterator<Item = Keyed<'a>>,
{
    entries
        .into_iter()
        .filter(|e| rule.includes(e.key, recipes))
        .map(|e| StatEntry {
            scoreboard_name: scoreboard_name(spec.prefix, e.key),
            criterion: criterion(spec.namespace, e.key),
            display_name: display_name(spec.template, e.label),
        })
        .collect()
}

/// Keyed view of a record table. Items and blocks try `item_id` then
/// `text_id`; entities use `name`. A record with none of its candidate key
/// fields is a loud error, not a silent skip.
pub fn keyed_records<'a>(
    entries: &'a [RegistryEntry],
    spec: &CategorySpec,
) -> Result<Vec<Keyed<'a>>, TransformError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = match spec.source {
                SourceTable::Entities => entry.entity_key(),
                _ => entry.item_key(),
            };
            key.map(|key| Keyed {
                key,
                label: entry.label(),
            })
            .ok_or(TransformError::MissingKey {
                category: spec.category,
                index,
            })
        })
        .collect()
}

/// Keyed view of the custom stat table: the mapping's own keys and labels.
pub fn keyed_custom(stats: &IndexMap<String, String>) -> Vec<Keyed<'_>> {
    stats
        .iter()
        .map(|(key, label)| Keyed {
            key,
            label: Some(label),
        })
        .collect()
}

/// Produce one category's stat entries from the loaded registry.
pub fn category_entries(
    data: &VersionData,
    spec: &CategorySpec,
) -> Result<Vec<StatEntry>, TransformError> {
    let rule = IncludeRule::select(&spec.policy);
    let keyed = match spec.source {
        SourceTable::Blocks => keyed_records(&data.blocks, spec)?,
        SourceTable::Items => keyed_records(&data.items, spec)?,
        SourceTable::Entities => keyed_records(&data.entities, spec)?,
        SourceTable::CustomStats => keyed_custom(data.custom_stats()),
    };
    Ok(transform_keyed(keyed, spec, &rule, &data.recipes))
}
