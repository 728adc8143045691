use std::io;
use std::path::Path;

use thiserror::Error;

use statsgen_registry::{RegistryError, VersionData, load_version};

use crate::category::default_specs;
use crate::emit::write_list;
use crate::transform::{StatEntry, TransformError, category_entries};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("failed to write stats list")]
    Io(#[from] io::Error),
}

/// Generate every category's criteria from a loaded registry, concatenated
/// in the fixed category order.
pub fn generate_entries(data: &VersionData) -> Result<Vec<StatEntry>, TransformError> {
    let mut all = Vec::new();
    for spec in default_specs() {
        let entries = category_entries(data, &spec)?;
        log::debug!("{}: {} criteria", spec.category, entries.len());
        all.extend(entries);
    }
    Ok(all)
}

/// Full pipeline: load `{data_dir}/{version}.json`, generate, write the
/// criteria list to `out_path`. Returns the confirmation line the caller
/// prints.
pub fn generate(data_dir: &Path, version: &str, out_path: &Path) -> Result<String, GenerateError> {
    let data = load_version(data_dir, version)?;
    let entries = generate_entries(&data)?;
    write_list(out_path, &entries)?;
    log::info!("wrote {} criteria for version {version}", entries.len());
    Ok(format!(
        "Saved {} scores into {}.",
        entries.len(),
        out_path.display()
    ))
}
