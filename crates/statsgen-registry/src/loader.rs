use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::VersionData;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no data file for version {version} (looked for {})", path.display())]
    VersionNotFound { version: String, path: PathBuf },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a valid version data file", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the registry for `version` from `{data_dir}/{version}.json`.
///
/// Either the full registry loads or this fails; callers never observe a
/// partially populated [`VersionData`].
pub fn load_version(data_dir: &Path, version: &str) -> Result<VersionData, RegistryError> {
    let path = data_dir.join(format!("{version}.json"));
    let text = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RegistryError::VersionNotFound {
                version: version.to_string(),
                path: path.clone(),
            }
        } else {
            RegistryError::Read {
                path: path.clone(),
                source,
            }
        }
    })?;
    let data: VersionData = serde_json::from_str(&text).map_err(|source| RegistryError::Parse {
        path: path.clone(),
        source,
    })?;
    log::debug!(
        "loaded {}: {} blocks, {} items, {} entities, {} recipes, {} custom stats",
        path.display(),
        data.blocks.len(),
        data.items.len(),
        data.entities.len(),
        data.recipes.0.len(),
        data.language.stat.len()
    );
    Ok(data)
}
