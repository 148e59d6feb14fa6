//! Saved catalog files (JSON).

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::catalog::{Catalog, MetadataSource};
use crate::error::{Error, Result};

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Metadata(format!("Catalog file not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    let catalog = serde_json::from_str(&content)
        .map_err(|e| Error::Metadata(format!("Failed to parse {}: {}", path.display(), e)))?;
    Ok(catalog)
}

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let content = serde_json::to_string_pretty(catalog)?;
    fs::write(path, content)?;
    Ok(())
}

/// A catalog previously written with [`save_catalog`].
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MetadataSource for FileSource {
    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Loading catalog from {}", self.path.display());
        load_catalog(&self.path)
    }
}
