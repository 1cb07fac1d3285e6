//! Directory of YAML item files

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{ItemStore, StorageError};
use crate::domain::{Item, ItemId};

const EXTENSION: &str = "yaml";

/// Stores each item as `<dir>/<id>.yaml`
///
/// The directory is created on the first save; reading a missing directory
/// yields no items.
#[derive(Debug, Clone)]
pub struct YamlItemStore {
    dir: PathBuf,
}

impl YamlItemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding the given item
    pub fn item_path(&self, id: &ItemId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, EXTENSION))
    }

    fn read_item(path: &Path) -> Result<Item, StorageError> {
        let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ItemStore for YamlItemStore {
    fn save(&self, item: &Item) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let content = serde_yaml::to_string(item).map_err(|source| StorageError::Serialize {
            id: item.id().clone(),
            source,
        })?;

        let path = self.item_path(item.id());
        fs::write(&path, content).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        info!(id = %item.id(), path = %path.display(), "Saved item");
        Ok(path)
    }

    fn load(&self, id: &ItemId) -> Result<Item, StorageError> {
        let path = self.item_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound(id.clone()));
        }
        Self::read_item(&path)
    }

    fn load_all(&self) -> Result<Vec<Item>, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "load_all: directory missing, no items");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| StorageError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        debug!(count = paths.len(), "load_all: reading item files");
        paths.iter().map(|path| Self::read_item(path)).collect()
    }
}
