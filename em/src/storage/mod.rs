//! Item persistence
//!
//! ```text
//! items/
//! ├── 3f9c01ab.yaml
//! └── a71e0d42.yaml
//! ```
//!
//! One YAML document per item, named by its ID.

mod yaml;

pub use yaml::YamlItemStore;

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Item, ItemId};

/// Durable storage for items, keyed by ID
pub trait ItemStore {
    /// Persist an item, returning where it was written
    fn save(&self, item: &Item) -> Result<PathBuf, StorageError>;

    /// Load a single item by ID
    fn load(&self, id: &ItemId) -> Result<Item, StorageError>;

    /// Load every stored item
    fn load_all(&self) -> Result<Vec<Item>, StorageError>;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    fn save(&self, item: &Item) -> Result<PathBuf, StorageError> {
        (**self).save(item)
    }

    fn load(&self, id: &ItemId) -> Result<Item, StorageError> {
        (**self).load(id)
    }

    fn load_all(&self) -> Result<Vec<Item>, StorageError> {
        (**self).load_all()
    }
}

/// Errors from reading or writing item records
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize item {id}")]
    Serialize {
        id: ItemId,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse item file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
