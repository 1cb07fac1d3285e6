//! Interactive item creation
//!
//! Writes the blank template to a temporary `.tex` file, lets the user edit
//! it, then parses the result and stores the new item. Nothing is stored when
//! any step fails, and the temporary file is removed either way.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Item, ValidationError};
use crate::editor::{Editor, EditorError};
use crate::storage::{ItemStore, StorageError};
use crate::template::{ITEM_TEMPLATE, ParsedTemplate, TemplateError, parse_template};

/// Errors from the authoring flow; each displays the underlying message as-is
#[derive(Debug, Error)]
pub enum AuthoringError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to prepare the item template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read the edited template {}: {source}", .path.display())]
    ReadBack {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An item created by [`ItemAuthor::create`]
#[derive(Debug, Clone)]
pub struct AuthoredItem {
    pub item: Item,
    pub path: PathBuf,
}

/// Drives template editing and stores the resulting item
pub struct ItemAuthor<E, S> {
    editor: E,
    store: S,
}

impl<E: Editor, S: ItemStore> ItemAuthor<E, S> {
    pub fn new(editor: E, store: S) -> Self {
        Self { editor, store }
    }

    /// Run one edit session and store the item it produces
    pub fn create(&self) -> Result<AuthoredItem, AuthoringError> {
        let parsed = self.edit_template()?;
        let item = build_item(parsed)?;
        let path = self.store.save(&item)?;
        info!(id = %item.id(), points = item.points(), "Created item");
        Ok(AuthoredItem { item, path })
    }

    fn edit_template(&self) -> Result<ParsedTemplate, AuthoringError> {
        let mut file = tempfile::Builder::new().prefix("em-item-").suffix(".tex").tempfile()?;
        file.write_all(ITEM_TEMPLATE.as_bytes())?;
        file.flush()?;
        debug!(path = %file.path().display(), "edit_template: wrote blank template");

        self.editor.edit(file.path())?;

        // Re-read by path: the editor may have replaced the file
        let content = fs::read_to_string(file.path()).map_err(|source| AuthoringError::ReadBack {
            path: file.path().to_path_buf(),
            source,
        })?;
        Ok(parse_template(&content)?)
    }
}

/// Turn parsed template fields into a new item
pub fn build_item(parsed: ParsedTemplate) -> Result<Item, ValidationError> {
    Item::new(parsed.body, parsed.criteria, parsed.courses, parsed.solution)
}
