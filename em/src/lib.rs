//! ExamMaker - author exam items as structured records
//!
//! Items are written in a LaTeX template opened in the user's editor. The
//! edited template is parsed into a body, an optional solution, grading
//! criteria and course assignments, and stored as one YAML file per item.
//!
//! # Architecture
//!
//! ```text
//! ITEM_TEMPLATE ──> Editor ──> parse_template ──> Item ──> ItemStore
//!                  (editor)     (template)       (domain)   (storage)
//! ```
//!
//! [`authoring::ItemAuthor`] wires the steps together. The editor and store are
//! traits so the flow can run against fakes.
//!
//! # Example
//!
//! ```ignore
//! use exammaker::{ItemAuthor, SystemEditor, YamlItemStore};
//!
//! let author = ItemAuthor::new(SystemEditor::default(), YamlItemStore::new("items"));
//! let created = author.create()?;
//! println!("Saved: {}", created.path.display());
//! ```

pub mod authoring;
pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod storage;
pub mod template;

pub use authoring::{AuthoredItem, AuthoringError, ItemAuthor};
pub use config::Config;
pub use domain::{CourseAssignment, Courses, Criterion, Difficulty, Item, ItemId, ValidationError};
pub use editor::{Editor, EditorError, SystemEditor};
pub use storage::{ItemStore, StorageError, YamlItemStore};
pub use template::{ITEM_TEMPLATE, ParsedTemplate, TemplateError, parse_template};

/// Default directory for item files, relative to the working directory
pub const DEFAULT_ITEMS_DIR: &str = "items";
