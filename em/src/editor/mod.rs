//! External editor collaborator
//!
//! The authoring flow only needs "open this file and wait until the user is
//! done". [`SystemEditor`] does that with a child process; tests substitute
//! their own [`Editor`].

mod system;

pub use system::{EnvLookup, GUI_EDITORS, PathLookup, SystemEditor, find_editor};

use std::path::Path;
use thiserror::Error;

/// Something that lets a user edit a file and blocks until they are done
pub trait Editor {
    fn edit(&self, path: &Path) -> Result<(), EditorError>;
}

impl<E: Editor + ?Sized> Editor for &E {
    fn edit(&self, path: &Path) -> Result<(), EditorError> {
        (**self).edit(path)
    }
}

/// Errors from locating or running an editor
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No editor found. Install VS Codium or VS Code, or set the EDITOR or VISUAL environment variable.")]
    NotFound,

    #[error("Editor executable not found: '{0}'")]
    MissingExecutable(String),

    #[error("Editor exited with code {0}.")]
    ExitStatus(i32),

    #[error("Editor was terminated by a signal.")]
    Terminated,

    #[error("Failed to start editor '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
