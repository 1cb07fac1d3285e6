//! Editor discovery and subprocess invocation

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use super::{Editor, EditorError};

/// GUI editors tried first, in order; they are started with `--new-window --wait`
pub const GUI_EDITORS: [&str; 4] = ["codium", "code", "code-insiders", "subl"];

/// Environment variables consulted after the GUI editors, in order
const EDITOR_ENV_VARS: [&str; 2] = ["VISUAL", "EDITOR"];

/// Last-resort terminal editor
const FALLBACK_EDITOR: &str = "vi";

/// Returns whether a program name resolves on `PATH`
pub type PathLookup<'a> = &'a dyn Fn(&str) -> bool;

/// Reads an environment variable
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Pick the editor command line, without the file argument
///
/// Order: the configured command, GUI editors on `PATH`, `$VISUAL`, `$EDITOR`,
/// then `vi`. Environment commands are split on whitespace and only used when
/// their first word resolves on `PATH`. A configured command is used as-is.
pub fn find_editor(
    configured: Option<&str>,
    on_path: PathLookup<'_>,
    env: EnvLookup<'_>,
) -> Result<Vec<String>, EditorError> {
    if let Some(command) = configured.map(str::trim).filter(|c| !c.is_empty()) {
        debug!(%command, "find_editor: using configured editor");
        return Ok(split_command(command));
    }

    if let Some(name) = GUI_EDITORS.iter().copied().find(|name| on_path(name)) {
        debug!(%name, "find_editor: found GUI editor");
        return Ok(vec![name.to_string(), "--new-window".to_string(), "--wait".to_string()]);
    }

    for var in EDITOR_ENV_VARS {
        let Some(value) = env(var) else { continue };
        let parts = split_command(&value);
        if let Some(program) = parts.first()
            && on_path(program)
        {
            debug!(%var, %program, "find_editor: using editor from environment");
            return Ok(parts);
        }
    }

    if on_path(FALLBACK_EDITOR) {
        debug!("find_editor: falling back to vi");
        return Ok(vec![FALLBACK_EDITOR.to_string()]);
    }

    Err(EditorError::NotFound)
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

/// Runs a real editor process and waits for it to exit
#[derive(Debug, Clone, Default)]
pub struct SystemEditor {
    /// Editor command from configuration, overriding discovery
    command: Option<String>,
}

impl SystemEditor {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Resolve the editor command line against the current environment
    pub fn resolve(&self) -> Result<Vec<String>, EditorError> {
        find_editor(self.command.as_deref(), &|name| which::which(name).is_ok(), &|var| {
            std::env::var(var).ok()
        })
    }
}

impl Editor for SystemEditor {
    fn edit(&self, path: &Path) -> Result<(), EditorError> {
        let argv = self.resolve()?;
        let Some((program, args)) = argv.split_first() else {
            return Err(EditorError::NotFound);
        };

        info!(%program, path = %path.display(), "Opening editor");
        let status = Command::new(program).args(args).arg(path).status().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                EditorError::MissingExecutable(program.clone())
            } else {
                EditorError::Spawn {
                    program: program.clone(),
                    source: e,
                }
            }
        })?;

        debug!(?status, "SystemEditor::edit: editor exited");
        if status.success() {
            Ok(())
        } else {
            Err(status.code().map_or(EditorError::Terminated, EditorError::ExitStatus))
        }
    }
}
