//! CLI tests for the em binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn em() -> Command {
    let mut cmd = Command::cargo_bin("em").unwrap();
    // Keep the user's editor settings out of the tests
    cmd.env_remove("VISUAL").env_remove("EDITOR").env_remove("RUST_LOG");
    cmd
}

fn yaml_files(dir: &Path) -> Vec<std::path::PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml"))
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_help_mentions_exammaker() {
    em().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ExamMaker"));
}

#[test]
fn test_item_add_help_shows_items_dir() {
    em().args(["item", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--items-dir"));
}

#[test]
fn test_list_empty_directory() {
    let temp = TempDir::new().unwrap();
    em().args(["item", "list", "--items-dir"])
        .arg(temp.path().join("items"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    em().arg("--config")
        .arg(temp.path().join("missing.yml"))
        .args(["item", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_editor_executable_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.yml");
    fs::write(&config, "editor: definitely-not-an-editor-7f3a\n").unwrap();
    let items = temp.path().join("items");

    em().arg("--config")
        .arg(&config)
        .args(["item", "add", "--items-dir"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Editor executable not found"));

    assert!(yaml_files(&items).is_empty());
}

/// Writes a shell script that overwrites its file argument with `content`
#[cfg(unix)]
fn scripted_editor(dir: &Path, content: &str) -> std::path::PathBuf {
    let fixture = dir.join("edited.tex");
    fs::write(&fixture, content).unwrap();

    let script = dir.join("fake-editor.sh");
    fs::write(&script, format!("#!/bin/sh\ncat '{}' > \"$1\"\n", fixture.display())).unwrap();
    script
}

#[cfg(unix)]
fn config_with_editor(dir: &Path, editor: &Path) -> std::path::PathBuf {
    let config = dir.join("config.yml");
    fs::write(&config, format!("editor: sh {}\n", editor.display())).unwrap();
    config
}

#[cfg(unix)]
#[test]
fn test_item_add_saves_yaml() {
    let temp = TempDir::new().unwrap();
    let editor = scripted_editor(
        temp.path(),
        "% @@BEGIN_BODY\nSolve $x^2=4$.\n% @@END_BODY\n\
         % @@BEGIN_CRITERIA\n\\criterion{Correct}{4}\n\\criterion{Clear}{6}\n% @@END_CRITERIA\n\
         % @@BEGIN_COURSES\n\\course{CS101}{easy}{Algebra}\n% @@END_COURSES\n",
    );
    let config = config_with_editor(temp.path(), &editor);
    let items = temp.path().join("subdir").join("items");

    em().arg("--config")
        .arg(&config)
        .args(["item", "add", "--items-dir"])
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    let files = yaml_files(&items);
    assert_eq!(files.len(), 1);

    let saved = fs::read_to_string(&files[0]).unwrap();
    assert!(saved.contains("points: 10"));
    assert!(saved.contains("CS101:"));
    assert!(saved.contains("difficulty: easy"));
    assert!(saved.contains("topic: Algebra"));
    assert!(saved.contains("solution: null"));

    em().arg("--config")
        .arg(&config)
        .args(["item", "list", "--items-dir"])
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("Solve $x^2=4$."));
}

#[cfg(unix)]
#[test]
fn test_item_add_parse_error_saves_nothing() {
    let temp = TempDir::new().unwrap();
    let editor = scripted_editor(
        temp.path(),
        "% @@BEGIN_BODY\nA question.\n% @@END_BODY\n\
         % @@BEGIN_COURSES\n\\course{CS101}{impossible}{}\n% @@END_COURSES\n",
    );
    let config = config_with_editor(temp.path(), &editor);
    let items = temp.path().join("items");

    em().arg("--config")
        .arg(&config)
        .args(["item", "add", "--items-dir"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid difficulty"));

    assert!(yaml_files(&items).is_empty());
}

#[cfg(unix)]
#[test]
fn test_item_add_empty_body_fails() {
    let temp = TempDir::new().unwrap();
    let editor = scripted_editor(temp.path(), "% @@BEGIN_BODY\n\n% @@END_BODY\n");
    let config = config_with_editor(temp.path(), &editor);
    let items = temp.path().join("items");

    em().arg("--config")
        .arg(&config)
        .args(["item", "add", "--items-dir"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));

    assert!(yaml_files(&items).is_empty());
}
