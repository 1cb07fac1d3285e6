use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use exammaker::cli::{Cli, Command, ItemCommand};
use exammaker::config::Config;
use exammaker::{ItemAuthor, ItemStore, SystemEditor, YamlItemStore};

/// Level used when neither the CLI nor the config sets one
const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                DEFAULT_LOG_LEVEL
            }
        },
        None => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install log subscriber: {}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Item { command } => match command {
            ItemCommand::Add { items_dir } => cmd_item_add(&config, items_dir),
            ItemCommand::List { items_dir } => cmd_item_list(&config, items_dir),
        },
    }
}

fn cmd_item_add(config: &Config, items_dir: Option<PathBuf>) -> Result<()> {
    let store = YamlItemStore::new(items_dir.unwrap_or_else(|| config.items_dir.clone()));
    let author = ItemAuthor::new(SystemEditor::new(config.editor.clone()), store);

    let created = author.create()?;
    println!("{} Saved: {}", "✓".green(), created.path.display());
    Ok(())
}

fn cmd_item_list(config: &Config, items_dir: Option<PathBuf>) -> Result<()> {
    let store = YamlItemStore::new(items_dir.unwrap_or_else(|| config.items_dir.clone()));
    let items = store
        .load_all()
        .context(format!("Failed to load items from {}", store.dir().display()))?;

    if items.is_empty() {
        println!("No items found in {}", store.dir().display());
        return Ok(());
    }

    for item in items {
        let title = item.body().lines().next().unwrap_or("");
        println!(
            "{}  {:>3} pts  {}",
            item.id().as_str().cyan(),
            item.points(),
            title.dimmed()
        );
    }
    Ok(())
}
