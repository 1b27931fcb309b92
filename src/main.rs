use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sprintmap::cli::handlers::{self, CommandContext};
use sprintmap::cli::{Cli, Commands};
use sprintmap::config::SprintmapConfig;
use sprintmap::error::SprintmapError;
use sprintmap::logging;

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        data_dir,
        verbose,
    } = Cli::parse();

    // `recover` opens even when the stored roadmap cannot be read
    let open = |recover: bool| open_context(config.as_deref(), data_dir.as_deref(), verbose, recover);

    match command {
        Commands::Init => {
            logging::init(verbose, None);
            handlers::handle_init(data_dir.clone())
        }
        Commands::Tree { member, all, json } => {
            handlers::handle_tree(&open(false)?, member, all, json)
        }
        Commands::Show { id, json } => handlers::handle_show(&open(false)?, id, json),
        Commands::Team { action } => handlers::handle_team(&mut open(false)?, action),
        Commands::Add { item } => handlers::handle_add(&mut open(false)?, item),
        Commands::Update { id, fields, json } => {
            handlers::handle_update(&mut open(false)?, id, fields, json)
        }
        Commands::Delete { id, force, json } => {
            handlers::handle_delete(&mut open(false)?, id, force, json)
        }
        Commands::Toggle { id } => handlers::handle_toggle(&mut open(false)?, id),
        Commands::Config { action } => handlers::handle_config(&mut open(false)?, action),
        Commands::Timeline { json } => handlers::handle_timeline(&open(false)?, json),
        Commands::Export { output } => handlers::handle_export(&open(false)?, output),
        Commands::Import { file } => handlers::handle_import(&mut open(true)?, file),
        Commands::Reset { force } => handlers::handle_reset(&mut open(true)?, force),
    }
}

fn open_context(
    config_path: Option<&str>,
    data_dir: Option<&str>,
    verbose: bool,
    recover: bool,
) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) = load_config(config_path, data_dir.is_some(), &cwd)?;
    let data_path = match data_dir {
        Some(dir) => cwd.join(dir),
        None => config.data_path(&root),
    };

    logging::init(verbose, config.log_path(&root));
    tracing::debug!(data_path = %data_path.display(), "Using data directory");

    if recover {
        Ok(CommandContext::recover(config, data_path))
    } else {
        CommandContext::new(config, data_path)
    }
}

/// An explicit `--config` wins. With `--data-dir` a missing project config
/// is fine; otherwise fall back to the per-user data directory.
fn load_config(
    config_path: Option<&str>,
    has_data_dir: bool,
    cwd: &Path,
) -> Result<(SprintmapConfig, PathBuf)> {
    if let Some(path) = config_path {
        let path = cwd.join(path);
        return SprintmapConfig::load_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    if has_data_dir {
        return match SprintmapConfig::load(cwd) {
            Err(SprintmapError::NotInitialized) => {
                Ok((SprintmapConfig::default(), cwd.to_path_buf()))
            }
            other => other.context("Failed to load sprintmap configuration"),
        };
    }

    SprintmapConfig::load_or_global(cwd).context("Failed to load sprintmap configuration")
}
