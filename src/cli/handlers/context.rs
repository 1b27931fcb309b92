use crate::config::SprintmapConfig;
use crate::session::RoadmapSession;
use crate::storage::{FileStore, RoadmapStore};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: SprintmapConfig,
    pub data_path: PathBuf,
    pub session: RoadmapSession,
}

impl CommandContext {
    /// Open the roadmap stored under `data_path`. Stored data that cannot be
    /// read is an error, so a broken file is never silently overwritten.
    pub fn new(config: SprintmapConfig, data_path: PathBuf) -> Result<Self> {
        let store = Self::store(&config, &data_path);
        let session = RoadmapSession::try_open(store).with_context(|| {
            format!(
                "Failed to load roadmap data from {} (use `sprintmap import` or `sprintmap reset` to recover)",
                data_path.display()
            )
        })?;
        Ok(Self {
            config,
            data_path,
            session,
        })
    }

    /// Open for commands that replace the stored data wholesale.
    pub fn recover(config: SprintmapConfig, data_path: PathBuf) -> Self {
        let store = Self::store(&config, &data_path);
        let session = RoadmapSession::open(store);
        Self {
            config,
            data_path,
            session,
        }
    }

    fn store(config: &SprintmapConfig, data_path: &std::path::Path) -> RoadmapStore {
        RoadmapStore::new(FileStore::new(data_path)).with_key(config.storage.key.clone())
    }

    /// Fail when the last change is only held in memory.
    pub fn ensure_saved(&self) -> Result<()> {
        if self.session.is_dirty() {
            anyhow::bail!(
                "Failed to save changes to {}",
                self.data_path.display()
            );
        }
        Ok(())
    }
}
