use crate::error::{Result, SprintmapError};
use crate::storage::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".sprintmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SprintmapConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the roadmap blob, relative to the project root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    ".sprintmap".to_string()
}

fn default_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file, relative to the data directory. Logs go to stderr only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl SprintmapConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    /// Load a specific config file; its directory is the project root.
    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: SprintmapConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| SprintmapError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Load the project config, or fall back to the per-user data directory
    /// when no project has been initialized above `start_path`.
    pub fn load_or_global(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::load(start_path) {
            Err(SprintmapError::NotInitialized) => {
                let root = Self::global_root().ok_or(SprintmapError::NotInitialized)?;
                tracing::debug!(root = %root.display(), "No project config, using global data directory");
                Ok((Self::global(), root))
            }
            other => other,
        }
    }

    fn global() -> Self {
        Self {
            storage: StorageSettings {
                data_dir: ".".to_string(),
                key: default_key(),
            },
            logging: LoggingSettings::default(),
        }
    }

    fn global_root() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sprintmap").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(SprintmapError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.storage.data_dir)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.data_path(project_root).join(file))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
