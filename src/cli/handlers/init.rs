use crate::config::{CONFIG_FILE, SprintmapConfig, StorageSettings};
use crate::storage::{FileStore, RoadmapStore};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(data_dir: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let config = SprintmapConfig {
        storage: StorageSettings {
            data_dir: data_dir.unwrap_or_else(|| StorageSettings::default().data_dir),
            ..StorageSettings::default()
        },
        logging: Default::default(),
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    // First load seeds the sample roadmap
    let store = RoadmapStore::new(FileStore::new(&data_path)).with_key(config.storage.key.clone());
    let data = store.load_checked()?;

    config.save(&config_path)?;

    println!(
        "{} sprintmap project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());
    println!(
        "  Seeded {} initiative(s) and {} team member(s)",
        data.initiatives.len(),
        data.team_members.len()
    );

    Ok(())
}
