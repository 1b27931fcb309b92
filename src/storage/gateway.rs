use super::kv::KeyValueStore;
use crate::error::{Result, SprintmapError};
use crate::model::RoadmapData;
use crate::sample::default_roadmap_data;
use chrono::Utc;

/// Key the roadmap blob is stored under.
pub const STORAGE_KEY: &str = "roadmap-data";

/// Top-level fields an imported document must carry.
const REQUIRED_FIELDS: [&str; 3] = ["teamMembers", "initiatives", "sprintConfig"];

/// Loads and saves whole roadmap snapshots.
///
/// Failures never propagate: they are logged and reported as `false` or as
/// the default dataset. A store built with [`RoadmapStore::detached`] has no
/// backend at all; it serves default data and refuses every write.
pub struct RoadmapStore {
    backend: Option<Box<dyn KeyValueStore>>,
    key: String,
}

impl RoadmapStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn detached() -> Self {
        Self {
            backend: None,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Load the stored roadmap, seeding the store on first use.
    ///
    /// Unlike [`RoadmapStore::load`], read and parse failures are returned.
    /// The stored value is never overwritten when it fails to parse.
    pub fn load_checked(&self) -> Result<RoadmapData> {
        let Some(backend) = &self.backend else {
            return Ok(default_roadmap_data());
        };

        match backend.get(&self.key)? {
            Some(stored) => {
                let data: RoadmapData = serde_json::from_str(&stored)
                    .map_err(|e| SprintmapError::Parse(format!("Stored roadmap is invalid: {}", e)))?;
                tracing::debug!(
                    initiatives = data.initiatives.len(),
                    members = data.team_members.len(),
                    "Loaded roadmap"
                );
                Ok(data)
            }
            None => {
                tracing::info!(key = %self.key, "No stored roadmap, seeding default data");
                let data = default_roadmap_data();
                self.save(&data);
                Ok(data)
            }
        }
    }

    pub fn load(&self) -> RoadmapData {
        self.load_checked().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load roadmap data, using defaults");
            default_roadmap_data()
        })
    }

    /// Stamp `last_modified` and write the snapshot.
    pub fn save(&self, data: &RoadmapData) -> bool {
        let Some(backend) = &self.backend else {
            return false;
        };

        let mut stamped = data.clone();
        stamped.last_modified = Utc::now();

        let written = serde_json::to_string(&stamped)
            .map_err(SprintmapError::from)
            .and_then(|json| backend.set(&self.key, &json));

        match written {
            Ok(()) => {
                tracing::debug!(key = %self.key, "Saved roadmap");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save roadmap data");
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        let Some(backend) = &self.backend else {
            return false;
        };
        match backend.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to clear roadmap data");
                false
            }
        }
    }

    /// Drop the stored roadmap and load again, which reseeds the defaults.
    pub fn reset(&self) -> RoadmapData {
        if self.is_available() {
            self.clear();
        }
        self.load()
    }

    /// Pretty-printed JSON of the stored (or default) roadmap.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.load()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize roadmap data");
            String::new()
        })
    }

    /// Replace the stored roadmap with `text`. Nothing is written unless the
    /// document parses and carries every top-level section.
    pub fn import_json(&self, text: &str) -> bool {
        match parse_import(text) {
            Ok(data) => self.save(&data),
            Err(e) => {
                tracing::error!(error = %e, "Failed to import roadmap data");
                false
            }
        }
    }
}

/// Parse an exported roadmap document.
pub fn parse_import(text: &str) -> Result<RoadmapData> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let object = value
        .as_object()
        .ok_or_else(|| SprintmapError::Parse("Invalid roadmap data structure".to_string()))?;

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| object.get(**field).is_none_or(|v| v.is_null()))
    {
        return Err(SprintmapError::Parse(format!(
            "Invalid roadmap data structure: missing {}",
            missing
        )));
    }

    Ok(serde_json::from_value(value)?)
}
