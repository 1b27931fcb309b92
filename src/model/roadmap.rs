use super::team::TeamMember;
use super::types::SprintCadence;
use super::work_item::Initiative;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sprint cadence settings.
///
/// `total_sprints` is stored, not computed: whoever changes
/// `sprints_per_increment` or `increments_per_quarter` must recompute it
/// with [`crate::query::calculate_total_sprints`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintConfig {
    pub cadence: SprintCadence,
    pub sprints_per_increment: u32,
    pub increments_per_quarter: u32,
    pub planning_start_date: DateTime<Utc>,
    pub total_sprints: u32,
}

impl SprintConfig {
    pub fn sprints_per_quarter(&self) -> u32 {
        self.sprints_per_increment
            .saturating_mul(self.increments_per_quarter)
    }
}

/// The whole persisted roadmap: one snapshot, replaced wholesale on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapData {
    pub team_members: Vec<TeamMember>,
    pub initiatives: Vec<Initiative>,
    pub sprint_config: SprintConfig,

    #[serde(default)]
    pub last_modified: DateTime<Utc>,
}

impl RoadmapData {
    pub fn new(sprint_config: SprintConfig) -> Self {
        Self {
            team_members: Vec::new(),
            initiatives: Vec::new(),
            sprint_config,
            last_modified: Utc::now(),
        }
    }

    /// Compare everything except `last_modified`, which every save restamps.
    pub fn same_content(&self, other: &RoadmapData) -> bool {
        self.team_members == other.team_members
            && self.initiatives == other.initiatives
            && self.sprint_config == other.sprint_config
    }

    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == id)
    }
}
