use crate::error::{Result, SprintmapError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkItemType {
    Initiative,
    Epic,
    Feature,
    Story,
}

impl WorkItemType {
    /// Depth in the hierarchy, Initiative being 0.
    pub fn level(&self) -> usize {
        match self {
            WorkItemType::Initiative => 0,
            WorkItemType::Epic => 1,
            WorkItemType::Feature => 2,
            WorkItemType::Story => 3,
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            WorkItemType::Initiative => crate::id::INITIATIVE_PREFIX,
            WorkItemType::Epic => crate::id::EPIC_PREFIX,
            WorkItemType::Feature => crate::id::FEATURE_PREFIX,
            WorkItemType::Story => crate::id::STORY_PREFIX,
        }
    }
}

impl fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkItemType::Initiative => write!(f, "Initiative"),
            WorkItemType::Epic => write!(f, "Epic"),
            WorkItemType::Feature => write!(f, "Feature"),
            WorkItemType::Story => write!(f, "Story"),
        }
    }
}

impl FromStr for WorkItemType {
    type Err = SprintmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "initiative" | "init" => Ok(WorkItemType::Initiative),
            "epic" => Ok(WorkItemType::Epic),
            "feature" | "feat" => Ok(WorkItemType::Feature),
            "story" => Ok(WorkItemType::Story),
            _ => Err(SprintmapError::Parse(format!("Invalid work item type: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorkItemStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Blocked,
}

impl fmt::Display for WorkItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkItemStatus::NotStarted => write!(f, "Not Started"),
            WorkItemStatus::InProgress => write!(f, "In Progress"),
            WorkItemStatus::Completed => write!(f, "Completed"),
            WorkItemStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

impl FromStr for WorkItemStatus {
    type Err = SprintmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not started" | "not-started" | "not_started" | "todo" => {
                Ok(WorkItemStatus::NotStarted)
            }
            "in progress" | "in-progress" | "in_progress" => Ok(WorkItemStatus::InProgress),
            "completed" | "done" => Ok(WorkItemStatus::Completed),
            "blocked" => Ok(WorkItemStatus::Blocked),
            _ => Err(SprintmapError::Parse(format!("Invalid status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TeamRole {
    #[default]
    Developer,
    Designer,
    #[serde(rename = "PM")]
    Pm,
    #[serde(rename = "QA")]
    Qa,
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamRole::Developer => write!(f, "Developer"),
            TeamRole::Designer => write!(f, "Designer"),
            TeamRole::Pm => write!(f, "PM"),
            TeamRole::Qa => write!(f, "QA"),
        }
    }
}

impl FromStr for TeamRole {
    type Err = SprintmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "developer" | "dev" => Ok(TeamRole::Developer),
            "designer" => Ok(TeamRole::Designer),
            "pm" => Ok(TeamRole::Pm),
            "qa" => Ok(TeamRole::Qa),
            _ => Err(SprintmapError::Parse(format!("Invalid team role: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SprintCadence {
    #[default]
    #[serde(rename = "2-week")]
    TwoWeek,
    #[serde(rename = "3-week")]
    ThreeWeek,
}

impl SprintCadence {
    pub fn days(&self) -> i64 {
        match self {
            SprintCadence::TwoWeek => 14,
            SprintCadence::ThreeWeek => 21,
        }
    }
}

impl fmt::Display for SprintCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SprintCadence::TwoWeek => write!(f, "2-week"),
            SprintCadence::ThreeWeek => write!(f, "3-week"),
        }
    }
}

impl FromStr for SprintCadence {
    type Err = SprintmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "2-week" | "2" | "two-week" => Ok(SprintCadence::TwoWeek),
            "3-week" | "3" | "three-week" => Ok(SprintCadence::ThreeWeek),
            _ => Err(SprintmapError::Parse(format!("Invalid sprint cadence: {}", s))),
        }
    }
}

/// Story point estimate, restricted to the Fibonacci values 1, 2, 3, 5, 8, 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StoryPoints {
    One = 1,
    Two = 2,
    Three = 3,
    Five = 5,
    Eight = 8,
    Thirteen = 13,
}

impl StoryPoints {
    pub const ALL: [StoryPoints; 6] = [
        StoryPoints::One,
        StoryPoints::Two,
        StoryPoints::Three,
        StoryPoints::Five,
        StoryPoints::Eight,
        StoryPoints::Thirteen,
    ];

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for StoryPoints {
    type Error = SprintmapError;

    fn try_from(value: u8) -> Result<Self> {
        StoryPoints::ALL
            .into_iter()
            .find(|p| p.value() == value)
            .ok_or_else(|| {
                SprintmapError::Parse(format!(
                    "Invalid story points: {} (expected one of 1, 2, 3, 5, 8, 13)",
                    value
                ))
            })
    }
}

impl From<StoryPoints> for u8 {
    fn from(points: StoryPoints) -> Self {
        points.value()
    }
}

impl fmt::Display for StoryPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for StoryPoints {
    type Err = SprintmapError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| SprintmapError::Parse(format!("Invalid story points: {}", s)))?;
        StoryPoints::try_from(value)
    }
}
