use super::types::{StoryPoints, WorkItemStatus, WorkItemType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by every level of the hierarchy.
///
/// Each variant embeds this record and flattens it into its own JSON object,
/// so a stored story reads `{"id": ..., "type": "Story", "title": ..., "parentFeatureId": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemBase {
    pub id: String,

    #[serde(rename = "type")]
    pub item_type: WorkItemType,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_number: Option<u32>,

    #[serde(default)]
    pub assigned_members: Vec<String>,

    #[serde(default)]
    pub status: WorkItemStatus,

    #[serde(default)]
    pub is_expanded: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl WorkItemBase {
    pub fn new(id: String, item_type: WorkItemType, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            item_type,
            title,
            description: None,
            sprint_number: None,
            assigned_members: Vec::new(),
            status: WorkItemStatus::default(),
            is_expanded: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_assigned_to(&self, member_id: &str) -> bool {
        self.assigned_members.iter().any(|m| m == member_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Access to the shared base record of any hierarchy level.
pub trait WorkItem {
    fn base(&self) -> &WorkItemBase;
    fn base_mut(&mut self) -> &mut WorkItemBase;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn title(&self) -> &str {
        &self.base().title
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    #[serde(flatten)]
    pub base: WorkItemBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_outcome: Option<String>,

    #[serde(default)]
    pub epics: Vec<Epic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    #[serde(flatten)]
    pub base: WorkItemBase,

    pub parent_initiative_id: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(flatten)]
    pub base: WorkItemBase,

    pub parent_epic_id: String,

    #[serde(default)]
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(flatten)]
    pub base: WorkItemBase,

    pub parent_feature_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<StoryPoints>,
}

impl Initiative {
    pub fn new(id: String, title: String) -> Self {
        Self {
            base: WorkItemBase::new(id, WorkItemType::Initiative, title),
            problem_statement: None,
            desired_outcome: None,
            epics: Vec::new(),
        }
    }
}

impl Epic {
    pub fn new(id: String, title: String, parent_initiative_id: String) -> Self {
        Self {
            base: WorkItemBase::new(id, WorkItemType::Epic, title),
            parent_initiative_id,
            features: Vec::new(),
        }
    }
}

impl Feature {
    pub fn new(id: String, title: String, parent_epic_id: String) -> Self {
        Self {
            base: WorkItemBase::new(id, WorkItemType::Feature, title),
            parent_epic_id,
            stories: Vec::new(),
        }
    }
}

impl Story {
    pub fn new(id: String, title: String, parent_feature_id: String) -> Self {
        Self {
            base: WorkItemBase::new(id, WorkItemType::Story, title),
            parent_feature_id,
            story_points: None,
        }
    }
}

macro_rules! impl_work_item {
    ($($ty:ty),*) => {
        $(
            impl WorkItem for $ty {
                fn base(&self) -> &WorkItemBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut WorkItemBase {
                    &mut self.base
                }
            }
        )*
    };
}

impl_work_item!(Initiative, Epic, Feature, Story);

/// A borrowed view of any work item, discriminated by hierarchy level.
#[derive(Debug, Clone, Copy)]
pub enum WorkItemRef<'a> {
    Initiative(&'a Initiative),
    Epic(&'a Epic),
    Feature(&'a Feature),
    Story(&'a Story),
}

impl<'a> WorkItemRef<'a> {
    pub fn base(&self) -> &'a WorkItemBase {
        match self {
            WorkItemRef::Initiative(i) => &i.base,
            WorkItemRef::Epic(e) => &e.base,
            WorkItemRef::Feature(f) => &f.base,
            WorkItemRef::Story(s) => &s.base,
        }
    }

    pub fn item_type(&self) -> WorkItemType {
        match self {
            WorkItemRef::Initiative(_) => WorkItemType::Initiative,
            WorkItemRef::Epic(_) => WorkItemType::Epic,
            WorkItemRef::Feature(_) => WorkItemType::Feature,
            WorkItemRef::Story(_) => WorkItemType::Story,
        }
    }

    /// The item as a parent, or `None` for a story.
    pub fn as_parent(&self) -> Option<ParentRef<'a>> {
        match *self {
            WorkItemRef::Initiative(i) => Some(ParentRef::Initiative(i)),
            WorkItemRef::Epic(e) => Some(ParentRef::Epic(e)),
            WorkItemRef::Feature(f) => Some(ParentRef::Feature(f)),
            WorkItemRef::Story(_) => None,
        }
    }
}

/// A work item that can own children. Stories are leaves and have no variant here.
#[derive(Debug, Clone, Copy)]
pub enum ParentRef<'a> {
    Initiative(&'a Initiative),
    Epic(&'a Epic),
    Feature(&'a Feature),
}
