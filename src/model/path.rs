use super::types::WorkItemType;
use std::fmt;

/// The chain of ids from a root initiative down to one work item.
///
/// Nested mutations are addressed by their full path; the parent
/// back-references stored on items are never used to find a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemPath {
    Initiative {
        initiative: String,
    },
    Epic {
        initiative: String,
        epic: String,
    },
    Feature {
        initiative: String,
        epic: String,
        feature: String,
    },
    Story {
        initiative: String,
        epic: String,
        feature: String,
        story: String,
    },
}

impl ItemPath {
    /// Id of the item the path points at.
    pub fn item_id(&self) -> &str {
        match self {
            ItemPath::Initiative { initiative } => initiative,
            ItemPath::Epic { epic, .. } => epic,
            ItemPath::Feature { feature, .. } => feature,
            ItemPath::Story { story, .. } => story,
        }
    }

    pub fn item_type(&self) -> WorkItemType {
        match self {
            ItemPath::Initiative { .. } => WorkItemType::Initiative,
            ItemPath::Epic { .. } => WorkItemType::Epic,
            ItemPath::Feature { .. } => WorkItemType::Feature,
            ItemPath::Story { .. } => WorkItemType::Story,
        }
    }

    pub fn initiative_id(&self) -> &str {
        match self {
            ItemPath::Initiative { initiative }
            | ItemPath::Epic { initiative, .. }
            | ItemPath::Feature { initiative, .. }
            | ItemPath::Story { initiative, .. } => initiative,
        }
    }

    /// Path of the containing item, `None` for an initiative.
    pub fn parent(&self) -> Option<ItemPath> {
        match self {
            ItemPath::Initiative { .. } => None,
            ItemPath::Epic { initiative, .. } => Some(ItemPath::Initiative {
                initiative: initiative.clone(),
            }),
            ItemPath::Feature {
                initiative, epic, ..
            } => Some(ItemPath::Epic {
                initiative: initiative.clone(),
                epic: epic.clone(),
            }),
            ItemPath::Story {
                initiative,
                epic,
                feature,
                ..
            } => Some(ItemPath::Feature {
                initiative: initiative.clone(),
                epic: epic.clone(),
                feature: feature.clone(),
            }),
        }
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemPath::Initiative { initiative } => write!(f, "{}", initiative),
            ItemPath::Epic { initiative, epic } => write!(f, "{}/{}", initiative, epic),
            ItemPath::Feature {
                initiative,
                epic,
                feature,
            } => write!(f, "{}/{}/{}", initiative, epic, feature),
            ItemPath::Story {
                initiative,
                epic,
                feature,
                story,
            } => write!(f, "{}/{}/{}/{}", initiative, epic, feature, story),
        }
    }
}
