//! Data models for the roadmap.
//!
//! This module defines the core data structures:
//!
//! - [`RoadmapData`]: The persisted snapshot (team, initiatives, sprint config)
//! - [`Initiative`], [`Epic`], [`Feature`], [`Story`]: The four hierarchy levels,
//!   each embedding a shared [`WorkItemBase`]
//! - [`TeamMember`]: People work items are assigned to
//! - [`SprintConfig`]: Cadence and sprint/increment/quarter sizing
//! - [`ItemPath`]: Addresses a nested work item from its root initiative

mod path;
mod roadmap;
mod team;
mod types;
mod work_item;

pub use path::ItemPath;
pub use roadmap::{RoadmapData, SprintConfig};
pub use team::TeamMember;
pub use types::{SprintCadence, StoryPoints, TeamRole, WorkItemStatus, WorkItemType};
pub use work_item::{
    Epic, Feature, Initiative, ParentRef, Story, WorkItem, WorkItemBase, WorkItemRef,
};
