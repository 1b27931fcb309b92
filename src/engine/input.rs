//! Drafts (input for `add_*`) and patches (input for `update_*`).
//!
//! A `None` patch field leaves the target untouched. Optional target fields
//! take `Option<Option<_>>` so `Some(None)` clears them.

use crate::model::{
    Epic, Feature, Initiative, SprintCadence, SprintConfig, Story, StoryPoints, TeamMember,
    TeamRole, WorkItemBase, WorkItemStatus, WorkItemType,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: TeamRole,
    pub email: Option<String>,
}

impl NewTeamMember {
    pub fn new(name: impl Into<String>, role: TeamRole) -> Self {
        Self {
            name: name.into(),
            role,
            email: None,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub(crate) fn into_member(self, id: String) -> TeamMember {
        TeamMember::new(id, self.name, self.role).with_email(self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<TeamRole>,
    pub email: Option<Option<String>>,
}

impl TeamMemberPatch {
    pub fn apply(&self, member: &mut TeamMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
    }
}

/// Fields common to every new work item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemDraft {
    pub title: String,
    pub description: Option<String>,
    pub sprint_number: Option<u32>,
    pub assigned_members: Vec<String>,
    pub status: WorkItemStatus,
    pub is_expanded: bool,
}

impl WorkItemDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_sprint(mut self, sprint_number: Option<u32>) -> Self {
        self.sprint_number = sprint_number;
        self
    }

    pub fn with_assigned(mut self, assigned_members: Vec<String>) -> Self {
        self.assigned_members = assigned_members;
        self
    }

    pub fn with_status(mut self, status: WorkItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn expanded(mut self, is_expanded: bool) -> Self {
        self.is_expanded = is_expanded;
        self
    }

    fn into_base(self, id: String, item_type: WorkItemType) -> WorkItemBase {
        let mut base = WorkItemBase::new(id, item_type, self.title);
        base.description = self.description;
        base.sprint_number = self.sprint_number;
        base.assigned_members = self.assigned_members;
        base.status = self.status;
        base.is_expanded = self.is_expanded;
        base
    }

    pub(crate) fn into_epic(self, id: String, parent_initiative_id: &str) -> Epic {
        Epic {
            base: self.into_base(id, WorkItemType::Epic),
            parent_initiative_id: parent_initiative_id.to_string(),
            features: Vec::new(),
        }
    }

    pub(crate) fn into_feature(self, id: String, parent_epic_id: &str) -> Feature {
        Feature {
            base: self.into_base(id, WorkItemType::Feature),
            parent_epic_id: parent_epic_id.to_string(),
            stories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiativeDraft {
    pub item: WorkItemDraft,
    pub problem_statement: Option<String>,
    pub desired_outcome: Option<String>,
}

impl InitiativeDraft {
    pub fn new(item: WorkItemDraft) -> Self {
        Self {
            item,
            problem_statement: None,
            desired_outcome: None,
        }
    }

    pub(crate) fn into_initiative(self, id: String) -> Initiative {
        Initiative {
            base: self.item.into_base(id, WorkItemType::Initiative),
            problem_statement: self.problem_statement,
            desired_outcome: self.desired_outcome,
            epics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryDraft {
    pub item: WorkItemDraft,
    pub story_points: Option<StoryPoints>,
}

impl StoryDraft {
    pub fn new(item: WorkItemDraft) -> Self {
        Self {
            item,
            story_points: None,
        }
    }

    pub(crate) fn into_story(self, id: String, parent_feature_id: &str) -> Story {
        Story {
            base: self.item.into_base(id, WorkItemType::Story),
            parent_feature_id: parent_feature_id.to_string(),
            story_points: self.story_points,
        }
    }
}

/// Changes to the shared work item fields. `id`, `type`, children and parent
/// references are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub sprint_number: Option<Option<u32>>,
    pub assigned_members: Option<Vec<String>>,
    pub status: Option<WorkItemStatus>,
    pub is_expanded: Option<bool>,
}

impl WorkItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == WorkItemPatch::default()
    }

    pub fn apply(&self, base: &mut WorkItemBase) {
        if let Some(title) = &self.title {
            base.title = title.clone();
        }
        if let Some(description) = &self.description {
            base.description = description.clone();
        }
        if let Some(sprint_number) = self.sprint_number {
            base.sprint_number = sprint_number;
        }
        if let Some(assigned) = &self.assigned_members {
            base.assigned_members = assigned.clone();
        }
        if let Some(status) = self.status {
            base.status = status;
        }
        if let Some(is_expanded) = self.is_expanded {
            base.is_expanded = is_expanded;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiativePatch {
    pub item: WorkItemPatch,
    pub problem_statement: Option<Option<String>>,
    pub desired_outcome: Option<Option<String>>,
}

impl InitiativePatch {
    pub fn apply(&self, initiative: &mut Initiative) {
        self.item.apply(&mut initiative.base);
        if let Some(problem) = &self.problem_statement {
            initiative.problem_statement = problem.clone();
        }
        if let Some(outcome) = &self.desired_outcome {
            initiative.desired_outcome = outcome.clone();
        }
    }
}

impl From<WorkItemPatch> for InitiativePatch {
    fn from(item: WorkItemPatch) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryPatch {
    pub item: WorkItemPatch,
    pub story_points: Option<Option<StoryPoints>>,
}

impl StoryPatch {
    pub fn apply(&self, story: &mut Story) {
        self.item.apply(&mut story.base);
        if let Some(points) = self.story_points {
            story.story_points = points;
        }
    }
}

impl From<WorkItemPatch> for StoryPatch {
    fn from(item: WorkItemPatch) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }
}

/// Changes to the sprint configuration. Merged verbatim: `total_sprints` is
/// not derived from the factor fields here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintConfigPatch {
    pub cadence: Option<SprintCadence>,
    pub sprints_per_increment: Option<u32>,
    pub increments_per_quarter: Option<u32>,
    pub planning_start_date: Option<DateTime<Utc>>,
    pub total_sprints: Option<u32>,
}

impl SprintConfigPatch {
    /// Whether the patch changes one of the factors `total_sprints` is derived from.
    pub fn changes_factors(&self) -> bool {
        self.sprints_per_increment.is_some() || self.increments_per_quarter.is_some()
    }

    pub fn apply(&self, config: &mut SprintConfig) {
        if let Some(cadence) = self.cadence {
            config.cadence = cadence;
        }
        if let Some(spi) = self.sprints_per_increment {
            config.sprints_per_increment = spi;
        }
        if let Some(ipq) = self.increments_per_quarter {
            config.increments_per_quarter = ipq;
        }
        if let Some(start) = self.planning_start_date {
            config.planning_start_date = start;
        }
        if let Some(total) = self.total_sprints {
            config.total_sprints = total;
        }
    }
}
