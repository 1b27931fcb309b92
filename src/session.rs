//! The editing session a front end drives.
//!
//! A session holds the current snapshot and the last snapshot that reached
//! storage. Every operation validates its input, runs the matching engine
//! transform, and saves the result. A failed save keeps the new snapshot in
//! memory and leaves the session dirty.

use crate::engine::{
    InitiativeDraft, InitiativePatch, NewTeamMember, SprintConfigPatch, StoryDraft, StoryPatch,
    TeamMemberPatch, WorkItemDraft, WorkItemPatch,
};
use crate::error::{Result, SprintmapError};
use crate::id::{TEAM_MEMBER_PREFIX, generate_id};
use crate::model::{ItemPath, RoadmapData, WorkItemType};
use crate::query::{find_item, is_team_member_assigned, item_at};
use crate::storage::{RoadmapStore, parse_import};
use crate::validation::{
    ValidationErrors, derive_total_sprints, validate_assignees, validate_draft,
    validate_new_team_member, validate_patch, validate_sprint_config, validate_team_member_patch,
};

pub struct RoadmapSession {
    store: RoadmapStore,
    current: RoadmapData,
    last_persisted: RoadmapData,
}

impl RoadmapSession {
    /// Load from `store`, falling back to the default dataset on failure.
    pub fn open(store: RoadmapStore) -> Self {
        let data = store.load();
        Self::with_data(store, data)
    }

    /// Like [`RoadmapSession::open`], but a stored value that cannot be read
    /// is reported instead of replaced by defaults.
    pub fn try_open(store: RoadmapStore) -> Result<Self> {
        let data = store.load_checked()?;
        Ok(Self::with_data(store, data))
    }

    fn with_data(store: RoadmapStore, data: RoadmapData) -> Self {
        Self {
            store,
            last_persisted: data.clone(),
            current: data,
        }
    }

    pub fn current(&self) -> &RoadmapData {
        &self.current
    }

    pub fn store(&self) -> &RoadmapStore {
        &self.store
    }

    /// Whether the current snapshot differs from what was last saved.
    pub fn is_dirty(&self) -> bool {
        !self.current.same_content(&self.last_persisted)
    }

    /// Save the current snapshot. Returns whether it reached storage.
    pub fn persist(&mut self) -> bool {
        if self.store.save(&self.current) {
            self.last_persisted = self.current.clone();
            true
        } else {
            tracing::warn!("Changes kept in memory only, save failed");
            false
        }
    }

    fn commit(&mut self, next: RoadmapData) {
        self.current = next;
        self.persist();
    }

    /// Path of the work item with `id`.
    pub fn locate(&self, id: &str) -> Result<ItemPath> {
        find_item(&self.current.initiatives, id)
            .map(|(path, _)| path)
            .ok_or_else(|| SprintmapError::NotFound(id.to_string()))
    }

    fn require(&self, path: &ItemPath) -> Result<()> {
        match item_at(&self.current.initiatives, path) {
            Some(_) => Ok(()),
            None => Err(SprintmapError::NotFound(path.to_string())),
        }
    }

    fn check_draft(&self, draft: &WorkItemDraft) -> Result<()> {
        validate_draft(draft, Some(&self.current.sprint_config))?;
        validate_assignees(&draft.assigned_members, &self.current.team_members)?;
        Ok(())
    }

    fn check_patch(&self, patch: &WorkItemPatch) -> Result<()> {
        validate_patch(patch, Some(&self.current.sprint_config))?;
        if let Some(assigned) = &patch.assigned_members {
            validate_assignees(assigned, &self.current.team_members)?;
        }
        Ok(())
    }

    pub fn add_team_member(&mut self, member: NewTeamMember) -> Result<String> {
        validate_new_team_member(&member)?;
        let id = generate_id(TEAM_MEMBER_PREFIX);
        tracing::info!(id = %id, name = %member.name, "Adding team member");
        let next = self.current.insert_team_member(id.clone(), member);
        self.commit(next);
        Ok(id)
    }

    pub fn update_team_member(&mut self, id: &str, patch: &TeamMemberPatch) -> Result<()> {
        validate_team_member_patch(patch)?;
        if self.current.team_member(id).is_none() {
            return Err(SprintmapError::NotFound(id.to_string()));
        }
        let next = self.current.update_team_member(id, patch);
        self.commit(next);
        Ok(())
    }

    /// Refused while any work item still lists the member.
    pub fn delete_team_member(&mut self, id: &str) -> Result<()> {
        let member = self
            .current
            .team_member(id)
            .ok_or_else(|| SprintmapError::NotFound(id.to_string()))?;
        if is_team_member_assigned(id, &self.current.initiatives) {
            return Err(SprintmapError::MemberAssigned {
                id: id.to_string(),
                name: member.name.clone(),
            });
        }
        tracing::info!(id = %id, "Deleting team member");
        let next = self.current.delete_team_member(id);
        self.commit(next);
        Ok(())
    }

    pub fn add_initiative(&mut self, draft: InitiativeDraft) -> Result<String> {
        self.check_draft(&draft.item)?;
        let id = generate_id(WorkItemType::Initiative.id_prefix());
        tracing::info!(id = %id, title = %draft.item.title, "Adding initiative");
        let next = self.current.insert_initiative(id.clone(), draft);
        self.commit(next);
        Ok(id)
    }

    pub fn add_epic(&mut self, initiative_id: &str, draft: WorkItemDraft) -> Result<String> {
        self.require(&ItemPath::Initiative {
            initiative: initiative_id.to_string(),
        })?;
        self.check_draft(&draft)?;
        let id = generate_id(WorkItemType::Epic.id_prefix());
        tracing::info!(id = %id, parent = %initiative_id, "Adding epic");
        let next = self.current.insert_epic(initiative_id, id.clone(), draft);
        self.commit(next);
        Ok(id)
    }

    pub fn add_feature(
        &mut self,
        initiative_id: &str,
        epic_id: &str,
        draft: WorkItemDraft,
    ) -> Result<String> {
        self.require(&ItemPath::Epic {
            initiative: initiative_id.to_string(),
            epic: epic_id.to_string(),
        })?;
        self.check_draft(&draft)?;
        let id = generate_id(WorkItemType::Feature.id_prefix());
        tracing::info!(id = %id, parent = %epic_id, "Adding feature");
        let next = self
            .current
            .insert_feature(initiative_id, epic_id, id.clone(), draft);
        self.commit(next);
        Ok(id)
    }

    pub fn add_story(
        &mut self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        draft: StoryDraft,
    ) -> Result<String> {
        self.require(&ItemPath::Feature {
            initiative: initiative_id.to_string(),
            epic: epic_id.to_string(),
            feature: feature_id.to_string(),
        })?;
        self.check_draft(&draft.item)?;
        let id = generate_id(WorkItemType::Story.id_prefix());
        tracing::info!(id = %id, parent = %feature_id, "Adding story");
        let next = self
            .current
            .insert_story(initiative_id, epic_id, feature_id, id.clone(), draft);
        self.commit(next);
        Ok(id)
    }

    /// Add a child under the item at `parent`, whatever its level.
    pub fn add_child(&mut self, parent: &ItemPath, draft: StoryDraft) -> Result<String> {
        match parent {
            ItemPath::Initiative { initiative } => self.add_epic(initiative, draft.item),
            ItemPath::Epic { initiative, epic } => self.add_feature(initiative, epic, draft.item),
            ItemPath::Feature {
                initiative,
                epic,
                feature,
            } => self.add_story(initiative, epic, feature, draft),
            ItemPath::Story { story, .. } => {
                let mut errors = ValidationErrors::new();
                errors.add("parent", format!("Stories cannot have children: {}", story));
                Err(errors.into())
            }
        }
    }

    pub fn update_item(&mut self, path: &ItemPath, patch: &WorkItemPatch) -> Result<()> {
        self.require(path)?;
        self.check_patch(patch)?;
        let next = self.current.update_item(path, patch);
        self.commit(next);
        Ok(())
    }

    pub fn update_initiative(&mut self, id: &str, patch: &InitiativePatch) -> Result<()> {
        self.require(&ItemPath::Initiative {
            initiative: id.to_string(),
        })?;
        self.check_patch(&patch.item)?;
        let next = self.current.update_initiative(id, patch);
        self.commit(next);
        Ok(())
    }

    pub fn update_story(&mut self, path: &ItemPath, patch: &StoryPatch) -> Result<()> {
        let ItemPath::Story {
            initiative,
            epic,
            feature,
            story,
        } = path
        else {
            return Err(SprintmapError::NotFound(format!("story {}", path)));
        };
        self.require(path)?;
        self.check_patch(&patch.item)?;
        let next = self
            .current
            .update_story(initiative, epic, feature, story, patch);
        self.commit(next);
        Ok(())
    }

    pub fn delete_item(&mut self, path: &ItemPath) -> Result<()> {
        self.require(path)?;
        tracing::info!(path = %path, "Deleting work item");
        let next = self.current.delete_item(path);
        self.commit(next);
        Ok(())
    }

    pub fn toggle_expanded(&mut self, path: &ItemPath) -> Result<()> {
        self.require(path)?;
        let next = self.current.toggle_expanded(path);
        self.commit(next);
        Ok(())
    }

    /// Merge `patch` into the sprint configuration. `total_sprints` is
    /// recomputed whenever a factor changes, and the merged configuration
    /// must validate before anything is applied.
    pub fn update_sprint_config(&mut self, patch: &SprintConfigPatch) -> Result<()> {
        let patch = derive_total_sprints(&self.current.sprint_config, patch);
        let mut merged = self.current.sprint_config.clone();
        patch.apply(&mut merged);
        validate_sprint_config(&merged)?;

        tracing::info!(total_sprints = merged.total_sprints, "Updating sprint config");
        let next = self.current.update_sprint_config(&patch);
        self.commit(next);
        Ok(())
    }

    /// Replace everything with an exported document.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let data = parse_import(text)?;
        if !self.store.save(&data) {
            return Err(SprintmapError::Storage(
                "Failed to save imported roadmap".to_string(),
            ));
        }
        tracing::info!(
            initiatives = data.initiatives.len(),
            members = data.team_members.len(),
            "Imported roadmap"
        );
        self.current = data.clone();
        self.last_persisted = data;
        Ok(())
    }

    /// Drop stored data and start over from the default dataset.
    pub fn reset(&mut self) {
        let data = self.store.reset();
        self.current = data.clone();
        self.last_persisted = data;
    }
}
