use super::input::{
    InitiativeDraft, InitiativePatch, StoryDraft, StoryPatch, WorkItemDraft, WorkItemPatch,
};
use crate::id::generate_id;
use crate::model::{ItemPath, RoadmapData, WorkItem, WorkItemType};

/// Run `op` on the item with `id`. When `op` reports a change, the item's
/// `updated_at` is refreshed, which is how a nested change reaches every
/// ancestor on its path. Returns whether anything changed.
fn modify<T: WorkItem>(items: &mut [T], id: &str, op: impl FnOnce(&mut T) -> bool) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
        return false;
    };
    if !op(item) {
        return false;
    }
    item.base_mut().touch();
    true
}

fn remove<T: WorkItem>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

impl RoadmapData {
    pub fn add_initiative(&self, draft: InitiativeDraft) -> Self {
        self.insert_initiative(generate_id(WorkItemType::Initiative.id_prefix()), draft)
    }

    /// Append an initiative under a caller-chosen id.
    pub fn insert_initiative(&self, id: String, draft: InitiativeDraft) -> Self {
        let mut next = self.clone();
        next.initiatives.push(draft.into_initiative(id));
        next
    }

    pub fn update_initiative(&self, id: &str, patch: &InitiativePatch) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, id, |initiative| {
            patch.apply(initiative);
            true
        });
        next
    }

    /// Removes the initiative together with every epic, feature and story it owns.
    pub fn delete_initiative(&self, id: &str) -> Self {
        let mut next = self.clone();
        remove(&mut next.initiatives, id);
        next
    }

    pub fn add_epic(&self, initiative_id: &str, draft: WorkItemDraft) -> Self {
        self.insert_epic(
            initiative_id,
            generate_id(WorkItemType::Epic.id_prefix()),
            draft,
        )
    }

    pub fn insert_epic(&self, initiative_id: &str, id: String, draft: WorkItemDraft) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            initiative.epics.push(draft.into_epic(id, initiative_id));
            true
        });
        next
    }

    pub fn update_epic(&self, initiative_id: &str, epic_id: &str, patch: &WorkItemPatch) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                patch.apply(&mut epic.base);
                true
            })
        });
        next
    }

    pub fn delete_epic(&self, initiative_id: &str, epic_id: &str) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            remove(&mut initiative.epics, epic_id)
        });
        next
    }

    pub fn add_feature(&self, initiative_id: &str, epic_id: &str, draft: WorkItemDraft) -> Self {
        self.insert_feature(
            initiative_id,
            epic_id,
            generate_id(WorkItemType::Feature.id_prefix()),
            draft,
        )
    }

    pub fn insert_feature(
        &self,
        initiative_id: &str,
        epic_id: &str,
        id: String,
        draft: WorkItemDraft,
    ) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                epic.features.push(draft.into_feature(id, epic_id));
                true
            })
        });
        next
    }

    pub fn update_feature(
        &self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        patch: &WorkItemPatch,
    ) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                modify(&mut epic.features, feature_id, |feature| {
                    patch.apply(&mut feature.base);
                    true
                })
            })
        });
        next
    }

    pub fn delete_feature(&self, initiative_id: &str, epic_id: &str, feature_id: &str) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                remove(&mut epic.features, feature_id)
            })
        });
        next
    }

    pub fn add_story(
        &self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        draft: StoryDraft,
    ) -> Self {
        self.insert_story(
            initiative_id,
            epic_id,
            feature_id,
            generate_id(WorkItemType::Story.id_prefix()),
            draft,
        )
    }

    pub fn insert_story(
        &self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        id: String,
        draft: StoryDraft,
    ) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                modify(&mut epic.features, feature_id, |feature| {
                    feature.stories.push(draft.into_story(id, feature_id));
                    true
                })
            })
        });
        next
    }

    pub fn update_story(
        &self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        story_id: &str,
        patch: &StoryPatch,
    ) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                modify(&mut epic.features, feature_id, |feature| {
                    modify(&mut feature.stories, story_id, |story| {
                        patch.apply(story);
                        true
                    })
                })
            })
        });
        next
    }

    pub fn delete_story(
        &self,
        initiative_id: &str,
        epic_id: &str,
        feature_id: &str,
        story_id: &str,
    ) -> Self {
        let mut next = self.clone();
        modify(&mut next.initiatives, initiative_id, |initiative| {
            modify(&mut initiative.epics, epic_id, |epic| {
                modify(&mut epic.features, feature_id, |feature| {
                    remove(&mut feature.stories, story_id)
                })
            })
        });
        next
    }

    /// Apply the shared-field patch to whichever level `path` points at.
    pub fn update_item(&self, path: &ItemPath, patch: &WorkItemPatch) -> Self {
        match path {
            ItemPath::Initiative { initiative } => {
                self.update_initiative(initiative, &InitiativePatch::from(patch.clone()))
            }
            ItemPath::Epic { initiative, epic } => self.update_epic(initiative, epic, patch),
            ItemPath::Feature {
                initiative,
                epic,
                feature,
            } => self.update_feature(initiative, epic, feature, patch),
            ItemPath::Story {
                initiative,
                epic,
                feature,
                story,
            } => self.update_story(
                initiative,
                epic,
                feature,
                story,
                &StoryPatch::from(patch.clone()),
            ),
        }
    }

    pub fn delete_item(&self, path: &ItemPath) -> Self {
        match path {
            ItemPath::Initiative { initiative } => self.delete_initiative(initiative),
            ItemPath::Epic { initiative, epic } => self.delete_epic(initiative, epic),
            ItemPath::Feature {
                initiative,
                epic,
                feature,
            } => self.delete_feature(initiative, epic, feature),
            ItemPath::Story {
                initiative,
                epic,
                feature,
                story,
            } => self.delete_story(initiative, epic, feature, story),
        }
    }

    /// Flip the expand/collapse flag of the item at `path`. Goes through the
    /// regular update path, so ancestors are touched as for any edit.
    pub fn toggle_expanded(&self, path: &ItemPath) -> Self {
        let Some(current) = crate::query::item_at(&self.initiatives, path) else {
            return self.clone();
        };
        let patch = WorkItemPatch {
            is_expanded: Some(!current.base().is_expanded),
            ..WorkItemPatch::default()
        };
        self.update_item(path, &patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StoryPoints, WorkItemStatus};
    use crate::query::{count_children, find_item};
    use crate::testing::{fixed_time, roadmap};

    fn total_items(data: &RoadmapData) -> usize {
        data.initiatives
            .iter()
            .map(|i| 1 + count_children(crate::model::ParentRef::Initiative(i)).total)
            .sum()
    }

    #[test]
    fn test_add_initiative_starts_empty() {
        let data = roadmap();
        let next = data.add_initiative(InitiativeDraft::new(WorkItemDraft::new("Billing")));

        assert_eq!(data.initiatives.len(), 2);
        assert_eq!(next.initiatives.len(), 3);
        let added = next.initiatives.last().unwrap();
        assert!(added.base.id.starts_with("init-"));
        assert_eq!(added.base.title, "Billing");
        assert_eq!(added.base.item_type, WorkItemType::Initiative);
        assert!(added.epics.is_empty());
        assert_eq!(added.base.created_at, added.base.updated_at);
    }

    #[test]
    fn test_add_epic_sets_parent_and_touches_initiative() {
        let data = roadmap();
        let next = data.insert_epic("init-2", "epic-new".to_string(), WorkItemDraft::new("New"));

        let initiative = &next.initiatives[1];
        let epic = initiative.epics.last().unwrap();
        assert_eq!(epic.parent_initiative_id, "init-2");
        assert_eq!(epic.base.item_type, WorkItemType::Epic);
        assert!(initiative.base.updated_at > fixed_time());
        // sibling initiative untouched
        assert_eq!(next.initiatives[0], data.initiatives[0]);
    }

    #[test]
    fn test_add_feature_touches_epic_and_initiative() {
        let data = roadmap();
        let next = data.insert_feature(
            "init-1",
            "epic-2",
            "feat-new".to_string(),
            WorkItemDraft::new("Widget"),
        );

        let initiative = &next.initiatives[0];
        let epic = &initiative.epics[1];
        assert_eq!(epic.features.last().unwrap().parent_epic_id, "epic-2");
        assert!(epic.base.updated_at > fixed_time());
        assert!(initiative.base.updated_at > fixed_time());
        assert_eq!(initiative.epics[0], data.initiatives[0].epics[0]);
    }

    #[test]
    fn test_add_story_keeps_points_and_parent() {
        let data = roadmap();
        let mut draft = StoryDraft::new(WorkItemDraft::new("Login form").with_sprint(Some(2)));
        draft.story_points = Some(StoryPoints::Five);
        let next = data.insert_story("init-1", "epic-1", "feat-2", "story-new".to_string(), draft);

        let feature = &next.initiatives[0].epics[0].features[1];
        let story = feature.stories.last().unwrap();
        assert_eq!(story.parent_feature_id, "feat-2");
        assert_eq!(story.story_points, Some(StoryPoints::Five));
        assert_eq!(story.base.sprint_number, Some(2));
        assert!(feature.base.updated_at > fixed_time());
    }

    #[test]
    fn test_update_story_propagates_updated_at_to_ancestors_only() {
        let data = roadmap();
        let patch = StoryPatch {
            item: WorkItemPatch {
                status: Some(WorkItemStatus::Completed),
                ..WorkItemPatch::default()
            },
            story_points: Some(Some(StoryPoints::Eight)),
        };
        let next = data.update_story("init-1", "epic-1", "feat-1", "story-2", &patch);

        let initiative = &next.initiatives[0];
        let epic = &initiative.epics[0];
        let feature = &epic.features[0];
        let story = &feature.stories[1];

        assert_eq!(story.base.status, WorkItemStatus::Completed);
        assert_eq!(story.story_points, Some(StoryPoints::Eight));
        for updated in [
            story.base.updated_at,
            feature.base.updated_at,
            epic.base.updated_at,
            initiative.base.updated_at,
        ] {
            assert!(updated > fixed_time());
        }

        // siblings at every level keep their timestamps
        assert_eq!(feature.stories[0], data.initiatives[0].epics[0].features[0].stories[0]);
        assert_eq!(epic.features[1], data.initiatives[0].epics[0].features[1]);
        assert_eq!(initiative.epics[1], data.initiatives[0].epics[1]);
        assert_eq!(next.initiatives[1], data.initiatives[1]);
    }

    #[test]
    fn test_update_initiative_never_changes_identity_or_children() {
        let data = roadmap();
        let patch = InitiativePatch {
            item: WorkItemPatch {
                title: Some("Renamed".to_string()),
                description: Some(Some("Now with a description".to_string())),
                ..WorkItemPatch::default()
            },
            problem_statement: Some(Some("Too slow".to_string())),
            desired_outcome: None,
        };
        let next = data.update_initiative("init-1", &patch);

        let updated = &next.initiatives[0];
        let original = &data.initiatives[0];
        assert_eq!(updated.base.title, "Renamed");
        assert_eq!(updated.problem_statement.as_deref(), Some("Too slow"));
        assert_eq!(updated.base.id, original.base.id);
        assert_eq!(updated.base.item_type, WorkItemType::Initiative);
        assert_eq!(updated.epics, original.epics);
        assert_eq!(updated.base.created_at, original.base.created_at);
        assert!(updated.base.updated_at > original.base.updated_at);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let data = roadmap().update_epic(
            "init-1",
            "epic-1",
            &WorkItemPatch {
                sprint_number: Some(Some(4)),
                ..WorkItemPatch::default()
            },
        );
        assert_eq!(data.initiatives[0].epics[0].base.sprint_number, Some(4));

        let cleared = data.update_epic(
            "init-1",
            "epic-1",
            &WorkItemPatch {
                sprint_number: Some(None),
                ..WorkItemPatch::default()
            },
        );
        assert_eq!(cleared.initiatives[0].epics[0].base.sprint_number, None);
    }

    #[test]
    fn test_delete_initiative_cascades() {
        let data = roadmap();
        // init-1 owns 2 epics, 3 features and 4 stories
        let removed = 1 + 2 + 3 + 4;
        let next = data.delete_initiative("init-1");

        assert_eq!(total_items(&data) - total_items(&next), removed);
        assert_eq!(next.initiatives.len(), 1);
        assert_eq!(next.initiatives[0], data.initiatives[1]);
        assert!(find_item(&next.initiatives, "story-1").is_none());
    }

    #[test]
    fn test_delete_epic_removes_descendants_not_siblings() {
        let data = roadmap();
        let next = data.delete_epic("init-1", "epic-1");

        let initiative = &next.initiatives[0];
        assert_eq!(initiative.epics.len(), 1);
        assert_eq!(initiative.epics[0], data.initiatives[0].epics[1]);
        assert_eq!(total_items(&data) - total_items(&next), 1 + 2 + 3);
        assert!(initiative.base.updated_at > fixed_time());
    }

    #[test]
    fn test_delete_story_touches_ancestors() {
        let data = roadmap();
        let next = data.delete_story("init-1", "epic-1", "feat-1", "story-1");

        let feature = &next.initiatives[0].epics[0].features[0];
        assert_eq!(feature.stories.len(), 1);
        assert_eq!(feature.stories[0].base.id, "story-2");
        assert!(feature.base.updated_at > fixed_time());
        assert!(next.initiatives[0].base.updated_at > fixed_time());
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let data = roadmap();

        assert_eq!(data.update_initiative("nope", &InitiativePatch::default()), data);
        assert_eq!(data.delete_initiative("nope"), data);
        assert_eq!(data.add_epic("nope", WorkItemDraft::new("x")), data);
        assert_eq!(data.update_epic("init-1", "nope", &WorkItemPatch::default()), data);
        assert_eq!(data.delete_epic("init-1", "nope"), data);
        assert_eq!(data.add_feature("init-1", "nope", WorkItemDraft::new("x")), data);
        assert_eq!(data.delete_feature("init-1", "epic-1", "nope"), data);
        assert_eq!(
            data.add_story("init-1", "epic-1", "nope", StoryDraft::new(WorkItemDraft::new("x"))),
            data
        );
        assert_eq!(
            data.update_story("init-1", "epic-1", "feat-1", "nope", &StoryPatch::default()),
            data
        );
        assert_eq!(data.delete_story("init-2", "epic-1", "feat-1", "story-1"), data);
    }

    #[test]
    fn test_mutations_leave_input_untouched() {
        let data = roadmap();
        let snapshot = data.clone();
        let _ = data.delete_initiative("init-1");
        let _ = data.add_story("init-1", "epic-1", "feat-1", StoryDraft::new(WorkItemDraft::new("x")));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_toggle_expanded_flips_flag() {
        let data = roadmap();
        let path = ItemPath::Feature {
            initiative: "init-1".to_string(),
            epic: "epic-2".to_string(),
            feature: "feat-3".to_string(),
        };
        let once = data.toggle_expanded(&path);
        assert!(once.initiatives[0].epics[1].features[0].base.is_expanded);

        let twice = once.toggle_expanded(&path);
        assert!(!twice.initiatives[0].epics[1].features[0].base.is_expanded);
    }

    #[test]
    fn test_update_item_dispatches_by_level() {
        let data = roadmap();
        let (path, _) = find_item(&data.initiatives, "story-3").unwrap();
        let next = data.update_item(
            &path,
            &WorkItemPatch {
                title: Some("Renamed story".to_string()),
                ..WorkItemPatch::default()
            },
        );
        let (_, item) = find_item(&next.initiatives, "story-3").unwrap();
        assert_eq!(item.base().title, "Renamed story");
    }

    #[test]
    fn test_delete_item_by_path() {
        let data = roadmap();
        let (path, _) = find_item(&data.initiatives, "feat-2").unwrap();
        let next = data.delete_item(&path);
        assert!(find_item(&next.initiatives, "feat-2").is_none());
        assert!(find_item(&next.initiatives, "story-3").is_none());
        assert!(find_item(&next.initiatives, "feat-1").is_some());
    }
}
