use crate::model::{Initiative, ItemPath, WorkItem, WorkItemRef};

/// Find a work item anywhere in the hierarchy by id, depth first.
pub fn find_item<'a>(
    initiatives: &'a [Initiative],
    id: &str,
) -> Option<(ItemPath, WorkItemRef<'a>)> {
    for initiative in initiatives {
        let i = initiative.id();
        if i == id {
            return Some((
                ItemPath::Initiative {
                    initiative: i.to_string(),
                },
                WorkItemRef::Initiative(initiative),
            ));
        }
        for epic in &initiative.epics {
            let e = epic.id();
            if e == id {
                return Some((
                    ItemPath::Epic {
                        initiative: i.to_string(),
                        epic: e.to_string(),
                    },
                    WorkItemRef::Epic(epic),
                ));
            }
            for feature in &epic.features {
                let f = feature.id();
                if f == id {
                    return Some((
                        ItemPath::Feature {
                            initiative: i.to_string(),
                            epic: e.to_string(),
                            feature: f.to_string(),
                        },
                        WorkItemRef::Feature(feature),
                    ));
                }
                if let Some(story) = feature.stories.iter().find(|s| s.id() == id) {
                    return Some((
                        ItemPath::Story {
                            initiative: i.to_string(),
                            epic: e.to_string(),
                            feature: f.to_string(),
                            story: story.id().to_string(),
                        },
                        WorkItemRef::Story(story),
                    ));
                }
            }
        }
    }
    None
}

/// Resolve a path to the item it addresses.
pub fn item_at<'a>(initiatives: &'a [Initiative], path: &ItemPath) -> Option<WorkItemRef<'a>> {
    let initiative = initiatives
        .iter()
        .find(|i| i.id() == path.initiative_id())?;

    match path {
        ItemPath::Initiative { .. } => Some(WorkItemRef::Initiative(initiative)),
        ItemPath::Epic { epic, .. } => initiative
            .epics
            .iter()
            .find(|e| e.id() == epic.as_str())
            .map(WorkItemRef::Epic),
        ItemPath::Feature { epic, feature, .. } => initiative
            .epics
            .iter()
            .find(|e| e.id() == epic.as_str())?
            .features
            .iter()
            .find(|f| f.id() == feature.as_str())
            .map(WorkItemRef::Feature),
        ItemPath::Story {
            epic,
            feature,
            story,
            ..
        } => initiative
            .epics
            .iter()
            .find(|e| e.id() == epic.as_str())?
            .features
            .iter()
            .find(|f| f.id() == feature.as_str())?
            .stories
            .iter()
            .find(|s| s.id() == story.as_str())
            .map(WorkItemRef::Story),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkItemType;
    use crate::testing::roadmap;

    #[test]
    fn test_find_item_builds_full_path() {
        let data = roadmap();
        let (path, item) = find_item(&data.initiatives, "story-4").unwrap();
        assert_eq!(path.to_string(), "init-1/epic-2/feat-3/story-4");
        assert_eq!(item.item_type(), WorkItemType::Story);
        assert_eq!(item.base().id, "story-4");
    }

    #[test]
    fn test_find_item_each_level() {
        let data = roadmap();
        for (id, kind) in [
            ("init-2", WorkItemType::Initiative),
            ("epic-3", WorkItemType::Epic),
            ("feat-2", WorkItemType::Feature),
        ] {
            let (path, item) = find_item(&data.initiatives, id).unwrap();
            assert_eq!(path.item_type(), kind);
            assert_eq!(item.item_type(), kind);
        }
        assert!(find_item(&data.initiatives, "missing").is_none());
    }

    #[test]
    fn test_item_at_round_trips_find_item() {
        let data = roadmap();
        let (path, _) = find_item(&data.initiatives, "story-2").unwrap();
        let item = item_at(&data.initiatives, &path).unwrap();
        assert_eq!(item.base().id, "story-2");
    }

    #[test]
    fn test_item_at_rejects_wrong_container() {
        let data = roadmap();
        let path = ItemPath::Feature {
            initiative: "init-2".to_string(),
            epic: "epic-1".to_string(),
            feature: "feat-1".to_string(),
        };
        assert!(item_at(&data.initiatives, &path).is_none());
    }
}
