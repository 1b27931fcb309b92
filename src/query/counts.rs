use crate::model::{ParentRef, WorkItemRef};
use serde::Serialize;

/// Descendant counts of a work item. Only the levels below the item are populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epics: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<usize>,
    pub total: usize,
}

pub fn count_children(item: ParentRef<'_>) -> ItemCounts {
    let mut counts = match item {
        ParentRef::Initiative(initiative) => {
            let features = initiative.epics.iter().map(|e| e.features.len()).sum();
            let stories = initiative
                .epics
                .iter()
                .flat_map(|e| &e.features)
                .map(|f| f.stories.len())
                .sum();
            ItemCounts {
                epics: Some(initiative.epics.len()),
                features: Some(features),
                stories: Some(stories),
                total: 0,
            }
        }
        ParentRef::Epic(epic) => ItemCounts {
            epics: None,
            features: Some(epic.features.len()),
            stories: Some(epic.features.iter().map(|f| f.stories.len()).sum()),
            total: 0,
        },
        ParentRef::Feature(feature) => ItemCounts {
            epics: None,
            features: None,
            stories: Some(feature.stories.len()),
            total: 0,
        },
    };
    counts.total = counts.epics.unwrap_or(0)
        + counts.features.unwrap_or(0)
        + counts.stories.unwrap_or(0);
    counts
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{} {}", count, plural)
    } else {
        format!("{} {}", count, singular)
    }
}

/// Confirmation text for deleting `item`, spelling out what the cascade removes.
pub fn delete_message(item: WorkItemRef<'_>) -> String {
    let kind = item.item_type().to_string().to_lowercase();
    let counts = item.as_parent().map(count_children).unwrap_or_default();

    if counts.total == 0 {
        return format!("Are you sure you want to delete this {}?", kind);
    }

    let mut parts = Vec::new();
    if let Some(n) = counts.epics.filter(|n| *n > 0) {
        parts.push(plural(n, "epic", "epics"));
    }
    if let Some(n) = counts.features.filter(|n| *n > 0) {
        parts.push(plural(n, "feature", "features"));
    }
    if let Some(n) = counts.stories.filter(|n| *n > 0) {
        parts.push(plural(n, "story", "stories"));
    }

    format!(
        "Are you sure you want to delete this {} and its {}? This will delete {} total items.",
        kind,
        parts.join(", "),
        counts.total + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{epic, feature, roadmap, story};

    #[test]
    fn test_count_children_initiative_flattens_two_levels() {
        let data = roadmap();
        let counts = count_children(ParentRef::Initiative(&data.initiatives[0]));
        assert_eq!(
            counts,
            ItemCounts {
                epics: Some(2),
                features: Some(3),
                stories: Some(4),
                total: 9,
            }
        );
    }

    #[test]
    fn test_count_children_epic_and_feature() {
        let data = roadmap();
        let epic = &data.initiatives[0].epics[0];
        let counts = count_children(ParentRef::Epic(epic));
        assert_eq!(counts.epics, None);
        assert_eq!(counts.features, Some(2));
        assert_eq!(counts.stories, Some(3));
        assert_eq!(counts.total, 5);

        let counts = count_children(ParentRef::Feature(&epic.features[1]));
        assert_eq!(counts.features, None);
        assert_eq!(counts.stories, Some(1));
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_delete_message_epic_with_children() {
        let data = roadmap();
        let epic = &data.initiatives[0].epics[0];
        assert_eq!(
            delete_message(WorkItemRef::Epic(epic)),
            "Are you sure you want to delete this epic and its 2 features, 3 stories? \
             This will delete 6 total items."
        );
    }

    #[test]
    fn test_delete_message_singular_forms() {
        let epic = epic(
            "e",
            "i",
            &[],
            vec![feature("f", "e", &[], vec![story("s", "f", &[])])],
        );
        assert_eq!(
            delete_message(WorkItemRef::Epic(&epic)),
            "Are you sure you want to delete this epic and its 1 feature, 1 story? \
             This will delete 3 total items."
        );
    }

    #[test]
    fn test_delete_message_skips_zero_categories() {
        let data = roadmap();
        // init-2 has one epic and nothing below it
        assert_eq!(
            delete_message(WorkItemRef::Initiative(&data.initiatives[1])),
            "Are you sure you want to delete this initiative and its 1 epic? \
             This will delete 2 total items."
        );
    }

    #[test]
    fn test_delete_message_without_children() {
        let data = roadmap();
        let empty_epic = &data.initiatives[1].epics[0];
        assert_eq!(
            delete_message(WorkItemRef::Epic(empty_epic)),
            "Are you sure you want to delete this epic?"
        );

        let story = &data.initiatives[0].epics[0].features[0].stories[0];
        assert_eq!(
            delete_message(WorkItemRef::Story(story)),
            "Are you sure you want to delete this story?"
        );
    }
}
