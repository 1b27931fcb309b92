use crate::model::{Epic, Feature, Initiative};

/// Whether `member_id` is assigned to any initiative, epic, feature or story.
pub fn is_team_member_assigned(member_id: &str, initiatives: &[Initiative]) -> bool {
    for initiative in initiatives {
        if initiative.base.is_assigned_to(member_id) {
            return true;
        }
        for epic in &initiative.epics {
            if epic.base.is_assigned_to(member_id) {
                return true;
            }
            for feature in &epic.features {
                if feature.base.is_assigned_to(member_id) {
                    return true;
                }
                if feature
                    .stories
                    .iter()
                    .any(|story| story.base.is_assigned_to(member_id))
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Narrow the hierarchy to the work of one member.
///
/// Stories survive only when assigned. A feature, epic or initiative survives
/// when it is assigned itself or when any child survived; survivors keep all
/// their own fields and only their child lists are narrowed.
pub fn filter_by_team_member(initiatives: &[Initiative], member_id: &str) -> Vec<Initiative> {
    initiatives
        .iter()
        .filter_map(|initiative| filter_initiative(initiative, member_id))
        .collect()
}

fn filter_initiative(initiative: &Initiative, member_id: &str) -> Option<Initiative> {
    let epics: Vec<Epic> = initiative
        .epics
        .iter()
        .filter_map(|epic| filter_epic(epic, member_id))
        .collect();

    if epics.is_empty() && !initiative.base.is_assigned_to(member_id) {
        return None;
    }
    Some(Initiative {
        epics,
        ..initiative.clone()
    })
}

fn filter_epic(epic: &Epic, member_id: &str) -> Option<Epic> {
    let features: Vec<Feature> = epic
        .features
        .iter()
        .filter_map(|feature| filter_feature(feature, member_id))
        .collect();

    if features.is_empty() && !epic.base.is_assigned_to(member_id) {
        return None;
    }
    Some(Epic {
        features,
        ..epic.clone()
    })
}

fn filter_feature(feature: &Feature, member_id: &str) -> Option<Feature> {
    let stories: Vec<_> = feature
        .stories
        .iter()
        .filter(|story| story.base.is_assigned_to(member_id))
        .cloned()
        .collect();

    if stories.is_empty() && !feature.base.is_assigned_to(member_id) {
        return None;
    }
    Some(Feature {
        stories,
        ..feature.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{epic, feature, initiative, roadmap, story};

    #[test]
    fn test_is_assigned_at_every_level() {
        let data = roadmap();
        // story level
        assert!(is_team_member_assigned("tm-001", &data.initiatives));
        // initiative level
        assert!(is_team_member_assigned("tm-002", &data.initiatives));
        // epic and story level
        assert!(is_team_member_assigned("tm-003", &data.initiatives));
        assert!(!is_team_member_assigned("tm-404", &data.initiatives));
    }

    #[test]
    fn test_is_assigned_feature_level() {
        let initiatives = vec![initiative(
            "i",
            &[],
            vec![epic("e", "i", &[], vec![feature("f", "e", &["tm-9"], vec![])])],
        )];
        assert!(is_team_member_assigned("tm-9", &initiatives));
    }

    #[test]
    fn test_is_assigned_empty_tree() {
        assert!(!is_team_member_assigned("tm-001", &[]));
    }

    #[test]
    fn test_filter_keeps_ancestor_chain_of_single_story() {
        let data = roadmap();
        let filtered = filter_by_team_member(&data.initiatives, "tm-001");

        assert_eq!(filtered.len(), 1);
        let initiative = &filtered[0];
        let original = &data.initiatives[0];
        assert_eq!(initiative.base, original.base);
        assert_eq!(initiative.epics.len(), 1);

        let epic = &initiative.epics[0];
        assert_eq!(epic.base, original.epics[0].base);
        assert_eq!(epic.features.len(), 1);

        let feature = &epic.features[0];
        assert_eq!(feature.base, original.epics[0].features[0].base);
        assert_eq!(feature.stories.len(), 1);
        assert_eq!(feature.stories[0], original.epics[0].features[0].stories[0]);
    }

    #[test]
    fn test_filter_directly_assigned_parent_survives_without_children() {
        let data = roadmap();
        // tm-002 is only on init-1; nothing below it matches
        let filtered = filter_by_team_member(&data.initiatives, "tm-002");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].base.id, "init-1");
        assert!(filtered[0].epics.is_empty());
    }

    #[test]
    fn test_filter_assigned_epic_keeps_matching_branches_only() {
        let data = roadmap();
        // tm-003 is on epic-2 and on story-2 under epic-1
        let filtered = filter_by_team_member(&data.initiatives, "tm-003");
        let epics = &filtered[0].epics;
        assert_eq!(epics.len(), 2);
        assert_eq!(epics[0].features.len(), 1);
        assert_eq!(epics[0].features[0].stories[0].base.id, "story-2");
        // epic-2 survives on its own assignment; feat-3 has no match
        assert!(epics[1].features.is_empty());
    }

    #[test]
    fn test_filter_assigned_feature_drops_unassigned_stories() {
        let initiatives = vec![initiative(
            "i",
            &[],
            vec![epic(
                "e",
                "i",
                &[],
                vec![feature(
                    "f",
                    "e",
                    &["tm-1"],
                    vec![story("s1", "f", &[]), story("s2", "f", &["tm-1"])],
                )],
            )],
        )];
        let filtered = filter_by_team_member(&initiatives, "tm-1");
        let stories = &filtered[0].epics[0].features[0].stories;
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].base.id, "s2");
    }

    #[test]
    fn test_filter_unknown_member_is_empty() {
        let data = roadmap();
        assert!(filter_by_team_member(&data.initiatives, "tm-404").is_empty());
    }
}
