//! Shared fixtures for unit tests.

use crate::model::{
    Epic, Feature, Initiative, RoadmapData, SprintCadence, SprintConfig, Story, TeamMember,
    TeamRole, WorkItem,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn stamped<T: WorkItem>(mut item: T, assigned: &[&str]) -> T {
    let base = item.base_mut();
    base.assigned_members = assigned.iter().map(|s| s.to_string()).collect();
    base.created_at = fixed_time();
    base.updated_at = fixed_time();
    item
}

pub fn story(id: &str, feature: &str, assigned: &[&str]) -> Story {
    stamped(
        Story::new(id.to_string(), format!("Story {}", id), feature.to_string()),
        assigned,
    )
}

pub fn feature(id: &str, epic: &str, assigned: &[&str], stories: Vec<Story>) -> Feature {
    let mut feature = stamped(
        Feature::new(id.to_string(), format!("Feature {}", id), epic.to_string()),
        assigned,
    );
    feature.stories = stories;
    feature
}

pub fn epic(id: &str, initiative: &str, assigned: &[&str], features: Vec<Feature>) -> Epic {
    let mut epic = stamped(
        Epic::new(id.to_string(), format!("Epic {}", id), initiative.to_string()),
        assigned,
    );
    epic.features = features;
    epic
}

pub fn initiative(id: &str, assigned: &[&str], epics: Vec<Epic>) -> Initiative {
    let mut initiative = stamped(
        Initiative::new(id.to_string(), format!("Initiative {}", id)),
        assigned,
    );
    initiative.epics = epics;
    initiative
}

pub fn member(id: &str, name: &str) -> TeamMember {
    let mut member = TeamMember::new(id.to_string(), name.to_string(), TeamRole::Developer);
    member.created_at = fixed_time();
    member
}

pub fn sprint_config() -> SprintConfig {
    SprintConfig {
        cadence: SprintCadence::TwoWeek,
        sprints_per_increment: 3,
        increments_per_quarter: 2,
        planning_start_date: fixed_time(),
        total_sprints: 18,
    }
}

/// ```text
/// init-1 [tm-002]
///   epic-1
///     feat-1: story-1 [tm-001], story-2 [tm-003]
///     feat-2: story-3
///   epic-2 [tm-003]
///     feat-3: story-4
/// init-2
///   epic-3
/// ```
pub fn roadmap() -> RoadmapData {
    RoadmapData {
        team_members: vec![
            member("tm-001", "Sarah Chen"),
            member("tm-002", "Marcus Johnson"),
            member("tm-003", "Priya Patel"),
        ],
        initiatives: vec![
            initiative(
                "init-1",
                &["tm-002"],
                vec![
                    epic(
                        "epic-1",
                        "init-1",
                        &[],
                        vec![
                            feature(
                                "feat-1",
                                "epic-1",
                                &[],
                                vec![
                                    story("story-1", "feat-1", &["tm-001"]),
                                    story("story-2", "feat-1", &["tm-003"]),
                                ],
                            ),
                            feature("feat-2", "epic-1", &[], vec![story("story-3", "feat-2", &[])]),
                        ],
                    ),
                    epic(
                        "epic-2",
                        "init-1",
                        &["tm-003"],
                        vec![feature(
                            "feat-3",
                            "epic-2",
                            &[],
                            vec![story("story-4", "feat-3", &[])],
                        )],
                    ),
                ],
            ),
            initiative("init-2", &[], vec![epic("epic-3", "init-2", &[], vec![])]),
        ],
        sprint_config: sprint_config(),
        last_modified: fixed_time(),
    }
}
