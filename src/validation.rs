//! Form-level validation run before any mutation reaches the engine.
//!
//! Failures are collected per field so a front end can show each message
//! next to its input.

use crate::engine::{
    NewTeamMember, SprintConfigPatch, TeamMemberPatch, WorkItemDraft, WorkItemPatch,
};
use crate::model::{SprintConfig, TeamMember};
use crate::query::{QUARTERS, calculate_total_sprints};
use std::collections::BTreeMap;
use std::fmt;

pub const SPRINTS_PER_INCREMENT_RANGE: (u32, u32) = (1, 10);
pub const INCREMENTS_PER_QUARTER_RANGE: (u32, u32) = (1, 6);

/// Maximum allowed length for a title or name.
pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Non-empty after trimming.
pub fn validate_required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn check_title(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if !validate_required(Some(value)) {
        errors.add(field, format!("{} is required", label));
    } else if value.trim().len() > MAX_TITLE_LENGTH {
        errors.add(
            field,
            format!("{} exceeds maximum length of {} characters", label, MAX_TITLE_LENGTH),
        );
    }
}

fn check_sprint(errors: &mut ValidationErrors, sprint: Option<u32>, config: Option<&SprintConfig>) {
    let Some(sprint) = sprint else {
        return;
    };
    if sprint == 0 {
        errors.add("sprintNumber", "Sprint number must be a positive number");
    } else if let Some(config) = config.filter(|c| sprint > c.total_sprints) {
        errors.add(
            "sprintNumber",
            format!("Sprint number must be between 1 and {}", config.total_sprints),
        );
    }
}

pub fn validate_new_team_member(member: &NewTeamMember) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_title(&mut errors, "name", &member.name, "Name");
    if let Some(email) = member.email.as_deref() {
        check_email(&mut errors, email);
    }
    errors.into_result()
}

pub fn validate_team_member_patch(patch: &TeamMemberPatch) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(name) = &patch.name {
        check_title(&mut errors, "name", name, "Name");
    }
    if let Some(Some(email)) = &patch.email {
        check_email(&mut errors, email);
    }
    errors.into_result()
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    let email = email.trim();
    if !email.is_empty() && !email.contains('@') {
        errors.add("email", "Email must contain '@'");
    }
}

/// Validate a new work item. `config` bounds the sprint number when given.
pub fn validate_draft(
    draft: &WorkItemDraft,
    config: Option<&SprintConfig>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_title(&mut errors, "title", &draft.title, "Title");
    check_sprint(&mut errors, draft.sprint_number, config);
    errors.into_result()
}

pub fn validate_patch(
    patch: &WorkItemPatch,
    config: Option<&SprintConfig>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(title) = &patch.title {
        check_title(&mut errors, "title", title, "Title");
    }
    check_sprint(&mut errors, patch.sprint_number.flatten(), config);
    errors.into_result()
}

/// Every assigned id must name an existing team member.
pub fn validate_assignees(
    assigned: &[String],
    members: &[TeamMember],
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(unknown) = assigned
        .iter()
        .find(|id| !members.iter().any(|m| &m.id == *id))
    {
        errors.add("assignedMembers", format!("Unknown team member: {}", unknown));
    }
    errors.into_result()
}

/// Check a complete sprint configuration, including that `total_sprints`
/// matches the product of its factors.
pub fn validate_sprint_config(config: &SprintConfig) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let (min, max) = SPRINTS_PER_INCREMENT_RANGE;
    if !(min..=max).contains(&config.sprints_per_increment) {
        errors.add(
            "sprintsPerIncrement",
            format!("Sprints per increment must be between {} and {}", min, max),
        );
    }

    let (min, max) = INCREMENTS_PER_QUARTER_RANGE;
    if !(min..=max).contains(&config.increments_per_quarter) {
        errors.add(
            "incrementsPerQuarter",
            format!("Increments per quarter must be between {} and {}", min, max),
        );
    }

    let expected = calculate_total_sprints(
        config.sprints_per_increment,
        config.increments_per_quarter,
        QUARTERS,
    );
    if config.total_sprints != expected {
        errors.add(
            "totalSprints",
            format!(
                "Total sprints must be {} ({} x {} x {} quarters), got {}",
                expected,
                config.sprints_per_increment,
                config.increments_per_quarter,
                QUARTERS,
                config.total_sprints
            ),
        );
    }

    errors.into_result()
}

/// Fill in `total_sprints` from the factors a patch ends up with.
pub fn derive_total_sprints(current: &SprintConfig, patch: &SprintConfigPatch) -> SprintConfigPatch {
    let mut patch = patch.clone();
    if patch.changes_factors() || patch.total_sprints.is_none() {
        let spi = patch
            .sprints_per_increment
            .unwrap_or(current.sprints_per_increment);
        let ipq = patch
            .increments_per_quarter
            .unwrap_or(current.increments_per_quarter);
        patch.total_sprints = Some(calculate_total_sprints(spi, ipq, QUARTERS));
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TeamRole;
    use crate::testing::sprint_config;

    #[test]
    fn test_validate_required() {
        assert!(!validate_required(None));
        assert!(!validate_required(Some("")));
        assert!(!validate_required(Some("   ")));
        assert!(validate_required(Some(" x ")));
    }

    #[test]
    fn test_blank_title_is_keyed_by_field() {
        let errors = validate_draft(&WorkItemDraft::new("  "), None).unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.to_string(), "title: Title is required");
    }

    #[test]
    fn test_title_too_long() {
        let draft = WorkItemDraft::new("a".repeat(MAX_TITLE_LENGTH + 1));
        assert!(validate_draft(&draft, None).is_err());
    }

    #[test]
    fn test_team_member_requires_name() {
        let errors = validate_new_team_member(&NewTeamMember::new("", TeamRole::Qa)).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(validate_new_team_member(&NewTeamMember::new("Lee", TeamRole::Qa)).is_ok());
    }

    #[test]
    fn test_email_needs_at_sign() {
        let member = NewTeamMember::new("Lee", TeamRole::Qa).with_email(Some("nope".into()));
        let errors = validate_new_team_member(&member).unwrap_err();
        assert!(errors.get("email").is_some());
    }

    #[test]
    fn test_sprint_number_bounded_by_config() {
        let config = sprint_config();
        let draft = WorkItemDraft::new("ok").with_sprint(Some(19));
        let errors = validate_draft(&draft, Some(&config)).unwrap_err();
        assert_eq!(errors.get("sprintNumber"), Some("Sprint number must be between 1 and 18"));

        let draft = WorkItemDraft::new("ok").with_sprint(Some(18));
        assert!(validate_draft(&draft, Some(&config)).is_ok());

        let draft = WorkItemDraft::new("ok").with_sprint(Some(0));
        assert!(validate_draft(&draft, None).is_err());
    }

    #[test]
    fn test_sprint_config_total_must_match_factors() {
        let mut config = sprint_config();
        assert!(validate_sprint_config(&config).is_ok());

        config.sprints_per_increment = 4;
        let errors = validate_sprint_config(&config).unwrap_err();
        assert!(errors.get("totalSprints").unwrap().starts_with("Total sprints must be 24"));
    }

    #[test]
    fn test_sprint_config_ranges() {
        let mut config = sprint_config();
        config.sprints_per_increment = 11;
        config.increments_per_quarter = 0;
        config.total_sprints = 0;
        let errors = validate_sprint_config(&config).unwrap_err();
        assert!(errors.get("sprintsPerIncrement").is_some());
        assert!(errors.get("incrementsPerQuarter").is_some());
    }

    #[test]
    fn test_assignees_must_exist() {
        let members = vec![crate::testing::member("tm-001", "Sarah Chen")];
        assert!(validate_assignees(&["tm-001".to_string()], &members).is_ok());
        assert!(validate_assignees(&[], &members).is_ok());

        let errors = validate_assignees(&["tm-404".to_string()], &members).unwrap_err();
        assert_eq!(errors.get("assignedMembers"), Some("Unknown team member: tm-404"));
    }

    #[test]
    fn test_derive_total_sprints_uses_patched_factors() {
        let config = sprint_config();
        let patch = SprintConfigPatch {
            increments_per_quarter: Some(3),
            ..SprintConfigPatch::default()
        };
        let derived = derive_total_sprints(&config, &patch);
        assert_eq!(derived.total_sprints, Some(27));
        assert_eq!(derived.increments_per_quarter, Some(3));
    }
}
