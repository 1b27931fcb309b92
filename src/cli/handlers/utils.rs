use crate::model::{TeamMember, TeamRole, WorkItemRef, WorkItemStatus};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Format status with color coding
pub fn format_status(status: WorkItemStatus) -> colored::ColoredString {
    match status {
        WorkItemStatus::NotStarted => "not started".white(),
        WorkItemStatus::InProgress => "in progress".yellow(),
        WorkItemStatus::Completed => "completed".green(),
        WorkItemStatus::Blocked => "blocked".red(),
    }
}

pub fn format_role(role: TeamRole) -> colored::ColoredString {
    match role {
        TeamRole::Developer => "Developer".blue(),
        TeamRole::Designer => "Designer".magenta(),
        TeamRole::Pm => "PM".cyan(),
        TeamRole::Qa => "QA".yellow(),
    }
}

/// First letter of the first two words, upper-cased: "Sarah Chen" -> "SC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Initials of each assigned member; unknown ids are shown as-is.
pub fn assignee_initials(assigned: &[String], members: &[TeamMember]) -> Vec<String> {
    assigned
        .iter()
        .map(|id| {
            members
                .iter()
                .find(|m| &m.id == id)
                .map(|m| initials(&m.name))
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}

pub fn assignee_names(assigned: &[String], members: &[TeamMember]) -> Vec<String> {
    assigned
        .iter()
        .map(|id| {
            members
                .iter()
                .find(|m| &m.id == id)
                .map(|m| format!("{} ({})", m.name, id))
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}

/// Serialize whichever work item `item` refers to.
pub fn item_json(item: WorkItemRef<'_>) -> serde_json::Result<serde_json::Value> {
    match item {
        WorkItemRef::Initiative(i) => serde_json::to_value(i),
        WorkItemRef::Epic(e) => serde_json::to_value(e),
        WorkItemRef::Feature(f) => serde_json::to_value(f),
        WorkItemRef::Story(s) => serde_json::to_value(s),
    }
}

/// Print a list of team members (compact format)
pub fn print_member_list(members: &[TeamMember]) {
    if members.is_empty() {
        println!("No team members.");
        return;
    }

    for member in members {
        let email = member.email.as_deref().unwrap_or("");
        println!(
            "{} {:>2} {} [{}] {}",
            member.id.cyan(),
            initials(&member.name).bold(),
            member.name,
            format_role(member.role),
            email.dimmed()
        );
    }
}

/// Ask a yes/no question on stdout; anything but "y" declines.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Empty strings clear an optional field.
pub fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::member;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("marcus"), "M");
        assert_eq!(initials("Ana Maria Lima"), "AM");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_assignee_initials_falls_back_to_id() {
        let members = vec![member("tm-001", "Sarah Chen")];
        let assigned = vec!["tm-001".to_string(), "tm-404".to_string()];
        assert_eq!(assignee_initials(&assigned, &members), vec!["SC", "tm-404"]);
    }

    #[test]
    fn test_clearable() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some(" ".into())), Some(None));
        assert_eq!(clearable(Some(" x ".into())), Some(Some("x".to_string())));
    }
}
