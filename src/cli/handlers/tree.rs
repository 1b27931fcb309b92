//! ASCII tree rendering for the roadmap hierarchy.

use crate::model::{Initiative, Story, TeamMember, WorkItemBase, WorkItemRef, WorkItemStatus};
use crate::query::{count_children, filter_by_team_member};
use anyhow::Result;

use super::CommandContext;
use super::utils::assignee_initials;

const NOT_STARTED: char = '○';
const IN_PROGRESS: char = '◐';
const COMPLETED: char = '●';
const BLOCKED: char = '✗';

fn status_symbol(status: WorkItemStatus) -> char {
    match status {
        WorkItemStatus::NotStarted => NOT_STARTED,
        WorkItemStatus::InProgress => IN_PROGRESS,
        WorkItemStatus::Completed => COMPLETED,
        WorkItemStatus::Blocked => BLOCKED,
    }
}

struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

/// Render initiatives and everything below them.
///
/// Example output:
/// ```text
/// ◐ Customer Portal Modernization (init-001) [MJ]
/// ├── ● Authentication & Security Overhaul (epic-001) S1 [SC]
/// │   ├── ● Single Sign-On Integration (feat-001) S1 [SC]
/// │   │   └── ● Configure Okta SAML integration (story-001) S1 5pts [SC]
/// │   └── ● Multi-Factor Authentication (feat-002) S2 [SC] (+1 collapsed)
/// └── ◐ Dashboard Redesign (epic-002) S3 [SC, MJ]
/// ```
///
/// Children of collapsed items are hidden unless `show_all` is set.
pub fn render_tree(initiatives: &[Initiative], members: &[TeamMember], show_all: bool) -> String {
    let nodes: Vec<TreeNode> = initiatives
        .iter()
        .map(|initiative| build_node(WorkItemRef::Initiative(initiative), members, show_all))
        .collect();

    let mut output = String::new();
    for node in &nodes {
        render_node(&mut output, node, "", true, true);
    }
    output
}

fn children_of<'a>(item: WorkItemRef<'a>) -> Vec<WorkItemRef<'a>> {
    match item {
        WorkItemRef::Initiative(i) => i.epics.iter().map(WorkItemRef::Epic).collect(),
        WorkItemRef::Epic(e) => e.features.iter().map(WorkItemRef::Feature).collect(),
        WorkItemRef::Feature(f) => f.stories.iter().map(WorkItemRef::Story).collect(),
        WorkItemRef::Story(_) => Vec::new(),
    }
}

fn build_node(item: WorkItemRef<'_>, members: &[TeamMember], show_all: bool) -> TreeNode {
    let mut label = item_label(item, members);
    let children = children_of(item);

    let collapsed = !item.base().is_expanded && !show_all && !children.is_empty();
    if collapsed {
        let hidden = item.as_parent().map(count_children).unwrap_or_default().total;
        label.push_str(&format!(" (+{} collapsed)", hidden));
        return TreeNode {
            label,
            children: Vec::new(),
        };
    }

    TreeNode {
        label,
        children: children
            .into_iter()
            .map(|child| build_node(child, members, show_all))
            .collect(),
    }
}

fn item_label(item: WorkItemRef<'_>, members: &[TeamMember]) -> String {
    let base: &WorkItemBase = item.base();
    let mut label = format!("{} {} ({})", status_symbol(base.status), base.title, base.id);

    if let Some(sprint) = base.sprint_number {
        label.push_str(&format!(" S{}", sprint));
    }
    if let WorkItemRef::Story(Story {
        story_points: Some(points),
        ..
    }) = item
    {
        label.push_str(&format!(" {}pts", points));
    }
    if !base.assigned_members.is_empty() {
        let initials = assignee_initials(&base.assigned_members, members);
        label.push_str(&format!(" [{}]", initials.join(", ")));
    }
    label
}

fn render_node(output: &mut String, node: &TreeNode, prefix: &str, is_last: bool, is_root: bool) {
    if is_root {
        output.push_str(&node.label);
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&node.label);
    }
    output.push('\n');

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false);
    }
}

pub fn handle_tree(ctx: &CommandContext, member: Option<String>, all: bool, json: bool) -> Result<()> {
    let data = ctx.session.current();

    let initiatives = match &member {
        Some(id) => {
            if data.team_member(id).is_none() {
                anyhow::bail!("Team member not found: {}", id);
            }
            filter_by_team_member(&data.initiatives, id)
        }
        None => data.initiatives.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&initiatives)?);
        return Ok(());
    }

    if initiatives.is_empty() {
        match member {
            Some(id) => println!("No work items assigned to {}.", id),
            None => println!("No initiatives yet. Add one with `sprintmap add initiative <title>`."),
        }
        return Ok(());
    }

    print!("{}", render_tree(&initiatives, &data.team_members, all));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoryPoints;
    use crate::testing::{epic, feature, initiative, member, story};

    fn members() -> Vec<TeamMember> {
        vec![member("tm-001", "Sarah Chen"), member("tm-002", "Marcus Johnson")]
    }

    fn expanded(mut tree: Initiative) -> Initiative {
        tree.base.is_expanded = true;
        for epic in &mut tree.epics {
            epic.base.is_expanded = true;
            for feature in &mut epic.features {
                feature.base.is_expanded = true;
            }
        }
        tree
    }

    #[test]
    fn test_single_root() {
        let tree = vec![initiative("init-1", &[], vec![])];
        assert_eq!(render_tree(&tree, &[], false), "○ Initiative init-1 (init-1)\n");
    }

    #[test]
    fn test_branches_and_labels() {
        let mut s1 = story("story-1", "feat-1", &["tm-001"]);
        s1.story_points = Some(StoryPoints::Five);
        s1.base.sprint_number = Some(2);
        s1.base.status = WorkItemStatus::Completed;
        let s2 = story("story-2", "feat-1", &["tm-404"]);

        let tree = vec![expanded(initiative(
            "init-1",
            &["tm-002"],
            vec![
                epic(
                    "epic-1",
                    "init-1",
                    &[],
                    vec![feature("feat-1", "epic-1", &[], vec![s1, s2])],
                ),
                epic("epic-2", "init-1", &[], vec![]),
            ],
        ))];

        let output = render_tree(&tree, &members(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "○ Initiative init-1 (init-1) [MJ]");
        assert_eq!(lines[1], "├── ○ Epic epic-1 (epic-1)");
        assert_eq!(lines[2], "│   └── ○ Feature feat-1 (feat-1)");
        assert_eq!(lines[3], "│       ├── ● Story story-1 (story-1) S2 5pts [SC]");
        assert_eq!(lines[4], "│       └── ○ Story story-2 (story-2) [tm-404]");
        assert_eq!(lines[5], "└── ○ Epic epic-2 (epic-2)");
    }

    #[test]
    fn test_collapsed_items_hide_children() {
        let mut tree = expanded(initiative(
            "init-1",
            &[],
            vec![epic(
                "epic-1",
                "init-1",
                &[],
                vec![feature(
                    "feat-1",
                    "epic-1",
                    &[],
                    vec![story("story-1", "feat-1", &[])],
                )],
            )],
        ));
        tree.epics[0].base.is_expanded = false;
        let tree = vec![tree];

        let output = render_tree(&tree, &[], false);
        assert!(output.contains("(epic-1) (+2 collapsed)"));
        assert!(!output.contains("feat-1"));

        let output = render_tree(&tree, &[], true);
        assert!(output.contains("story-1"));
        assert!(!output.contains("collapsed"));
    }
}
