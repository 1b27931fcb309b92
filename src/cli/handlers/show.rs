use crate::model::{RoadmapData, WorkItemRef};
use crate::query::{count_children, find_item, quarter_of_sprint, sprint_dates};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{assignee_names, format_status, item_json};

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let data = ctx.session.current();
    let Some((path, item)) = find_item(&data.initiatives, &id) else {
        anyhow::bail!("Work item not found: {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&item_json(item)?)?);
        return Ok(());
    }

    let base = item.base();
    println!("{} {}", base.id.cyan().bold(), base.title.bold());
    println!("Type:     {}", item.item_type().to_string().blue());
    println!("Status:   {}", format_status(base.status));
    println!("Path:     {}", path.to_string().dimmed());

    if let Some(sprint) = base.sprint_number {
        println!("Sprint:   {}", describe_sprint(data, sprint));
    }
    if !base.assigned_members.is_empty() {
        println!(
            "Assigned: {}",
            assignee_names(&base.assigned_members, &data.team_members).join(", ")
        );
    }

    match item {
        WorkItemRef::Initiative(initiative) => {
            if let Some(problem) = &initiative.problem_statement {
                println!("Problem:  {}", problem);
            }
            if let Some(outcome) = &initiative.desired_outcome {
                println!("Outcome:  {}", outcome);
            }
        }
        WorkItemRef::Story(story) => {
            if let Some(points) = story.story_points {
                println!("Points:   {}", points);
            }
        }
        _ => {}
    }

    if let Some(parent) = item.as_parent() {
        let counts = count_children(parent);
        let mut parts = Vec::new();
        if let Some(n) = counts.epics {
            parts.push(format!("{} epics", n));
        }
        if let Some(n) = counts.features {
            parts.push(format!("{} features", n));
        }
        if let Some(n) = counts.stories {
            parts.push(format!("{} stories", n));
        }
        println!("Contains: {}", parts.join(", "));
    }

    println!(
        "Created:  {}",
        base.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );
    println!(
        "Updated:  {}",
        base.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );

    if let Some(description) = &base.description {
        println!();
        println!("{}", description);
    }
    Ok(())
}

fn describe_sprint(data: &RoadmapData, sprint: u32) -> String {
    let config = &data.sprint_config;
    match (quarter_of_sprint(config, sprint), sprint_dates(config, sprint)) {
        (Some(quarter), Some((start, end))) => format!(
            "{} (Q{}, {} to {})",
            sprint,
            quarter,
            start.format("%Y-%m-%d"),
            (end - chrono::Duration::days(1)).format("%Y-%m-%d")
        ),
        _ => format!("{} (outside the planning horizon)", sprint),
    }
}
