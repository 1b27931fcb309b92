use crate::cli::commands::UpdateFields;
use crate::engine::{InitiativePatch, StoryPatch, WorkItemPatch};
use crate::model::{ItemPath, StoryPoints, WorkItemType};
use crate::query::item_at;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{clearable, item_json};

fn item_patch(fields: &UpdateFields) -> WorkItemPatch {
    let assigned_members = if fields.unassign {
        Some(Vec::new())
    } else if !fields.assign.is_empty() {
        Some(fields.assign.clone())
    } else {
        None
    };

    WorkItemPatch {
        title: fields.title.as_ref().map(|t| t.trim().to_string()),
        description: clearable(fields.description.clone()),
        sprint_number: fields.sprint.map(|s| (s > 0).then_some(s)),
        assigned_members,
        status: fields.status.map(Into::into),
        is_expanded: None,
    }
}

fn story_points(points: u8) -> Result<Option<StoryPoints>> {
    if points == 0 {
        return Ok(None);
    }
    Ok(Some(StoryPoints::try_from(points)?))
}

pub fn handle_update(
    ctx: &mut CommandContext,
    id: String,
    fields: UpdateFields,
    json: bool,
) -> Result<()> {
    let path = ctx.session.locate(&id)?;
    let kind = path.item_type();

    if fields.points.is_some() && kind != WorkItemType::Story {
        anyhow::bail!("--points only applies to stories, {} is a {}", id, kind);
    }
    if (fields.problem.is_some() || fields.outcome.is_some()) && kind != WorkItemType::Initiative {
        anyhow::bail!(
            "--problem and --outcome only apply to initiatives, {} is a {}",
            id,
            kind
        );
    }

    let item = item_patch(&fields);
    match kind {
        WorkItemType::Initiative => {
            let patch = InitiativePatch {
                item,
                problem_statement: clearable(fields.problem),
                desired_outcome: clearable(fields.outcome),
            };
            if patch == InitiativePatch::default() {
                anyhow::bail!("Nothing to update for {}", id);
            }
            ctx.session.update_initiative(&id, &patch)?;
        }
        WorkItemType::Story => {
            let patch = StoryPatch {
                item,
                story_points: fields.points.map(story_points).transpose()?,
            };
            if patch == StoryPatch::default() {
                anyhow::bail!("Nothing to update for {}", id);
            }
            ctx.session.update_story(&path, &patch)?;
        }
        WorkItemType::Epic | WorkItemType::Feature => {
            if item.is_empty() {
                anyhow::bail!("Nothing to update for {}", id);
            }
            ctx.session.update_item(&path, &item)?;
        }
    }
    ctx.ensure_saved()?;

    if json {
        print_item_json(ctx, &path)?;
    } else {
        println!("{} {} {}", "Updated".green(), kind.to_string().to_lowercase(), id.cyan());
    }
    Ok(())
}

fn print_item_json(ctx: &CommandContext, path: &ItemPath) -> Result<()> {
    if let Some(item) = item_at(&ctx.session.current().initiatives, path) {
        println!("{}", serde_json::to_string_pretty(&item_json(item)?)?);
    }
    Ok(())
}
