use crate::cli::commands::{AddItem, ItemFields};
use crate::engine::{InitiativeDraft, StoryDraft, WorkItemDraft};
use crate::model::{ItemPath, WorkItemType};
use crate::query::find_item;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::clearable;

fn draft_from(fields: &ItemFields) -> WorkItemDraft {
    let mut draft = WorkItemDraft::new(fields.title.trim())
        .with_description(clearable(fields.description.clone()).flatten())
        .with_sprint(fields.sprint)
        .with_assigned(fields.assign.clone());
    if let Some(status) = fields.status {
        draft = draft.with_status(status.into());
    }
    draft
}

/// Resolve `parent_id`, which must be a `expected` item.
fn parent_path(ctx: &CommandContext, parent_id: &str, expected: WorkItemType) -> Result<ItemPath> {
    let path = ctx.session.locate(parent_id)?;
    if path.item_type() != expected {
        anyhow::bail!(
            "{} is a {}, expected a {}",
            parent_id,
            path.item_type().to_string().to_lowercase(),
            expected.to_string().to_lowercase()
        );
    }
    Ok(path)
}

pub fn handle_add(ctx: &mut CommandContext, item: AddItem) -> Result<()> {
    let (kind, id, json) = match item {
        AddItem::Initiative {
            fields,
            problem,
            outcome,
        } => {
            let draft = InitiativeDraft {
                item: draft_from(&fields),
                problem_statement: clearable(problem).flatten(),
                desired_outcome: clearable(outcome).flatten(),
            };
            let id = ctx.session.add_initiative(draft)?;
            (WorkItemType::Initiative, id, fields.json)
        }
        AddItem::Epic { parent, fields } => {
            let path = parent_path(ctx, &parent, WorkItemType::Initiative)?;
            let id = ctx
                .session
                .add_child(&path, StoryDraft::new(draft_from(&fields)))?;
            (WorkItemType::Epic, id, fields.json)
        }
        AddItem::Feature { parent, fields } => {
            let path = parent_path(ctx, &parent, WorkItemType::Epic)?;
            let id = ctx
                .session
                .add_child(&path, StoryDraft::new(draft_from(&fields)))?;
            (WorkItemType::Feature, id, fields.json)
        }
        AddItem::Story {
            parent,
            fields,
            points,
        } => {
            let path = parent_path(ctx, &parent, WorkItemType::Feature)?;
            let draft = StoryDraft {
                item: draft_from(&fields),
                story_points: points,
            };
            let id = ctx.session.add_child(&path, draft)?;
            (WorkItemType::Story, id, fields.json)
        }
    };
    ctx.ensure_saved()?;

    if json {
        if let Some((path, _)) = find_item(&ctx.session.current().initiatives, &id) {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "action": "added",
                    "type": kind.to_string(),
                    "id": id,
                    "path": path.to_string(),
                }))?
            );
        }
    } else {
        println!(
            "{} {} {}",
            "Added".green(),
            kind.to_string().to_lowercase(),
            id.cyan()
        );
    }
    Ok(())
}
