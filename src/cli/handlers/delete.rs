use crate::query::{delete_message, find_item};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_delete(ctx: &mut CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let data = ctx.session.current();
    let Some((path, item)) = find_item(&data.initiatives, &id) else {
        anyhow::bail!("Work item not found: {}", id);
    };
    let kind = item.item_type().to_string().to_lowercase();
    let removed = 1 + item
        .as_parent()
        .map(crate::query::count_children)
        .unwrap_or_default()
        .total;

    if !force && !json && !confirm(&delete_message(item))? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.session.delete_item(&path)?;
    ctx.ensure_saved()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id,
                "removed": removed
            }))?
        );
    } else if removed > 1 {
        println!(
            "{} {} {} and {} item(s) below it",
            "Deleted".red(),
            kind,
            id.cyan(),
            removed - 1
        );
    } else {
        println!("{} {} {}", "Deleted".red(), kind, id.cyan());
    }
    Ok(())
}
