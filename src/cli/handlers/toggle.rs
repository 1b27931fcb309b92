use crate::query::item_at;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_toggle(ctx: &mut CommandContext, id: String) -> Result<()> {
    let path = ctx.session.locate(&id)?;
    ctx.session.toggle_expanded(&path)?;
    ctx.ensure_saved()?;

    let expanded = item_at(&ctx.session.current().initiatives, &path)
        .is_some_and(|item| item.base().is_expanded);
    let state = if expanded {
        "expanded".green()
    } else {
        "collapsed".yellow()
    };
    println!("{} is now {}", id.cyan(), state);
    Ok(())
}
