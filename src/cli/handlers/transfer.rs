use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_export(ctx: &CommandContext, output: Option<String>) -> Result<()> {
    let json = ctx.session.store().export_json();
    if json.is_empty() {
        anyhow::bail!("Failed to export roadmap data");
    }

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path))?;
            println!("{} roadmap to {}", "Exported".green(), path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn handle_import(ctx: &mut CommandContext, file: String) -> Result<()> {
    let text =
        std::fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file))?;
    ctx.session
        .import_json(&text)
        .with_context(|| format!("Failed to import {}", file))?;

    let data = ctx.session.current();
    println!(
        "{} {} initiative(s) and {} team member(s) from {}",
        "Imported".green(),
        data.initiatives.len(),
        data.team_members.len(),
        file
    );
    Ok(())
}

pub fn handle_reset(ctx: &mut CommandContext, force: bool) -> Result<()> {
    if !force && !confirm("Discard all roadmap data and restore the sample roadmap?")? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.session.reset();
    ctx.ensure_saved()?;
    println!("{} roadmap to sample data", "Reset".yellow());
    Ok(())
}
