use crate::cli::commands::ConfigAction;
use crate::engine::SprintConfigPatch;
use crate::model::SprintConfig;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_config(ctx: &mut CommandContext, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show { json } => {
            let config = &ctx.session.current().sprint_config;
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print_sprint_config(config);
            }
        }
        ConfigAction::Set {
            cadence,
            sprints_per_increment,
            increments_per_quarter,
            start_date,
        } => {
            let patch = SprintConfigPatch {
                cadence: cadence.map(Into::into),
                sprints_per_increment,
                increments_per_quarter,
                planning_start_date: start_date
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc()),
                total_sprints: None,
            };
            if patch == SprintConfigPatch::default() {
                anyhow::bail!("Nothing to update; pass at least one option");
            }
            ctx.session.update_sprint_config(&patch)?;
            ctx.ensure_saved()?;
            println!("{} sprint configuration", "Updated".green());
            print_sprint_config(&ctx.session.current().sprint_config);
        }
    }
    Ok(())
}

fn print_sprint_config(config: &SprintConfig) {
    println!("Cadence:                {}", config.cadence.to_string().cyan());
    println!("Sprints per increment:  {}", config.sprints_per_increment);
    println!("Increments per quarter: {}", config.increments_per_quarter);
    println!("Sprints per quarter:    {}", config.sprints_per_quarter());
    println!("Total sprints:          {}", config.total_sprints.to_string().bold());
    println!(
        "Planning starts:        {}",
        config.planning_start_date.format("%Y-%m-%d")
    );
}
