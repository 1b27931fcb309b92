use crate::cli::commands::TeamAction;
use crate::engine::{NewTeamMember, TeamMemberPatch};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{clearable, print_member_list};

pub fn handle_team(ctx: &mut CommandContext, action: TeamAction) -> Result<()> {
    match action {
        TeamAction::List { json } => {
            let members = &ctx.session.current().team_members;
            if json {
                println!("{}", serde_json::to_string_pretty(members)?);
            } else {
                print_member_list(members);
            }
        }
        TeamAction::Add { name, role, email } => {
            let member = NewTeamMember::new(name.trim(), role.into())
                .with_email(clearable(email).flatten());
            let id = ctx.session.add_team_member(member)?;
            ctx.ensure_saved()?;
            println!("{} team member {} {}", "Added".green(), id.cyan(), name.trim());
        }
        TeamAction::Update {
            id,
            name,
            role,
            email,
        } => {
            let patch = TeamMemberPatch {
                name: name.map(|n| n.trim().to_string()),
                role: role.map(Into::into),
                email: clearable(email),
            };
            ctx.session.update_team_member(&id, &patch)?;
            ctx.ensure_saved()?;
            println!("{} team member {}", "Updated".green(), id.cyan());
        }
        TeamAction::Remove { id } => {
            ctx.session.delete_team_member(&id)?;
            ctx.ensure_saved()?;
            println!("{} team member {}", "Removed".red(), id.cyan());
        }
    }
    Ok(())
}
