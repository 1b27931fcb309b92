use crate::model::{Initiative, WorkItem};
use crate::query::{MAX_SPRINTS_PER_QUARTER, sprint_dates, sprint_timeline};
use crate::validation::validate_sprint_config;
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;

use super::CommandContext;

/// Number of work items scheduled in each sprint, at any level.
fn items_per_sprint(initiatives: &[Initiative]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    let mut record = |sprint: Option<u32>| {
        if let Some(sprint) = sprint {
            *counts.entry(sprint).or_insert(0) += 1;
        }
    };
    for initiative in initiatives {
        record(initiative.base().sprint_number);
        for epic in &initiative.epics {
            record(epic.base().sprint_number);
            for feature in &epic.features {
                record(feature.base().sprint_number);
                for story in &feature.stories {
                    record(story.base().sprint_number);
                }
            }
        }
    }
    counts
}

pub fn handle_timeline(ctx: &CommandContext, json: bool) -> Result<()> {
    let data = ctx.session.current();
    let config = &data.sprint_config;
    let timeline = sprint_timeline(config.sprints_per_increment, config.increments_per_quarter);

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    if let Err(errors) = validate_sprint_config(config) {
        println!(
            "{} sprint configuration is out of range ({}); showing at most {} sprints per quarter",
            "Warning:".yellow(),
            errors,
            MAX_SPRINTS_PER_QUARTER
        );
    }

    let scheduled = items_per_sprint(&data.initiatives);
    for quarter in &timeline {
        println!("{}", quarter.label.bold());
        for &sprint in &quarter.sprints {
            let start = sprint_dates(config, sprint)
                .map(|(start, _)| start.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            let count = scheduled.get(&sprint).copied().unwrap_or(0);
            let items = match count {
                0 => String::new(),
                1 => "1 item".to_string(),
                n => format!("{} items", n),
            };
            println!("  Sprint {:>2}  {}  {}", sprint, start.dimmed(), items);
        }
    }

    let beyond: usize = scheduled
        .range(config.total_sprints.saturating_add(1)..)
        .map(|(_, count)| count)
        .sum();
    if beyond > 0 {
        println!(
            "{} {} item(s) scheduled after sprint {}",
            "Warning:".yellow(),
            beyond,
            config.total_sprints
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::roadmap;

    #[test]
    fn test_items_per_sprint_counts_every_level() {
        let mut data = roadmap();
        data.initiatives[0].base.sprint_number = Some(1);
        data.initiatives[0].epics[0].base.sprint_number = Some(1);
        data.initiatives[0].epics[0].features[0].stories[1].base.sprint_number = Some(4);

        let counts = items_per_sprint(&data.initiatives);
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&4), Some(&1));
        assert_eq!(counts.get(&2), None);
    }
}
