use crate::model::SprintConfig;
use crate::validation::{INCREMENTS_PER_QUARTER_RANGE, SPRINTS_PER_INCREMENT_RANGE};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// The planning horizon is always three quarters.
pub const QUARTERS: u32 = 3;

pub fn calculate_total_sprints(
    sprints_per_increment: u32,
    increments_per_quarter: u32,
    quarters: u32,
) -> u32 {
    sprints_per_increment
        .saturating_mul(increments_per_quarter)
        .saturating_mul(quarters)
}

/// Largest quarter a timeline renders: both factors at their upper bound.
pub const MAX_SPRINTS_PER_QUARTER: u32 =
    SPRINTS_PER_INCREMENT_RANGE.1 * INCREMENTS_PER_QUARTER_RANGE.1;

/// One quarter column of the sprint timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterSpan {
    pub quarter: u32,
    pub label: String,
    pub sprints: Vec<u32>,
}

/// Split sprints `1..=total` into [`QUARTERS`] runs of consecutive sprint numbers.
///
/// Quarters are capped at [`MAX_SPRINTS_PER_QUARTER`] sprints, so factors
/// outside their valid ranges (an imported document is not range checked)
/// still give a bounded timeline.
pub fn sprint_timeline(sprints_per_increment: u32, increments_per_quarter: u32) -> Vec<QuarterSpan> {
    let per_quarter = sprints_per_increment
        .saturating_mul(increments_per_quarter)
        .min(MAX_SPRINTS_PER_QUARTER);
    (0..QUARTERS)
        .map(|index| {
            let first = index * per_quarter + 1;
            QuarterSpan {
                quarter: index + 1,
                label: format!("Q{}", index + 1),
                sprints: (first..first + per_quarter).collect(),
            }
        })
        .collect()
}

/// Quarter (1-based) that `sprint` falls in, `None` outside the planning horizon.
pub fn quarter_of_sprint(config: &SprintConfig, sprint: u32) -> Option<u32> {
    let per_quarter = config.sprints_per_quarter();
    if sprint == 0 || per_quarter == 0 {
        return None;
    }
    let quarter = (sprint - 1) / per_quarter + 1;
    (quarter <= QUARTERS).then_some(quarter)
}

/// Start and (exclusive) end of `sprint`, counted from the planning start date.
pub fn sprint_dates(config: &SprintConfig, sprint: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if sprint == 0 || sprint > config.total_sprints {
        return None;
    }
    let days = config.cadence.days();
    let offset = Duration::try_days(days.checked_mul(i64::from(sprint - 1))?)?;
    let start = config.planning_start_date.checked_add_signed(offset)?;
    let end = start.checked_add_signed(Duration::try_days(days)?)?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SprintCadence;
    use crate::testing::{fixed_time, sprint_config};

    #[test]
    fn test_calculate_total_sprints() {
        assert_eq!(calculate_total_sprints(3, 2, QUARTERS), 18);
        assert_eq!(calculate_total_sprints(2, 1, 3), 6);
        assert_eq!(calculate_total_sprints(10, 6, QUARTERS), 180);
    }

    #[test]
    fn test_sprint_timeline_default_config() {
        let timeline = sprint_timeline(3, 2);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].label, "Q1");
        assert_eq!(timeline[0].sprints, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(timeline[1].sprints, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(timeline[2].label, "Q3");
        assert_eq!(timeline[2].sprints.last(), Some(&18));
    }

    #[test]
    fn test_sprint_timeline_covers_every_sprint_once() {
        let timeline = sprint_timeline(2, 3);
        let all: Vec<u32> = timeline.iter().flat_map(|q| q.sprints.clone()).collect();
        assert_eq!(all, (1..=calculate_total_sprints(2, 3, QUARTERS)).collect::<Vec<_>>());
    }

    #[test]
    fn test_quarter_of_sprint() {
        let config = sprint_config();
        assert_eq!(quarter_of_sprint(&config, 1), Some(1));
        assert_eq!(quarter_of_sprint(&config, 6), Some(1));
        assert_eq!(quarter_of_sprint(&config, 7), Some(2));
        assert_eq!(quarter_of_sprint(&config, 18), Some(3));
        assert_eq!(quarter_of_sprint(&config, 19), None);
        assert_eq!(quarter_of_sprint(&config, 0), None);
    }

    #[test]
    fn test_sprint_dates_follow_cadence() {
        let mut config = sprint_config();
        let (start, end) = sprint_dates(&config, 1).unwrap();
        assert_eq!(start, fixed_time());
        assert_eq!(end - start, Duration::days(14));

        config.cadence = SprintCadence::ThreeWeek;
        let (start, _) = sprint_dates(&config, 3).unwrap();
        assert_eq!(start, fixed_time() + Duration::days(42));
        assert!(sprint_dates(&config, 19).is_none());
    }

    #[test]
    fn test_total_sprints_saturates() {
        assert_eq!(calculate_total_sprints(4_000_000_000, 2, QUARTERS), u32::MAX);
        assert_eq!(calculate_total_sprints(100_000, 100_000, QUARTERS), u32::MAX);
    }

    #[test]
    fn test_out_of_range_factors_are_bounded() {
        let timeline = sprint_timeline(100_000, 100_000);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].sprints.len(), MAX_SPRINTS_PER_QUARTER as usize);
        assert_eq!(timeline[2].sprints.last(), Some(&(MAX_SPRINTS_PER_QUARTER * 3)));

        let mut config = sprint_config();
        config.sprints_per_increment = 100_000;
        config.increments_per_quarter = 100_000;
        config.total_sprints = u32::MAX;
        assert_eq!(config.sprints_per_quarter(), u32::MAX);
        assert_eq!(quarter_of_sprint(&config, u32::MAX), Some(1));
        assert!(sprint_dates(&config, u32::MAX).is_none());
        assert!(sprint_dates(&config, 2).is_some());
    }
}
