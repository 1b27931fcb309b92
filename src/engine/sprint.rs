use super::input::SprintConfigPatch;
use crate::model::RoadmapData;

impl RoadmapData {
    /// Merge `patch` into the sprint configuration as given. `total_sprints`
    /// is taken from the patch, never derived here.
    pub fn update_sprint_config(&self, patch: &SprintConfigPatch) -> Self {
        let mut next = self.clone();
        patch.apply(&mut next.sprint_config);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SprintCadence;
    use crate::testing::roadmap;

    #[test]
    fn test_update_sprint_config_merges() {
        let data = roadmap();
        let next = data.update_sprint_config(&SprintConfigPatch {
            cadence: Some(SprintCadence::ThreeWeek),
            ..SprintConfigPatch::default()
        });

        assert_eq!(next.sprint_config.cadence, SprintCadence::ThreeWeek);
        assert_eq!(next.sprint_config.sprints_per_increment, 3);
        assert_eq!(next.sprint_config.total_sprints, 18);
        assert_eq!(next.initiatives, data.initiatives);
    }

    #[test]
    fn test_update_sprint_config_does_not_derive_total() {
        let data = roadmap();
        let next = data.update_sprint_config(&SprintConfigPatch {
            sprints_per_increment: Some(4),
            ..SprintConfigPatch::default()
        });

        assert_eq!(next.sprint_config.sprints_per_increment, 4);
        assert_eq!(next.sprint_config.total_sprints, 18);
    }
}
