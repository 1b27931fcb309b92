use super::input::{NewTeamMember, TeamMemberPatch};
use crate::id::{TEAM_MEMBER_PREFIX, generate_id};
use crate::model::RoadmapData;

impl RoadmapData {
    pub fn add_team_member(&self, member: NewTeamMember) -> Self {
        self.insert_team_member(generate_id(TEAM_MEMBER_PREFIX), member)
    }

    pub fn insert_team_member(&self, id: String, member: NewTeamMember) -> Self {
        let mut next = self.clone();
        next.team_members.push(member.into_member(id));
        next
    }

    pub fn update_team_member(&self, id: &str, patch: &TeamMemberPatch) -> Self {
        let mut next = self.clone();
        if let Some(member) = next.team_members.iter_mut().find(|m| m.id == id) {
            patch.apply(member);
        }
        next
    }

    /// Removes the member. Work items still referencing the id are left as
    /// they are; check [`crate::query::is_team_member_assigned`] first.
    pub fn delete_team_member(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.team_members.retain(|m| m.id != id);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TeamRole;
    use crate::testing::roadmap;

    #[test]
    fn test_add_team_member_generates_id() {
        let data = roadmap();
        let next = data.add_team_member(
            NewTeamMember::new("Ana Lima", TeamRole::Qa).with_email(Some("ana@example.com".into())),
        );

        let added = next.team_members.last().unwrap();
        assert!(added.id.starts_with("tm-"));
        assert_eq!(added.name, "Ana Lima");
        assert_eq!(added.role, TeamRole::Qa);
        assert_eq!(added.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_add_then_delete_restores_team() {
        let data = roadmap();
        let added = data.add_team_member(NewTeamMember::new("Temp", TeamRole::Designer));
        let id = added.team_members.last().unwrap().id.clone();

        let removed = added.delete_team_member(&id);
        assert_eq!(removed.team_members, data.team_members);
    }

    #[test]
    fn test_update_team_member_only_touches_given_fields() {
        let data = roadmap();
        let next = data.update_team_member(
            "tm-002",
            &TeamMemberPatch {
                role: Some(TeamRole::Pm),
                ..TeamMemberPatch::default()
            },
        );

        let member = next.team_member("tm-002").unwrap();
        assert_eq!(member.role, TeamRole::Pm);
        assert_eq!(member.name, "Marcus Johnson");
        assert_eq!(next.team_members[0], data.team_members[0]);
    }

    #[test]
    fn test_unknown_member_is_no_op() {
        let data = roadmap();
        let patch = TeamMemberPatch {
            name: Some("Ghost".to_string()),
            ..TeamMemberPatch::default()
        };
        assert_eq!(data.update_team_member("tm-999", &patch), data);
        assert_eq!(data.delete_team_member("tm-999"), data);
    }

    #[test]
    fn test_delete_does_not_unassign() {
        let data = roadmap();
        let next = data.delete_team_member("tm-001");
        assert!(next.team_member("tm-001").is_none());
        assert!(crate::query::is_team_member_assigned("tm-001", &next.initiatives));
    }
}
