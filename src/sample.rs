//! The dataset a fresh store is seeded with.

use crate::model::{
    Epic, Feature, Initiative, RoadmapData, SprintCadence, SprintConfig, Story, StoryPoints,
    TeamMember, TeamRole, WorkItemStatus,
};
use crate::query::{QUARTERS, calculate_total_sprints};
use chrono::{DateTime, NaiveDate, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub fn default_sprint_config() -> SprintConfig {
    SprintConfig {
        cadence: SprintCadence::TwoWeek,
        sprints_per_increment: 3,
        increments_per_quarter: 2,
        planning_start_date: Utc::now(),
        total_sprints: calculate_total_sprints(3, 2, QUARTERS),
    }
}

fn default_team_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new(
            "tm-001".to_string(),
            "Sarah Chen".to_string(),
            TeamRole::Developer,
        )
        .with_email(Some("sarah.chen@example.com".to_string())),
        TeamMember::new(
            "tm-002".to_string(),
            "Marcus Johnson".to_string(),
            TeamRole::Pm,
        )
        .with_email(Some("marcus.johnson@example.com".to_string())),
    ]
}

struct Seed<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    sprint: Option<u32>,
    assigned: &'a [&'a str],
    status: WorkItemStatus,
    expanded: bool,
    created: DateTime<Utc>,
}

impl Seed<'_> {
    fn apply(&self, base: &mut crate::model::WorkItemBase) {
        base.description = Some(self.description.to_string());
        base.sprint_number = self.sprint;
        base.assigned_members = self.assigned.iter().map(|s| s.to_string()).collect();
        base.status = self.status;
        base.is_expanded = self.expanded;
        base.created_at = self.created;
    }

    fn story(&self, feature: &str, points: StoryPoints) -> Story {
        let mut story = Story::new(self.id.to_string(), self.title.to_string(), feature.to_string());
        self.apply(&mut story.base);
        story.story_points = Some(points);
        story
    }

    fn feature(&self, epic: &str, stories: Vec<Story>) -> Feature {
        let mut feature =
            Feature::new(self.id.to_string(), self.title.to_string(), epic.to_string());
        self.apply(&mut feature.base);
        feature.stories = stories;
        feature
    }

    fn epic(&self, initiative: &str, features: Vec<Feature>) -> Epic {
        let mut epic = Epic::new(
            self.id.to_string(),
            self.title.to_string(),
            initiative.to_string(),
        );
        self.apply(&mut epic.base);
        epic.features = features;
        epic
    }
}

fn sample_initiative() -> Initiative {
    use WorkItemStatus::{Completed, InProgress, NotStarted};

    let sso = Seed {
        id: "feat-001",
        title: "Single Sign-On Integration",
        description: "Integrate with corporate SSO provider (Okta)",
        sprint: Some(1),
        assigned: &["tm-001"],
        status: Completed,
        expanded: true,
        created: date(2025, 1, 10),
    }
    .feature(
        "epic-001",
        vec![
            Seed {
                id: "story-001",
                title: "Configure Okta SAML integration",
                description: "Set up SAML 2.0 integration with Okta",
                sprint: Some(1),
                assigned: &["tm-001"],
                status: Completed,
                expanded: false,
                created: date(2025, 1, 12),
            }
            .story("feat-001", StoryPoints::Five),
            Seed {
                id: "story-002",
                title: "Build SSO callback handler",
                description: "Create endpoint to handle SSO callbacks and session creation",
                sprint: Some(1),
                assigned: &["tm-001"],
                status: Completed,
                expanded: false,
                created: date(2025, 1, 12),
            }
            .story("feat-001", StoryPoints::Eight),
        ],
    );

    let mfa = Seed {
        id: "feat-002",
        title: "Multi-Factor Authentication",
        description: "Add MFA support for enhanced security",
        sprint: Some(2),
        assigned: &["tm-001"],
        status: Completed,
        expanded: false,
        created: date(2025, 1, 10),
    }
    .feature(
        "epic-001",
        vec![
            Seed {
                id: "story-003",
                title: "Implement TOTP-based MFA",
                description: "Add time-based one-time password support",
                sprint: Some(2),
                assigned: &["tm-001"],
                status: Completed,
                expanded: false,
                created: date(2025, 1, 20),
            }
            .story("feat-002", StoryPoints::Five),
        ],
    );

    let summary = Seed {
        id: "feat-003",
        title: "Account Summary Widget",
        description: "Display key account information at a glance",
        sprint: Some(3),
        assigned: &["tm-001"],
        status: InProgress,
        expanded: true,
        created: date(2025, 2, 1),
    }
    .feature(
        "epic-002",
        vec![
            Seed {
                id: "story-004",
                title: "Design account summary layout",
                description: "Create responsive layout for account overview",
                sprint: Some(3),
                assigned: &["tm-001"],
                status: InProgress,
                expanded: false,
                created: date(2025, 2, 5),
            }
            .story("feat-003", StoryPoints::Three),
            Seed {
                id: "story-005",
                title: "Fetch and display account balance",
                description: "Integrate with account API to show current balance",
                sprint: Some(3),
                assigned: &["tm-001"],
                status: NotStarted,
                expanded: false,
                created: date(2025, 2, 5),
            }
            .story("feat-003", StoryPoints::Five),
        ],
    );

    let auth = Seed {
        id: "epic-001",
        title: "Authentication & Security Overhaul",
        description: "Implement modern authentication with SSO and enhanced security features",
        sprint: Some(1),
        assigned: &["tm-001"],
        status: Completed,
        expanded: true,
        created: date(2025, 1, 5),
    }
    .epic("init-001", vec![sso, mfa]);

    let dashboard = Seed {
        id: "epic-002",
        title: "Dashboard Redesign",
        description: "Create modern, intuitive dashboard with key customer metrics",
        sprint: Some(3),
        assigned: &["tm-001", "tm-002"],
        status: InProgress,
        expanded: true,
        created: date(2025, 1, 5),
    }
    .epic("init-001", vec![summary]);

    let mut initiative = Initiative::new(
        "init-001".to_string(),
        "Customer Portal Modernization".to_string(),
    );
    initiative.base.description = Some(
        "Modernize the customer portal to improve user experience and reduce support tickets"
            .to_string(),
    );
    initiative.problem_statement = Some(
        "Current customer portal has a 45% bounce rate and generates 200+ support tickets \
         weekly due to confusing navigation and outdated UI."
            .to_string(),
    );
    initiative.desired_outcome = Some(
        "Reduce bounce rate to <20%, cut support tickets by 60%, and increase customer \
         satisfaction score from 3.2 to 4.5+"
            .to_string(),
    );
    initiative.base.assigned_members = vec!["tm-002".to_string()];
    initiative.base.status = InProgress;
    initiative.base.is_expanded = true;
    initiative.base.created_at = date(2025, 1, 1);
    initiative.epics = vec![auth, dashboard];
    initiative
}

/// Two team members and one initiative populated down to stories.
pub fn default_roadmap_data() -> RoadmapData {
    RoadmapData {
        team_members: default_team_members(),
        initiatives: vec![sample_initiative()],
        sprint_config: default_sprint_config(),
        last_modified: Utc::now(),
    }
}
