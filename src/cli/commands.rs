use crate::model::{SprintCadence, StoryPoints, TeamRole, WorkItemStatus};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sprintmap")]
#[command(
    author,
    version,
    about = "Plan initiatives, epics, features and stories across sprints"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .sprintmap.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to data directory (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a roadmap in the current directory
    Init,

    /// Show the roadmap hierarchy
    Tree {
        /// Only show items assigned to this team member
        #[arg(short, long)]
        member: Option<String>,

        /// Also show children of collapsed items
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single work item
    Show {
        /// Work item ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage team members
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Add a work item
    #[command(visible_alias = "new")]
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// Update a work item
    Update {
        /// Work item ID
        id: String,

        #[command(flatten)]
        fields: UpdateFields,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a work item and everything below it
    #[command(visible_alias = "rm")]
    Delete {
        /// Work item ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand or collapse a work item in the tree
    Toggle {
        /// Work item ID
        id: String,
    },

    /// Show or change the sprint configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show sprints grouped by quarter
    Timeline {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the roadmap as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace the roadmap with an exported JSON file
    Import {
        /// Path to the exported file
        file: String,
    },

    /// Discard all data and restore the sample roadmap
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// List team members
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a team member
    Add {
        /// Full name
        name: String,

        /// Role on the team
        #[arg(short, long, value_enum, default_value = "developer")]
        role: TeamRoleArg,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Update a team member
    Update {
        /// Team member ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New role
        #[arg(short, long, value_enum)]
        role: Option<TeamRoleArg>,

        /// New email (empty string clears it)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Remove a team member who is not assigned to any work item
    #[command(visible_alias = "rm")]
    Remove {
        /// Team member ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AddItem {
    /// Add an initiative
    Initiative {
        #[command(flatten)]
        fields: ItemFields,

        /// Problem the initiative addresses
        #[arg(long)]
        problem: Option<String>,

        /// Outcome that marks it done
        #[arg(long)]
        outcome: Option<String>,
    },

    /// Add an epic to an initiative
    Epic {
        /// Parent initiative ID
        #[arg(short, long)]
        parent: String,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Add a feature to an epic
    Feature {
        /// Parent epic ID
        #[arg(short, long)]
        parent: String,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Add a story to a feature
    Story {
        /// Parent feature ID
        #[arg(short, long)]
        parent: String,

        #[command(flatten)]
        fields: ItemFields,

        /// Story points (1, 2, 3, 5, 8 or 13)
        #[arg(long)]
        points: Option<StoryPoints>,
    },
}

/// Fields shared by every new work item.
#[derive(Args)]
pub struct ItemFields {
    /// Title of the work item
    pub title: String,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Sprint number
    #[arg(short, long)]
    pub sprint: Option<u32>,

    /// Assigned team member IDs
    #[arg(short, long)]
    pub assign: Vec<String>,

    /// Initial status
    #[arg(long, value_enum)]
    pub status: Option<WorkItemStatusArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct UpdateFields {
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description (empty string clears it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// New sprint number (0 clears it)
    #[arg(short, long)]
    pub sprint: Option<u32>,

    /// Replace assigned team members
    #[arg(short, long)]
    pub assign: Vec<String>,

    /// Remove all assigned team members
    #[arg(long, conflicts_with = "assign")]
    pub unassign: bool,

    /// New status
    #[arg(long, value_enum)]
    pub status: Option<WorkItemStatusArg>,

    /// Story points, stories only (0 clears them)
    #[arg(long)]
    pub points: Option<u8>,

    /// Problem statement, initiatives only (empty string clears it)
    #[arg(long)]
    pub problem: Option<String>,

    /// Desired outcome, initiatives only (empty string clears it)
    #[arg(long)]
    pub outcome: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the sprint configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the sprint configuration; total sprints are recomputed
    Set {
        /// Sprint length
        #[arg(long, value_enum)]
        cadence: Option<SprintCadenceArg>,

        /// Sprints per increment (1-10)
        #[arg(long)]
        sprints_per_increment: Option<u32>,

        /// Increments per quarter (1-6)
        #[arg(long)]
        increments_per_quarter: Option<u32>,

        /// First day of sprint 1 (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WorkItemStatusArg {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl From<WorkItemStatusArg> for WorkItemStatus {
    fn from(arg: WorkItemStatusArg) -> Self {
        match arg {
            WorkItemStatusArg::NotStarted => WorkItemStatus::NotStarted,
            WorkItemStatusArg::InProgress => WorkItemStatus::InProgress,
            WorkItemStatusArg::Completed => WorkItemStatus::Completed,
            WorkItemStatusArg::Blocked => WorkItemStatus::Blocked,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TeamRoleArg {
    Developer,
    Designer,
    Pm,
    Qa,
}

impl From<TeamRoleArg> for TeamRole {
    fn from(arg: TeamRoleArg) -> Self {
        match arg {
            TeamRoleArg::Developer => TeamRole::Developer,
            TeamRoleArg::Designer => TeamRole::Designer,
            TeamRoleArg::Pm => TeamRole::Pm,
            TeamRoleArg::Qa => TeamRole::Qa,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SprintCadenceArg {
    #[value(name = "2-week")]
    TwoWeek,
    #[value(name = "3-week")]
    ThreeWeek,
}

impl From<SprintCadenceArg> for SprintCadence {
    fn from(arg: SprintCadenceArg) -> Self {
        match arg {
            SprintCadenceArg::TwoWeek => SprintCadence::TwoWeek,
            SprintCadenceArg::ThreeWeek => SprintCadence::ThreeWeek,
        }
    }
}
