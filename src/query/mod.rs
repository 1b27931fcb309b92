//! Derived views over a roadmap snapshot.
//!
//! - [`count_children`] / [`delete_message`]: cascade-delete summaries
//! - [`is_team_member_assigned`] / [`filter_by_team_member`]: assignment views
//! - [`calculate_total_sprints`] / [`sprint_timeline`]: sprint and quarter math
//! - [`find_item`] / [`item_at`]: locating nested work items

mod assignment;
mod counts;
mod lookup;
mod sprints;

pub use assignment::{filter_by_team_member, is_team_member_assigned};
pub use counts::{ItemCounts, count_children, delete_message};
pub use lookup::{find_item, item_at};
pub use sprints::{
    MAX_SPRINTS_PER_QUARTER, QUARTERS, QuarterSpan, calculate_total_sprints, quarter_of_sprint,
    sprint_dates, sprint_timeline,
};
