//! Mutation engine.
//!
//! Every operation is a method on [`RoadmapData`](crate::model::RoadmapData)
//! that borrows the current snapshot and returns the next one. Operations
//! addressing an id that does not exist return a snapshot equal to the input.
//!
//! Nested items are addressed by the ids of every container on their path
//! (initiative, epic, feature). A successful nested change refreshes
//! `updated_at` on the changed item and on each of its ancestors.
//!
//! The engine knows nothing about storage; persisting the result is the
//! caller's job (see [`crate::session::RoadmapSession`]).

mod hierarchy;
mod input;
mod sprint;
mod team;

pub use input::{
    InitiativeDraft, InitiativePatch, NewTeamMember, SprintConfigPatch, StoryDraft, StoryPatch,
    TeamMemberPatch, WorkItemDraft, WorkItemPatch,
};
