//! # Sprintmap - A sprint roadmap planner
//!
//! Sprintmap keeps a four-level plan (initiatives, epics, features and
//! stories), the team working on it, and the sprint cadence it is scheduled
//! against. The whole roadmap is one JSON document in local storage.
//!
//! ## Features
//!
//! - **Hierarchy editing**: add, update and cascade-delete work items at any level
//! - **Assignments**: team members on any item, with a per-member filtered view
//! - **Sprint math**: configurable cadence, increments and a three-quarter timeline
//! - **Import/export**: the stored document doubles as the exchange format
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a roadmap (seeded with sample data)
//! sprintmap init
//!
//! # Show the hierarchy
//! sprintmap tree
//!
//! # Add an epic to an initiative
//! sprintmap add epic --parent init-001 "Notifications"
//!
//! # Delete a feature and its stories
//! sprintmap delete feat-001
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Data models (Initiative, Epic, Feature, Story, TeamMember, ...)
//! - [`engine`]: Snapshot-to-snapshot mutations
//! - [`query`]: Derived views (counts, filters, sprint math)
//! - [`validation`]: Field-level input checks
//! - [`storage`]: Key-value backends and the roadmap store
//! - [`session`]: Current snapshot, dirty tracking and persistence
//! - [`cli`]: Command-line interface definitions

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.sprintmap.toml` configuration files and project discovery.
pub mod config;

pub mod engine;

/// Error types and result aliases.
///
/// Defines `SprintmapError` enum and `Result<T>` type alias.
pub mod error;

pub mod id;
pub mod logging;
pub mod model;
pub mod query;

/// The roadmap a fresh store is seeded with.
pub mod sample;

pub mod session;
pub mod storage;

/// Input validation utilities.
///
/// Checks drafts, patches and sprint configuration before they reach the engine.
pub mod validation;

#[cfg(test)]
mod testing;
