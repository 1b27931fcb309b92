//! Persistence for roadmap snapshots.
//!
//! The whole [`RoadmapData`](crate::model::RoadmapData) is serialized as one
//! camelCase JSON document under a single key ([`STORAGE_KEY`]).
//!
//! ## Components
//!
//! - [`KeyValueStore`]: minimal string get/set/remove backend
//! - [`FileStore`]: one `<key>.json` file per key, written atomically
//! - [`MemoryStore`]: in-process backend with an optional byte quota
//! - [`RoadmapStore`]: load/save/import/export with seeding and graceful failure

mod gateway;
mod kv;

pub use gateway::{RoadmapStore, STORAGE_KEY, parse_import};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
