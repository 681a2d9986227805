//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, caching, rendering).

mod record;

pub use record::{RepositoryRecord, sort_newest_first};
