//! Core domain types and port definitions for folio.
//!
//! This crate holds everything the portfolio page needs that does not touch
//! the network or a web framework:
//!
//! - `domain` - the `RepositoryRecord` value received from the upstream source
//! - `browser` - year tabs, search/language filtering and pagination
//! - `render` - the card projection of a single record
//! - `ports` - the `RepositorySource` abstraction and an in-memory implementation

#![deny(unused_crate_dependencies)]

pub mod browser;
pub mod domain;
pub mod ports;
pub mod render;

// Re-export commonly used types for convenience
pub use browser::{
    Browser, BrowserAction, BrowserView, Catalog, FilterState, PAGE_SIZE, Pagination,
    TabDescriptor, TabKey, TabView, YearGroup,
};
pub use domain::{RepositoryRecord, sort_newest_first};
pub use ports::{RepositorySource, SourceError, SourceResult, StaticRepositorySource};
pub use render::RepoCard;
