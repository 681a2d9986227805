//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - Adapters map their own errors into the port error at the boundary

pub mod repository_source;

pub use repository_source::{
    RepositorySource, SourceError, SourceResult, StaticRepositorySource,
};
