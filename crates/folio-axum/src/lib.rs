#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by integration tests
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod cache;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use cache::{RecordCache, Snapshot};
pub use error::HttpError;
pub use page::SiteConfig;
pub use routes::create_router;
pub use state::AppState;
