//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the query-string and JSON shapes of the browse
//! endpoints, decoupled from the core browser types.

pub mod browse;

pub use browse::{BrowseQuery, BrowseResponse, RevalidateQuery, RevalidateResponse};
