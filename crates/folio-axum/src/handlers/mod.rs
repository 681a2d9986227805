//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one endpoint area. Handlers are
//! thin: they read the cached snapshot or the source and hand it to the
//! core browser.

pub mod github;
pub mod home;
pub mod repos;
pub mod revalidate;
