//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the repository source, the
/// snapshot cache and the page content.
pub type AppState = Arc<AxumContext>;
