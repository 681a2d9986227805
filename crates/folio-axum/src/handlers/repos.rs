//! Browse API handler.

use axum::Json;
use axum::extract::{Query, State};
use folio_core::Browser;

use crate::dto::{BrowseQuery, BrowseResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// JSON view of the cached records for the requested browse state.
pub async fn browse(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<BrowseResponse>, HttpError> {
    let filter = query.filter_state()?;
    let snapshot = state.cache.snapshot().await;
    let browser = Browser::restore(snapshot.catalog.clone(), filter);

    Ok(Json(BrowseResponse::from_browser(&browser, snapshot.fetched_at)))
}
