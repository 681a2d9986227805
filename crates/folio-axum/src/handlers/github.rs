//! Raw repository listing handler.

use axum::Json;
use axum::extract::State;
use folio_core::RepositoryRecord;

use crate::error::HttpError;
use crate::state::AppState;

/// Fetch the listing straight from the source, bypassing the cache.
///
/// Records keep the upstream field names (`html_url`, `created_at`).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RepositoryRecord>>, HttpError> {
    Ok(Json(state.source.fetch_records().await?))
}
