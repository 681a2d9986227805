//! Home page handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use chrono::{Datelike, Local};
use folio_core::Browser;

use crate::dto::BrowseQuery;
use crate::page::render_home;
use crate::state::AppState;

/// Render the home page for the requested browse state.
///
/// Malformed parameters fall back to defaults instead of failing the page.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<BrowseQuery>, QueryRejection>,
) -> Html<String> {
    let query = query.map_or_else(
        |rejection| {
            tracing::debug!(target: "folio.page", error = %rejection, "Ignoring malformed query");
            BrowseQuery::default()
        },
        |Query(query)| query,
    );
    let snapshot = state.cache.snapshot().await;
    let browser = Browser::restore(snapshot.catalog.clone(), query.filter_state_lenient());

    Html(render_home(&state.site, &browser, Local::now().year()))
}
