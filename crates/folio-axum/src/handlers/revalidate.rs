//! Cache invalidation handler.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use chrono::Utc;

use crate::dto::{RevalidateQuery, RevalidateResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const TOKEN_HEADER: &str = "x-revalidate-token";

/// Drop the cached snapshot so the next page load fetches again.
///
/// The token may come from the `x-revalidate-token` header or the `token`
/// query parameter; the header wins when both are present.
pub async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RevalidateQuery>,
) -> Result<Json<RevalidateResponse>, HttpError> {
    let provided = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or(query.token);

    let authorized = match (state.revalidate_secret.as_deref(), provided.as_deref()) {
        (Some(secret), Some(token)) => constant_time_eq(secret.as_bytes(), token.as_bytes()),
        _ => false,
    };

    if !authorized {
        tracing::warn!(
            target: "folio.revalidate",
            token_present = provided.is_some(),
            "Rejected revalidation request"
        );
        return Err(HttpError::Unauthorized("Invalid token".to_string()));
    }

    let cleared = state.cache.invalidate().await;
    Ok(Json(RevalidateResponse {
        revalidated: true,
        cleared,
        now: Utc::now(),
    }))
}

/// Compare secrets without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
