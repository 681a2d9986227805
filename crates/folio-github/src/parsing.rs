//! JSON parsing functions for GitHub API responses.
//!
//! Sync parsing functions that convert raw listing JSON into domain records.

use crate::error::{GhError, GhResult};
use folio_core::RepositoryRecord;
use serde_json::Value;

// ============================================================================
// Repository Parsing
// ============================================================================

/// Parse a single repository object into a `RepositoryRecord`.
///
/// Returns None if the entry lacks an id, a non-empty name, or an `html_url`.
pub fn parse_repository(json: &Value) -> Option<RepositoryRecord> {
    let id = json.get("id").and_then(Value::as_u64)?;
    let name = json
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty())?;
    let url = json
        .get("html_url")
        .and_then(Value::as_str)
        .filter(|u| !u.trim().is_empty())?;

    let mut record = RepositoryRecord::new(id, name, url);

    if let Some(description) = json.get("description").and_then(Value::as_str) {
        record = record.with_description(description);
    }
    if let Some(language) = json.get("language").and_then(Value::as_str) {
        record = record.with_language(language);
    }
    if let Some(created_at) = json.get("created_at").and_then(Value::as_str) {
        record = record.with_created_at(created_at);
    }

    Some(record)
}

/// Parse a repository listing.
///
/// The body must be a JSON array; malformed entries are skipped.
pub fn parse_repo_list(json: &Value) -> GhResult<Vec<RepositoryRecord>> {
    let entries = json.as_array().ok_or_else(|| GhError::InvalidResponse {
        message: "expected a JSON array of repositories".to_string(),
    })?;

    let records: Vec<RepositoryRecord> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let parsed = parse_repository(entry);
            if parsed.is_none() {
                tracing::debug!(target: "folio.github", index, "Skipping malformed repository entry");
            }
            parsed
        })
        .collect();

    Ok(records)
}
