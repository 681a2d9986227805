//! Repository record domain type.

use chrono::{DateTime, Datelike, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// One repository summary as received from the upstream listing.
///
/// Field names on the wire follow the upstream JSON shape
/// (`html_url`, `created_at`). Records are immutable snapshots: they are
/// created once per fetch and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Upstream identifier, unique within one fetch.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Link target for the repository page.
    #[serde(rename = "html_url")]
    pub url: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language as reported upstream.
    #[serde(default)]
    pub language: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(
        rename = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl RepositoryRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: u64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            description: None,
            language: None,
            created_at: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the primary language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the creation timestamp (ISO-8601 / RFC 3339).
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Parsed creation timestamp.
    ///
    /// Returns `None` when the field is absent or not a valid RFC 3339
    /// timestamp; an unparseable value is treated exactly like a missing one.
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
    }

    /// Creation timestamp converted to local time.
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        self.created().map(|dt| dt.with_timezone(&Local))
    }

    /// Calendar year of creation in local time.
    pub fn created_year(&self) -> Option<i32> {
        self.created_local().map(|dt| dt.year())
    }

    /// Description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Language, if present and not blank.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Sort records newest first by creation time.
///
/// The sort is stable. Records without a parseable timestamp are ordered as
/// if created at the Unix epoch, which places them after every dated record.
pub fn sort_newest_first(records: &mut [RepositoryRecord]) {
    records.sort_by_key(|record| {
        std::cmp::Reverse(record.created().map_or(0, |dt| dt.timestamp_millis()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_shape() {
        let record: RepositoryRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "folio",
            "html_url": "https://github.com/octo/folio",
            "description": null,
            "language": "Rust",
            "created_at": "2024-06-15T12:00:00Z",
            "stargazers_count": 3
        }))
        .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.url, "https://github.com/octo/folio");
        assert!(record.description.is_none());
        assert_eq!(record.language(), Some("Rust"));
        assert_eq!(record.created_year(), Some(2024));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let record: RepositoryRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "bare",
            "html_url": "https://github.com/octo/bare"
        }))
        .unwrap();

        assert!(record.created_at.is_none());
        assert!(record.created_year().is_none());
        assert!(record.language().is_none());
    }

    #[test]
    fn test_serialize_keeps_upstream_field_names() {
        let record = RepositoryRecord::new(7, "x", "https://example.com/x")
            .with_created_at("2023-01-10T08:00:00Z");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["html_url"], "https://example.com/x");
        assert_eq!(value["created_at"], "2023-01-10T08:00:00Z");
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_invalid_timestamp_is_absent() {
        let record = RepositoryRecord::new(1, "a", "u").with_created_at("last tuesday");
        assert!(record.created().is_none());
        assert!(record.created_year().is_none());
    }

    #[test]
    fn test_blank_fields_are_treated_as_absent() {
        let record = RepositoryRecord::new(1, "a", "u")
            .with_description("   ")
            .with_language("");
        assert!(record.description().is_none());
        assert!(record.language().is_none());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![
            RepositoryRecord::new(1, "old", "u").with_created_at("2021-06-01T00:00:00Z"),
            RepositoryRecord::new(2, "undated", "u"),
            RepositoryRecord::new(3, "new", "u").with_created_at("2024-06-01T00:00:00Z"),
            RepositoryRecord::new(4, "mid", "u").with_created_at("2023-06-01T00:00:00Z"),
        ];

        sort_newest_first(&mut records);

        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
