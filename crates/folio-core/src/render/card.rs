//! Card projection of a single repository record.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::domain::RepositoryRecord;

/// Placeholder shown when a record has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Badge label shown when a record has no language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Badge class for languages without a dedicated colour.
const DEFAULT_BADGE: &str = "bg-gray-400";

const LANGUAGE_BADGES: &[(&str, &str)] = &[
    ("TypeScript", "bg-blue-500"),
    ("JavaScript", "bg-yellow-500"),
    ("Python", "bg-green-500"),
    ("Swift", "bg-orange-500"),
    ("Kotlin", "bg-purple-500"),
    ("Java", "bg-red-500"),
    ("C++", "bg-pink-500"),
    ("C", "bg-gray-500"),
    ("C#", "bg-indigo-500"),
    ("HTML", "bg-red-600"),
    ("CSS", "bg-blue-600"),
    ("Assembly", "bg-gray-600"),
    ("Jupyter Notebook", "bg-orange-600"),
];

/// Badge class for a language label.
pub fn badge_class(language: &str) -> &'static str {
    LANGUAGE_BADGES
        .iter()
        .find(|(name, _)| *name == language)
        .map_or(DEFAULT_BADGE, |&(_, class)| class)
}

/// Format a creation date as e.g. `Mar 05, 2024`.
pub fn format_created<Tz: TimeZone>(created: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created.format("%b %d, %Y").to_string()
}

/// Everything a card needs, with fallbacks already applied.
///
/// Stateless: a pure function of one record. A malformed creation date is
/// rendered as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoCard {
    /// Record id, used as a stable key.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Link target, opened in a new tab.
    pub url: String,
    /// Description or [`NO_DESCRIPTION`].
    pub description: String,
    /// Language or [`UNKNOWN_LANGUAGE`].
    pub language: String,
    /// Badge colour class for the language.
    pub badge_class: &'static str,
    /// Local creation date; `None` hides the date line.
    pub created_label: Option<String>,
}

impl From<&RepositoryRecord> for RepoCard {
    fn from(record: &RepositoryRecord) -> Self {
        let language = record.language().unwrap_or(UNKNOWN_LANGUAGE);

        Self {
            id: record.id,
            name: record.name.clone(),
            url: record.url.clone(),
            description: record.description().unwrap_or(NO_DESCRIPTION).to_string(),
            language: language.to_string(),
            badge_class: badge_class(language),
            created_label: record.created_local().map(|dt| format_created(&dt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_card_uses_record_fields() {
        let record = RepositoryRecord::new(3, "folio", "https://github.com/octo/folio")
            .with_description("Portfolio site")
            .with_language("TypeScript")
            .with_created_at("2024-03-05T12:00:00Z");

        let card = RepoCard::from(&record);

        assert_eq!(card.name, "folio");
        assert_eq!(card.url, "https://github.com/octo/folio");
        assert_eq!(card.description, "Portfolio site");
        assert_eq!(card.language, "TypeScript");
        assert_eq!(card.badge_class, "bg-blue-500");
        assert!(card.created_label.is_some());
    }

    #[test]
    fn test_card_fallbacks() {
        let card = RepoCard::from(&RepositoryRecord::new(1, "bare", "https://x"));

        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.language, UNKNOWN_LANGUAGE);
        assert_eq!(card.badge_class, DEFAULT_BADGE);
        assert!(card.created_label.is_none());
    }

    #[test]
    fn test_malformed_date_is_omitted() {
        let record = RepositoryRecord::new(1, "a", "https://x").with_created_at("2024-13-45");
        assert!(RepoCard::from(&record).created_label.is_none());
    }

    #[test]
    fn test_badge_class_is_exact_match() {
        assert_eq!(badge_class("C"), "bg-gray-500");
        assert_eq!(badge_class("C#"), "bg-indigo-500");
        assert_eq!(badge_class("Rust"), DEFAULT_BADGE);
        assert_eq!(badge_class("typescript"), DEFAULT_BADGE);
    }

    #[test]
    fn test_format_created() {
        let dt = DateTime::parse_from_rfc3339("2024-03-05T12:00:00+00:00")
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(0).unwrap());
        assert_eq!(format_created(&dt), "Mar 05, 2024");
    }
}
