//! Filter state and the pure transitions applied to it.

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, TabKey};
use crate::domain::RepositoryRecord;

/// Ephemeral browsing state for one page view.
///
/// Every user interaction maps to one of the `with_*`/`toggle_*`/`*_page`
/// transitions below. Each consumes the state and returns the next one; none
/// of them touch the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected tab; `None` until tabs are known.
    pub tab: Option<TabKey>,
    /// Free-text query, possibly empty.
    pub query: String,
    /// Selected language facet; `None` means no filter.
    pub language: Option<String>,
    /// Current page, 1-based.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tab: None,
            query: String::new(),
            language: None,
            page: 1,
        }
    }
}

impl FilterState {
    /// Select a tab. Unknown or disabled tabs leave the state untouched.
    #[must_use]
    pub fn select_tab(mut self, catalog: &Catalog, key: TabKey) -> Self {
        if catalog.tab(key).is_some_and(|tab| tab.is_enabled()) {
            self.tab = Some(key);
            self.page = 1;
        }
        self
    }

    /// Replace the search query. A different query resets to page 1.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
        self
    }

    /// Select a language, or deselect it if it is already selected.
    #[must_use]
    pub fn toggle_language(mut self, language: &str) -> Self {
        if self.language.as_deref() == Some(language) {
            self.language = None;
        } else {
            self.language = Some(language.to_string());
        }
        self.page = 1;
        self
    }

    /// Clear query and language, back to page 1. The tab is kept.
    #[must_use]
    pub fn clear_filters(mut self) -> Self {
        self.query.clear();
        self.language = None;
        self.page = 1;
        self
    }

    /// Jump to a page. Bounds are enforced when the state is reconciled.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Advance one page unless already on the last.
    #[must_use]
    pub fn next_page(mut self, total_pages: usize) -> Self {
        if self.page < total_pages {
            self.page += 1;
        }
        self
    }

    /// Go back one page unless already on the first.
    #[must_use]
    pub fn previous_page(mut self) -> Self {
        if self.page > 1 {
            self.page -= 1;
        }
        self
    }

    /// Trimmed query, if non-empty.
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether either the query or the language filter is active.
    pub fn has_filters(&self) -> bool {
        self.active_query().is_some() || self.language.is_some()
    }

    /// Whether a record passes both the query and the language filter.
    pub fn matches(&self, record: &RepositoryRecord) -> bool {
        self.active_query()
            .is_none_or(|query| matches_query(record, &query.to_lowercase()))
            && self
                .language
                .as_deref()
                .is_none_or(|language| record.language.as_deref() == Some(language))
    }
}

/// Case-insensitive substring match on name, description and language.
///
/// `needle` must already be lowercased.
fn matches_query(record: &RepositoryRecord, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&record.name)
        || record.description.as_deref().is_some_and(contains)
        || record.language.as_deref().is_some_and(contains)
}
