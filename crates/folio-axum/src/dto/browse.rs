//! Browse state DTOs.
//!
//! A [`BrowseQuery`] is the URL form of a [`FilterState`]: every link on the
//! home page carries the state it leads to, so the page is navigable without
//! client-side script.

use chrono::{DateTime, Utc};
use folio_core::{Browser, FilterState, Pagination, RepoCard, TabKey, TabView};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// Query parameters accepted by `/` and `/api/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseQuery {
    /// Tab key: a year or `older`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Selected language facet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl BrowseQuery {
    /// Encode a filter state, omitting defaults.
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            tab: state.tab.map(|key| key.to_string()),
            q: state.active_query().map(str::to_string),
            language: state.language.clone(),
            page: (state.page > 1).then(|| state.page.to_string()),
        }
    }

    /// Decode into a filter state, rejecting a malformed page number.
    ///
    /// The result is not yet reconciled with a catalog.
    pub fn filter_state(&self) -> Result<FilterState, HttpError> {
        if let Some(raw) = self.page.as_deref().filter(|p| !p.trim().is_empty()) {
            if parse_page(raw).is_none() {
                return Err(HttpError::BadRequest(format!("invalid page: {raw:?}")));
            }
        }
        Ok(self.filter_state_lenient())
    }

    /// Decode into a filter state. Unknown tabs and bad page numbers fall
    /// back to the defaults.
    pub fn filter_state_lenient(&self) -> FilterState {
        FilterState {
            tab: self
                .tab
                .as_deref()
                .and_then(|raw| raw.parse::<TabKey>().ok()),
            query: self.q.clone().unwrap_or_default(),
            language: self
                .language
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            page: self.page.as_deref().and_then(parse_page).unwrap_or(1),
        }
    }

    /// Query string for this state, e.g. `?tab=2024&q=api`, or empty.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = [
            ("tab", self.tab.as_deref()),
            ("q", self.q.as_deref()),
            ("language", self.language.as_deref()),
            ("page", self.page.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect();

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

fn parse_page(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&page| page >= 1)
}

/// JSON projection of one browser state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    /// Tab strip.
    pub tabs: Vec<TabView>,
    /// Language facet values across all records.
    pub languages: Vec<String>,
    /// Active tab, if any records are dated.
    pub selected_tab: Option<TabKey>,
    /// Active language filter.
    pub selected_language: Option<String>,
    /// Current query text.
    pub query: String,
    /// Page position over the filtered results.
    pub pagination: Pagination,
    /// Whether pagination controls are shown.
    pub show_pagination: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Cards on the current page.
    pub items: Vec<RepoCard>,
    /// When the underlying records were fetched.
    pub fetched_at: DateTime<Utc>,
}

impl BrowseResponse {
    /// Project a browser's current view.
    pub fn from_browser(browser: &Browser, fetched_at: DateTime<Utc>) -> Self {
        let view = browser.view();
        Self {
            tabs: view.tabs,
            languages: view.languages.to_vec(),
            selected_tab: browser.state().tab,
            selected_language: view.selected_language.map(str::to_string),
            query: view.query.to_string(),
            pagination: view.pagination,
            show_pagination: view.pagination.is_visible(),
            has_previous: view.pagination.has_previous(),
            has_next: view.pagination.has_next(),
            items: view.items.into_iter().map(RepoCard::from).collect(),
            fetched_at,
        }
    }
}

/// Query parameters accepted by `POST /api/revalidate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevalidateQuery {
    /// Shared secret, when not sent as a header.
    pub token: Option<String>,
}

/// Success body of `POST /api/revalidate`.
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    /// Always true.
    pub revalidated: bool,
    /// Whether a cached snapshot was dropped.
    pub cleared: bool,
    /// Time of the invalidation.
    pub now: DateTime<Utc>,
}
