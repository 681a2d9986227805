//! The repository browser: catalog plus filter state.

use std::sync::Arc;

use serde::Serialize;

use super::catalog::{Catalog, TabKey};
use super::filter::FilterState;
use super::pagination::Pagination;
use crate::domain::RepositoryRecord;

/// A user interaction with the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Switch to another tab.
    SelectTab(TabKey),
    /// Replace the free-text query.
    SetQuery(String),
    /// Select or deselect a language facet.
    ToggleLanguage(String),
    /// Clear query and language.
    ClearFilters,
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PreviousPage,
    /// Jump to a specific page.
    GoToPage(usize),
}

/// Apply an action to a state, then reconcile the result with the catalog.
pub fn transition(catalog: &Catalog, state: FilterState, action: BrowserAction) -> FilterState {
    let next = match action {
        BrowserAction::SelectTab(key) => state.select_tab(catalog, key),
        BrowserAction::SetQuery(query) => state.with_query(query),
        BrowserAction::ToggleLanguage(language) => state.toggle_language(&language),
        BrowserAction::ClearFilters => state.clear_filters(),
        BrowserAction::NextPage => {
            let total_pages = Pagination::total_pages_for(filtered_count(catalog, &state));
            state.next_page(total_pages)
        }
        BrowserAction::PreviousPage => state.previous_page(),
        BrowserAction::GoToPage(page) => state.with_page(page),
    };
    reconcile(catalog, next)
}

/// Bring a state in line with a catalog.
///
/// - A missing, unknown or disabled tab falls back to the first tab (page 1).
/// - A page that starts past the end of the filtered results resets to 1.
pub fn reconcile(catalog: &Catalog, mut state: FilterState) -> FilterState {
    let tab_is_valid = state
        .tab
        .and_then(|key| catalog.tab(key))
        .is_some_and(|tab| tab.is_enabled());

    if !tab_is_valid {
        let fallback = catalog.default_tab();
        if fallback != state.tab {
            state.tab = fallback;
            state.page = 1;
        }
    }

    state.page = state.page.max(1);
    if Pagination::is_out_of_range(state.page, filtered_count(catalog, &state)) {
        state.page = 1;
    }
    state
}

fn filtered_records<'a>(
    catalog: &'a Catalog,
    state: &'a FilterState,
) -> impl Iterator<Item = &'a RepositoryRecord> + 'a {
    state
        .tab
        .into_iter()
        .flat_map(|key| catalog.tab_members(key))
        .filter(|record| state.matches(record))
}

fn filtered_count(catalog: &Catalog, state: &FilterState) -> usize {
    filtered_records(catalog, state).count()
}

/// Tab metadata as rendered in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    /// Tab identity.
    pub key: TabKey,
    /// Display label.
    pub label: String,
    /// Number of records in the tab, ignoring filters.
    pub count: usize,
    /// Whether the tab can be selected.
    pub enabled: bool,
    /// Whether this is the active tab.
    pub selected: bool,
}

/// Everything needed to render one state of the browser.
#[derive(Debug, Clone)]
pub struct BrowserView<'a> {
    /// Tab strip.
    pub tabs: Vec<TabView>,
    /// Language facet values across all records.
    pub languages: &'a [String],
    /// Currently selected language.
    pub selected_language: Option<&'a str>,
    /// Current query text.
    pub query: &'a str,
    /// Records on the current page, in tab order.
    pub items: Vec<&'a RepositoryRecord>,
    /// Page position.
    pub pagination: Pagination,
}

impl BrowserView<'_> {
    /// Whether the current page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Browsing session over one catalog.
///
/// The catalog is shared and only replaced when the record list changes;
/// actions only ever touch the [`FilterState`].
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Arc<Catalog>,
    state: FilterState,
}

impl Browser {
    /// Start browsing a catalog with the default state.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::restore(catalog, FilterState::default())
    }

    /// Build a catalog from records and start browsing it.
    pub fn from_records(records: impl Into<Arc<[RepositoryRecord]>>) -> Self {
        Self::new(Arc::new(Catalog::build(records)))
    }

    /// Resume browsing from a previously captured state.
    pub fn restore(catalog: Arc<Catalog>, state: FilterState) -> Self {
        let state = reconcile(&catalog, state);
        Self { catalog, state }
    }

    /// The current catalog.
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The current filter state.
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Swap in a new record list.
    ///
    /// The catalog is only rebuilt when `records` is a different allocation
    /// from the one it was built from.
    pub fn set_records(&mut self, records: Arc<[RepositoryRecord]>) {
        if self.catalog.is_built_from(&records) {
            return;
        }
        self.set_catalog(Arc::new(Catalog::build(records)));
    }

    /// Swap in an already built catalog.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.state = reconcile(&self.catalog, std::mem::take(&mut self.state));
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: BrowserAction) {
        self.state = transition(&self.catalog, std::mem::take(&mut self.state), action);
    }

    /// The state an action would produce, without applying it.
    pub fn preview(&self, action: BrowserAction) -> FilterState {
        transition(&self.catalog, self.state.clone(), action)
    }

    /// All records of the active tab that pass the filters, in tab order.
    pub fn filtered(&self) -> Vec<&RepositoryRecord> {
        filtered_records(&self.catalog, &self.state).collect()
    }

    /// Pagination for the current state.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.page, filtered_count(&self.catalog, &self.state))
    }

    /// Project the current state for rendering.
    pub fn view(&self) -> BrowserView<'_> {
        let filtered = self.filtered();
        let pagination = Pagination::new(self.state.page, filtered.len());
        let items = pagination.slice(&filtered).to_vec();

        let tabs = self
            .catalog
            .tabs()
            .map(|tab| TabView {
                key: tab.key,
                label: tab.label.clone(),
                count: tab.count,
                enabled: tab.is_enabled(),
                selected: self.state.tab == Some(tab.key),
            })
            .collect();

        BrowserView {
            tabs,
            languages: self.catalog.languages(),
            selected_language: self.state.language.as_deref(),
            query: &self.state.query,
            items,
            pagination,
        }
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::empty()))
    }
}
