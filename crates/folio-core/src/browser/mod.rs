//! Repository browser.
//!
//! Turns a flat record list plus the visitor's selections into the exact
//! slice of records to display, together with the tab and facet metadata
//! needed to render navigation.
//!
//! # Structure
//!
//! - `catalog` - year groups, tabs and language facets (derived once per list)
//! - `filter` - `FilterState` and its pure transitions
//! - `pagination` - fixed-size page windows
//! - `state` - `Browser`, actions, reconciliation and the render projection

mod catalog;
mod filter;
mod pagination;
mod state;

pub use catalog::{Catalog, MAX_TABS, ParseTabKeyError, TabDescriptor, TabKey, YearGroup};
pub use filter::FilterState;
pub use pagination::{PAGE_SIZE, Pagination};
pub use state::{Browser, BrowserAction, BrowserView, TabView, reconcile, transition};
