//! Year grouping, tab construction and language facets.
//!
//! A [`Catalog`] is derived once from a record list and then shared
//! read-only. Everything in here is a pure function of the input list, so
//! rebuilding only when the list changes is equivalent to memoizing on it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::RepositoryRecord;

/// Maximum number of tabs a catalog exposes.
pub const MAX_TABS: usize = 3;

/// Identifies one tab: a calendar year or the aggregated "older" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TabKey {
    /// A single calendar year.
    Year(i32),
    /// Every year not covered by the year tabs.
    Older,
}

impl TabKey {
    /// Human-readable label shown on the tab.
    pub fn label(self) -> String {
        match self {
            Self::Year(year) => year.to_string(),
            Self::Older => "Older".to_string(),
        }
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Older => f.write_str("older"),
        }
    }
}

/// Error returned when a tab key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tab key: {0:?}")]
pub struct ParseTabKeyError(String);

impl FromStr for TabKey {
    type Err = ParseTabKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("older") {
            return Ok(Self::Older);
        }
        trimmed
            .parse::<i32>()
            .map(Self::Year)
            .map_err(|_| ParseTabKeyError(s.to_string()))
    }
}

impl From<TabKey> for String {
    fn from(key: TabKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for TabKey {
    type Error = ParseTabKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Navigation metadata for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    /// Tab identity.
    pub key: TabKey,
    /// Display label ("2024", "Older").
    pub label: String,
    /// Number of records in the tab.
    pub count: usize,
}

impl TabDescriptor {
    /// Tabs without members are shown but cannot be selected.
    pub const fn is_enabled(&self) -> bool {
        self.count > 0
    }
}

/// Records created in one calendar year, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    year: i32,
    members: Vec<usize>,
}

impl YearGroup {
    /// The calendar year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Number of records in the group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no records.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Tab {
    descriptor: TabDescriptor,
    members: Vec<usize>,
}

/// Derived, read-only view over one record list.
///
/// Holds the year groups (descending), at most [`MAX_TABS`] tabs, and the
/// sorted set of languages across all records. Member lists are indices into
/// the shared record slice, so building a catalog never clones a record.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[RepositoryRecord]>,
    year_groups: Vec<YearGroup>,
    tabs: Vec<Tab>,
    languages: Vec<String>,
}

impl Catalog {
    /// Derive groups, tabs and languages from a record list.
    pub fn build(records: impl Into<Arc<[RepositoryRecord]>>) -> Self {
        let records = records.into();
        let year_groups = group_by_year(&records);
        let tabs = build_tabs(&year_groups);
        let languages = collect_languages(&records);

        tracing::debug!(
            target: "folio.browser",
            records = records.len(),
            years = year_groups.len(),
            tabs = tabs.len(),
            languages = languages.len(),
            "Built repository catalog"
        );

        Self {
            records,
            year_groups,
            tabs,
            languages,
        }
    }

    /// A catalog over no records.
    pub fn empty() -> Self {
        Self::build(Vec::<RepositoryRecord>::new())
    }

    /// The full record list, in input order.
    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    /// Whether this catalog was built from exactly this record allocation.
    pub fn is_built_from(&self, records: &Arc<[RepositoryRecord]>) -> bool {
        Arc::ptr_eq(&self.records, records)
    }

    /// Year groups, most recent year first.
    pub fn year_groups(&self) -> &[YearGroup] {
        &self.year_groups
    }

    /// Records belonging to a year group.
    pub fn group_members<'a>(
        &'a self,
        group: &'a YearGroup,
    ) -> impl Iterator<Item = &'a RepositoryRecord> + 'a {
        group.members.iter().map(|&idx| &self.records[idx])
    }

    /// Tab descriptors in display order.
    pub fn tabs(&self) -> impl ExactSizeIterator<Item = &TabDescriptor> {
        self.tabs.iter().map(|tab| &tab.descriptor)
    }

    /// Look up a tab by key.
    pub fn tab(&self, key: TabKey) -> Option<&TabDescriptor> {
        self.find_tab(key).map(|tab| &tab.descriptor)
    }

    /// Members of a tab in display order; empty for unknown keys.
    pub fn tab_members(&self, key: TabKey) -> impl Iterator<Item = &RepositoryRecord> {
        self.find_tab(key)
            .map(|tab| tab.members.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.records[idx])
    }

    /// The first selectable tab, if any.
    pub fn default_tab(&self) -> Option<TabKey> {
        self.tabs()
            .find(|tab| tab.is_enabled())
            .map(|tab| tab.key)
    }

    /// Distinct languages across all records, sorted ascending.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Number of records that belong to a year group.
    pub fn dated_count(&self) -> usize {
        self.year_groups.iter().map(YearGroup::len).sum()
    }

    fn find_tab(&self, key: TabKey) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.descriptor.key == key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

fn group_by_year(records: &[RepositoryRecord]) -> Vec<YearGroup> {
    let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(year) = record.created_year() {
            by_year.entry(year).or_default().push(idx);
        }
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, members)| YearGroup { year, members })
        .collect()
}

fn build_tabs(groups: &[YearGroup]) -> Vec<Tab> {
    let Some(latest) = groups.first() else {
        return Vec::new();
    };

    let mut tabs = vec![year_tab(latest)];

    // The second tab only exists for the immediately preceding year.
    if let Some(previous) = groups.get(1).filter(|g| g.year == latest.year - 1) {
        tabs.push(year_tab(previous));
    }

    let older: Vec<usize> = groups[tabs.len()..]
        .iter()
        .flat_map(|group| group.members.iter().copied())
        .collect();

    if !older.is_empty() {
        tabs.push(Tab {
            descriptor: TabDescriptor {
                key: TabKey::Older,
                label: TabKey::Older.label(),
                count: older.len(),
            },
            members: older,
        });
    }

    debug_assert!(tabs.len() <= MAX_TABS);
    tabs
}

fn year_tab(group: &YearGroup) -> Tab {
    let key = TabKey::Year(group.year);
    Tab {
        descriptor: TabDescriptor {
            key,
            label: key.label(),
            count: group.members.len(),
        },
        members: group.members.clone(),
    }
}

fn collect_languages(records: &[RepositoryRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(RepositoryRecord::language)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
