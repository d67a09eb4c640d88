//! Collection view model: raw records in, filtered + sorted + paged output out.
//!
//! # Architecture
//!
//! ```text
//! raw collection (Arc<[R]>, shared, never mutated)
//!        │
//!        ├─→ filter    ← FilterCriteria + MissingValuePolicy
//!        ├─→ sort      ← SortCriteria (stable)
//!        │
//!        ▼
//! derived output (indices into raw)
//!        │
//!        └─→ paginate  ← page index, page size
//! ```
//!
//! The derived output is a cache: it is recomputed synchronously from the
//! raw collection and the two criteria on every relevant mutation, so a
//! caller reading it right after a mutation always sees a consistent view.
//! Filtering always runs first so only surviving records are sorted.

use std::sync::Arc;

use super::filter::{FilterCriteria, FilterPatch, MissingValuePolicy};
use super::pagination::{clamp_page_index, effective_page_size, paginate, total_pages, Page};
use super::sort::{build_comparator, SortCriteria};
use super::summary::{FilterStats, ViewSummary};
use crate::records::Record;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Lifecycle of a view. There is no loading state here; fetching belongs to
/// the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    /// No collection has been supplied yet
    Empty,
    Loaded,
}

/// Filtered, sorted and paginated view over a record collection.
///
/// One instance per view. The raw collection is shared by reference, so
/// several views over the same fetch result never contaminate each other.
#[derive(Debug)]
pub struct CollectionView<R> {
    raw: Arc<[R]>,
    filter: FilterCriteria,
    sort: SortCriteria,
    policy: MissingValuePolicy,
    derived: Vec<usize>,
    stats: FilterStats,
    page_index: usize,
    page_size: usize,
    status: ViewStatus,
}

impl<R: Record> Default for CollectionView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> CollectionView<R> {
    /// Create an empty view with default criteria.
    pub fn new() -> Self {
        Self {
            raw: Arc::from(Vec::new()),
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            policy: MissingValuePolicy::default(),
            derived: Vec::new(),
            stats: FilterStats::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            status: ViewStatus::Empty,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = effective_page_size(page_size);
        self
    }

    pub fn with_sort(mut self, sort: SortCriteria) -> Self {
        self.sort = sort;
        self.recompute();
        self
    }

    pub fn with_policy(mut self, policy: MissingValuePolicy) -> Self {
        self.policy = policy;
        self.recompute();
        self
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replaces the source collection wholesale and resets to the first page.
    pub fn set_raw_collection(&mut self, records: impl Into<Arc<[R]>>) {
        self.raw = records.into();
        self.status = ViewStatus::Loaded;
        self.page_index = 0;
        self.recompute();
    }

    /// Replaces the filter criteria and resets to the first page.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        self.filter = criteria;
        self.page_index = 0;
        self.recompute();
    }

    /// Merges `patch` into the current criteria and resets to the first page.
    pub fn merge_filter_criteria(&mut self, patch: FilterPatch) {
        let merged = self.filter.merged(patch);
        self.set_filter_criteria(merged);
    }

    /// Removes every constraint.
    pub fn clear_filter_criteria(&mut self) {
        self.set_filter_criteria(FilterCriteria::default());
    }

    /// Changes the ordering. Membership is unchanged, so the page index is kept.
    pub fn set_sort_criteria(&mut self, sort: SortCriteria) {
        self.sort = sort;
        self.recompute();
    }

    /// Restores the original collection order.
    pub fn clear_sort_criteria(&mut self) {
        self.set_sort_criteria(SortCriteria::default());
    }

    /// Changes the missing-value policy; this can change membership.
    pub fn set_missing_value_policy(&mut self, policy: MissingValuePolicy) {
        self.policy = policy;
        self.page_index = 0;
        self.recompute();
    }

    /// Moves to `page_index`, clamped to the available pages.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = clamp_page_index(page_index, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page_index(self.page_index.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page_index(self.page_index.saturating_sub(1));
    }

    /// Changes the page size and re-clamps the page index.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = effective_page_size(page_size);
        self.page_index = clamp_page_index(self.page_index, self.total_pages());
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn raw(&self) -> &Arc<[R]> {
        &self.raw
    }

    pub fn filter_criteria(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort_criteria(&self) -> SortCriteria {
        self.sort
    }

    pub fn missing_value_policy(&self) -> &MissingValuePolicy {
        &self.policy
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.derived.len(), self.page_size)
    }

    pub fn derived_len(&self) -> usize {
        self.derived.len()
    }

    /// Derived output in display order.
    pub fn derived(&self) -> impl Iterator<Item = &R> + '_ {
        self.derived.iter().map(move |&index| &self.raw[index])
    }

    /// Positions of the derived records within the raw collection.
    pub fn derived_indices(&self) -> &[usize] {
        &self.derived
    }

    /// The current page of the derived output.
    pub fn page(&self) -> Page<&R> {
        paginate(&self.derived, self.page_index, self.page_size).map(|&index| &self.raw[index])
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary::new(self.stats, self.filter.active_constraints(), self.sort)
    }

    fn recompute(&mut self) {
        let (derived, stats) = derive_indices(&self.raw, &self.filter, self.sort, &self.policy);
        log::debug!(
            "Recomputed view: {} of {} records match, sorted by {}",
            stats.matched,
            stats.total,
            self.sort.display_name()
        );
        self.derived = derived;
        self.stats = stats;
        self.page_index = clamp_page_index(self.page_index, self.total_pages());
    }
}

/// Filters then sorts `raw`, returning the surviving indices in display order.
///
/// Pure function - the same inputs always produce the same indices.
pub fn derive_indices<R: Record>(
    raw: &[R],
    filter: &FilterCriteria,
    sort: SortCriteria,
    policy: &MissingValuePolicy,
) -> (Vec<usize>, FilterStats) {
    // Stage 1: Filter (pure)
    let compiled = filter.compile(policy);
    let mut indices: Vec<usize> = raw
        .iter()
        .enumerate()
        .filter(|(_, record)| compiled.matches(*record))
        .map(|(index, _)| index)
        .collect();

    let stats = FilterStats {
        total: raw.len(),
        matched: indices.len(),
    };

    // Stage 2: Sort survivors (stable); natural order is already in place
    if sort.is_natural() {
        return (indices, stats);
    }
    let comparator = build_comparator::<R>(sort.key, sort.direction, policy);
    indices.sort_by(|&a, &b| comparator(&raw[a], &raw[b]));

    (indices, stats)
}
