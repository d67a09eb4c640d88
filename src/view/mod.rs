//! Filtered, sorted and paginated views over record collections.
//!
//! Data flows one way:
//!
//! ```text
//! raw collection → filter → sort → paginate → Page (rendered by the caller)
//! ```
//!
//! Everything here except [`store`] is synchronous and framework agnostic.

pub mod collection;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod store;
pub mod summary;

pub use collection::{derive_indices, CollectionView, ViewStatus, DEFAULT_PAGE_SIZE};
pub use filter::{
    matches, matches_with_policy, CompiledFilter, Constraint, FieldUpdate, FilterCriteria,
    FilterPatch, MissingValue, MissingValuePolicy,
};
pub use pagination::{clamp_page_index, paginate, total_pages, Page};
pub use sort::{
    build_comparator, build_comparator_for, relevance_score, sort_records, Comparator,
    SortCriteria, SortDirection, SortKey,
};
pub use store::{ViewSnapshot, ViewStore};
pub use summary::{FilterStats, ViewSummary};
