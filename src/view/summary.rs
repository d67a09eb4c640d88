//! Aggregate counts describing the current derived output.

use serde::Serialize;

use super::sort::SortCriteria;

/// Statistics gathered while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub total: usize,
    pub matched: usize,
}

impl FilterStats {
    pub fn filtered_out(&self) -> usize {
        self.total - self.matched
    }
}

/// Summary shown alongside a page ("12 of 40 sitters").
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewSummary {
    pub total: usize,
    pub matched: usize,
    pub filtered_out: usize,
    pub active_constraints: usize,
    pub sort: SortCriteria,
}

impl ViewSummary {
    pub fn new(stats: FilterStats, active_constraints: usize, sort: SortCriteria) -> Self {
        Self {
            total: stats.total,
            matched: stats.matched,
            filtered_out: stats.filtered_out(),
            active_constraints,
            sort,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.active_constraints > 0
    }
}
