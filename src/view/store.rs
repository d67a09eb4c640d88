//! Observable wrapper around a [`CollectionView`].
//!
//! The view model stays a plain value type; this store is the reactive
//! boundary. Every mutation goes through [`ViewStore::update`], which
//! publishes a fresh [`ViewSnapshot`] on a `tokio::sync::watch` channel so
//! renderers re-draw from the latest state and never see a partial update.

use serde::Serialize;
use tokio::sync::watch;

use super::collection::{CollectionView, ViewStatus};
use super::filter::FilterPatch;
use super::summary::ViewSummary;
use crate::records::Record;

/// Render-ready state published after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub status: ViewStatus,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// Ids of the records on the current page, in display order
    pub visible_ids: Vec<String>,
    pub summary: ViewSummary,
}

impl ViewSnapshot {
    pub fn of<R: Record>(view: &CollectionView<R>) -> Self {
        let page = view.page();
        Self {
            status: view.status(),
            page_index: page.page_index,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_count: page.total_count,
            visible_ids: page.items.iter().map(|r| r.id().to_string()).collect(),
            summary: view.summary(),
        }
    }
}

/// One store per view; there is no shared global instance.
pub struct ViewStore<R> {
    view: CollectionView<R>,
    sender: watch::Sender<ViewSnapshot>,
}

impl<R: Record> ViewStore<R> {
    pub fn new(view: CollectionView<R>) -> Self {
        let (sender, _) = watch::channel(ViewSnapshot::of(&view));
        Self { view, sender }
    }

    /// Read-only access to the wrapped view.
    pub fn view(&self) -> &CollectionView<R> {
        &self.view
    }

    /// Subscribe to snapshots; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.sender.subscribe()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.sender.borrow().clone()
    }

    /// Applies `mutation` and publishes the resulting snapshot.
    pub fn update<T>(&mut self, mutation: impl FnOnce(&mut CollectionView<R>) -> T) -> T {
        let result = mutation(&mut self.view);
        let snapshot = ViewSnapshot::of(&self.view);
        // send_replace never fails, even when nobody is subscribed
        self.sender.send_replace(snapshot);
        result
    }

    /// Sink for debounced search input.
    pub fn apply_search(&mut self, search: String) {
        self.update(|view| view.merge_filter_criteria(FilterPatch::search(search)));
    }
}
