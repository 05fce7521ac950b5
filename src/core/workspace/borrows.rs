//! Borrow workspace
//!
//! Owns the materialized borrows view and drives its lifecycle
//! transitions. All mutations follow the refresh-after-mutate policy: the
//! workspace never patches its rows optimistically; after any mutation
//! attempt, succeeded or not, it re-runs the full aggregation pass so the
//! view only ever shows server-confirmed state.

use crate::adapters::library::LibraryApi;
use crate::core::join;
use crate::core::view::{PageView, ViewState};
use crate::domain::ids::BorrowId;
use crate::domain::{CircdeskError, EnrichedBorrow, Result};
use std::sync::Arc;

/// Materialized borrows view with its lifecycle operations
///
/// One workspace instance belongs to one session; rows and view state are
/// never shared or cached across instances. A freshly created workspace
/// holds no rows until its first [`refresh`](Self::refresh).
pub struct BorrowWorkspace {
    api: Arc<dyn LibraryApi>,
    rows: Vec<EnrichedBorrow>,
    view: ViewState,
    loading: bool,
    epoch: u64,
}

impl BorrowWorkspace {
    /// Create an empty workspace over the given client
    pub fn new(api: Arc<dyn LibraryApi>, page_size: usize) -> Self {
        Self {
            api,
            rows: Vec::new(),
            view: ViewState::new(page_size),
            loading: false,
            epoch: 0,
        }
    }

    /// Re-run the full aggregation pass
    ///
    /// On failure the previous rows are kept: a stale but consistent view
    /// is preferred over an empty flash. The loading flag is cleared on
    /// every path. A result that arrives after [`invalidate`](Self::invalidate)
    /// is discarded instead of applied.
    pub async fn refresh(&mut self) -> Result<()> {
        let epoch = self.epoch;
        self.loading = true;

        let outcome = join::load_borrow_rows(self.api.as_ref()).await;

        self.loading = false;
        if epoch != self.epoch {
            tracing::debug!("Dropping aggregation result from a superseded refresh");
            return Ok(());
        }

        match outcome {
            Ok(rows) => {
                self.rows = rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Borrow aggregation failed; keeping previous rows");
                Err(e)
            }
        }
    }

    /// Invalidate in-flight work, e.g. when the owning view is torn down
    ///
    /// Any refresh started before this call will drop its result on
    /// arrival rather than resurrect a replaced view.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Mark a borrow as returned, then re-aggregate
    ///
    /// # Errors
    ///
    /// Rejected locally, without a network call, when the record is not in
    /// the materialized view or is already returned. A remote failure is
    /// reported after the re-aggregation has reconciled the view.
    pub async fn mark_returned(&mut self, id: BorrowId) -> Result<()> {
        let row = self
            .rows
            .iter()
            .find(|row| row.id() == id)
            .ok_or_else(|| {
                CircdeskError::Transition(format!("no borrow record with id {id} in the view"))
            })?;

        if !row.can_mark_returned() {
            return Err(CircdeskError::Transition(format!(
                "borrow record {id} is already returned"
            )));
        }

        let outcome = self.api.mark_returned(id).await;
        if let Err(e) = &outcome {
            tracing::error!(borrow_id = %id, error = %e, "Mark-returned call failed");
        }

        // Reconcile with server truth whatever the mutation outcome was.
        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;
        refreshed
    }

    /// Delete a borrow record, then re-aggregate
    ///
    /// Deletion is irrecoverable; callers are expected to have confirmed
    /// with the operator before invoking it.
    pub async fn delete_borrow(&mut self, id: BorrowId) -> Result<()> {
        let outcome = self.api.delete_borrow(id).await;
        if let Err(e) = &outcome {
            tracing::error!(borrow_id = %id, error = %e, "Delete call failed");
        }

        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;
        refreshed
    }

    /// All materialized rows, in service order
    pub fn rows(&self) -> &[EnrichedBorrow] {
        &self.rows
    }

    /// Whether an aggregation pass is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the live search term; the view returns to page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.set_search(term);
    }

    /// Jump to a page (clamped when the view is computed)
    pub fn goto_page(&mut self, page: usize) {
        self.view.goto_page(page);
    }

    /// Move forward one page, a no-op on the last page
    pub fn next_page(&mut self) {
        let total = self.view.paginate(&self.rows).total_pages;
        self.view.advance(total);
    }

    /// Move back one page, a no-op on the first page
    pub fn prev_page(&mut self) {
        self.view.back();
    }

    /// Compute the currently visible page
    pub fn page(&self) -> PageView<'_, EnrichedBorrow> {
        self.view.paginate(&self.rows)
    }
}
