//! Fine workspace
//!
//! Owns the materialized fines view, the fine entry draft and the fine
//! lifecycle operations. Shares the borrows workspace's refresh-after-mutate
//! policy: the view is always rebuilt from server truth after a mutation
//! attempt.

use crate::adapters::library::{FineChanges, LibraryApi, NewFine};
use crate::core::join;
use crate::core::view::{PageView, ViewState};
use crate::domain::fine::FineReason;
use crate::domain::ids::FineId;
use crate::domain::{CircdeskError, EnrichedFine, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

/// Operator-entered fine form, kept as raw input until validated
///
/// Holding strings mirrors what the operator typed; [`validate`](Self::validate)
/// turns the draft into a typed payload and is always called before any
/// network traffic, so malformed input never leaves the console.
#[derive(Debug, Clone, Default)]
pub struct FineDraft {
    /// Borrow record the fine is issued for
    pub borrow_id: String,

    /// User the fine is charged to
    pub user_id: String,

    /// Amount owed
    pub amount: String,

    /// Why the fine is issued
    pub reason: FineReason,
}

impl FineDraft {
    /// Parse and range-check the draft into a create payload
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field when an id or
    /// the amount does not parse, or when the amount is negative.
    pub fn validate(&self) -> Result<NewFine> {
        let borrow_id = self.borrow_id.parse().map_err(|_| {
            CircdeskError::Validation(format!("invalid borrow id '{}'", self.borrow_id))
        })?;

        let user_id = self.user_id.parse().map_err(|_| {
            CircdeskError::Validation(format!("invalid user id '{}'", self.user_id))
        })?;

        let amount = Decimal::from_str(self.amount.trim()).map_err(|_| {
            CircdeskError::Validation(format!("invalid amount '{}'", self.amount))
        })?;

        if amount.is_sign_negative() {
            return Err(CircdeskError::Validation(format!(
                "amount must not be negative, got {amount}"
            )));
        }

        Ok(NewFine {
            borrow_id,
            user_id,
            amount,
            reason: self.reason,
        })
    }
}

/// Materialized fines view with its lifecycle operations
pub struct FineWorkspace {
    api: Arc<dyn LibraryApi>,
    rows: Vec<EnrichedFine>,
    view: ViewState,
    draft: FineDraft,
    loading: bool,
    epoch: u64,
}

impl FineWorkspace {
    /// Create an empty workspace over the given client
    pub fn new(api: Arc<dyn LibraryApi>, page_size: usize) -> Self {
        Self {
            api,
            rows: Vec::new(),
            view: ViewState::new(page_size),
            draft: FineDraft::default(),
            loading: false,
            epoch: 0,
        }
    }

    /// Re-run the full aggregation pass
    ///
    /// On failure the previous rows are kept; the loading flag is cleared
    /// on every path; a superseded result is dropped on arrival.
    pub async fn refresh(&mut self) -> Result<()> {
        let epoch = self.epoch;
        self.loading = true;

        let outcome = join::load_fine_rows(self.api.as_ref()).await;

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
                tracing::error!(error = %e, "Fine aggregation failed; keeping previous rows");
                Err(e)
            }
        }
    }

    /// Invalidate in-flight work, e.g. when the owning view is torn down
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Create a fine from the current draft, then re-aggregate
    ///
    /// The draft is validated before any network call and reset to its
    /// defaults only after the fines service accepted the record, so the
    /// operator can correct a rejected entry instead of retyping it.
    pub async fn create_fine(&mut self) -> Result<()> {
        let payload = self.draft.validate()?;

        let outcome = self.api.create_fine(&payload).await;
        if let Err(e) = &outcome {
            tracing::error!(error = %e, "Create-fine call failed");
        }

        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;

        self.draft = FineDraft::default();
        refreshed
    }

    /// Update the mutable fields of a fine, then re-aggregate
    ///
    /// Only `amount` and `reason` can change; `borrow_id` and `user_id`
    /// are write-once and the payload type has no place for them.
    pub async fn update_fine(
        &mut self,
        id: FineId,
        amount: Decimal,
        reason: FineReason,
    ) -> Result<()> {
        if amount.is_sign_negative() {
            return Err(CircdeskError::Validation(format!(
                "amount must not be negative, got {amount}"
            )));
        }

        let changes = FineChanges { amount, reason };

        let outcome = self.api.update_fine(id, &changes).await;
        if let Err(e) = &outcome {
            tracing::error!(fine_id = %id, error = %e, "Update-fine call failed");
        }

        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;
        refreshed
    }

    /// Mark a fine as paid, then re-aggregate
    ///
    /// # Errors
    ///
    /// Rejected locally, without a network call, when the fine is not in
    /// the materialized view or is already paid.
    pub async fn pay_fine(&mut self, id: FineId) -> Result<()> {
        let row = self.rows.iter().find(|row| row.id() == id).ok_or_else(|| {
            CircdeskError::Transition(format!("no fine with id {id} in the view"))
        })?;

        if !row.can_pay() {
            return Err(CircdeskError::Transition(format!(
                "fine {id} is already paid"
            )));
        }

        let outcome = self.api.pay_fine(id).await;
        if let Err(e) = &outcome {
            tracing::error!(fine_id = %id, error = %e, "Pay-fine call failed");
        }

        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;
        refreshed
    }

    /// Delete a fine, then re-aggregate
    ///
    /// Deletion is irrecoverable; callers are expected to have confirmed
    /// with the operator before invoking it.
    pub async fn delete_fine(&mut self, id: FineId) -> Result<()> {
        let outcome = self.api.delete_fine(id).await;
        if let Err(e) = &outcome {
            tracing::error!(fine_id = %id, error = %e, "Delete call failed");
        }

        let refreshed = self.refresh().await;
        outcome.map_err(CircdeskError::from)?;
        refreshed
    }

    /// All materialized rows, in service order
    pub fn rows(&self) -> &[EnrichedFine] {
        &self.rows
    }

    /// Whether an aggregation pass is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current fine entry draft
    pub fn draft(&self) -> &FineDraft {
        &self.draft
    }

    /// Mutable access to the fine entry draft
    pub fn draft_mut(&mut self) -> &mut FineDraft {
        &mut self.draft
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
    pub fn page(&self) -> PageView<'_, EnrichedFine> {
        self.view.paginate(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validates_well_formed_input() {
        let draft = FineDraft {
            borrow_id: "1".to_string(),
            user_id: "10".to_string(),
            amount: "12.50".to_string(),
            reason: FineReason::Late,
        };

        let payload = draft.validate().unwrap();
        assert_eq!(payload.borrow_id.value(), 1);
        assert_eq!(payload.user_id.value(), 10);
        assert_eq!(payload.amount, Decimal::from_str("12.50").unwrap());
    }

    #[test]
    fn test_draft_rejects_unparseable_ids() {
        let draft = FineDraft {
            borrow_id: "one".to_string(),
            user_id: "10".to_string(),
            amount: "5".to_string(),
            reason: FineReason::Late,
        };

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, CircdeskError::Validation(_)));
        assert!(err.to_string().contains("borrow id"));
    }

    #[test]
    fn test_draft_rejects_unparseable_amount() {
        let draft = FineDraft {
            borrow_id: "1".to_string(),
            user_id: "10".to_string(),
            amount: "1,50".to_string(),
            reason: FineReason::Damage,
        };

        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_draft_rejects_negative_amount() {
        let draft = FineDraft {
            borrow_id: "1".to_string(),
            user_id: "10".to_string(),
            amount: "-3".to_string(),
            reason: FineReason::Late,
        };

        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_default_draft_reason_is_late() {
        assert_eq!(FineDraft::default().reason, FineReason::Late);
    }
}
