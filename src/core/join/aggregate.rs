//! Aggregation passes
//!
//! One pass fetches the primary collection and its secondary collections
//! concurrently, then enriches. The primary result is inspected first: if
//! it failed, the pass fails and the caller keeps whatever view it already
//! had. Secondary failures only degrade enrichment: every row still
//! appears, carrying the sentinel where a name could not be resolved.

use crate::adapters::library::LibraryApi;
use crate::core::join::{enrich_borrows, enrich_fines};
use crate::domain::errors::ServiceError;
use crate::domain::{EnrichedBorrow, EnrichedFine, Result};

/// Load and enrich the borrows view
///
/// # Errors
///
/// Fails only when the borrows fetch itself fails; users and books are
/// best-effort.
pub async fn load_borrow_rows(api: &dyn LibraryApi) -> Result<Vec<EnrichedBorrow>> {
    let (borrows, users, books) =
        futures::join!(api.fetch_borrows(), api.fetch_users(), api.fetch_books());

    // Primary collection first: its failure aborts the pass.
    let borrows = borrows?;
    let users = degraded_to_empty(users);
    let books = degraded_to_empty(books);

    tracing::debug!(
        borrows = borrows.len(),
        users = users.len(),
        books = books.len(),
        "Aggregated borrows view"
    );

    Ok(enrich_borrows(borrows, &users, &books))
}

/// Load and enrich the fines view
///
/// # Errors
///
/// Fails only when the fines fetch itself fails; users are best-effort.
pub async fn load_fine_rows(api: &dyn LibraryApi) -> Result<Vec<EnrichedFine>> {
    let (fines, users) = futures::join!(api.fetch_fines(), api.fetch_users());

    let fines = fines?;
    let users = degraded_to_empty(users);

    tracing::debug!(
        fines = fines.len(),
        users = users.len(),
        "Aggregated fines view"
    );

    Ok(enrich_fines(fines, &users))
}

/// Collapse a failed secondary fetch to an empty snapshot
fn degraded_to_empty<T>(result: Result<Vec<T>, ServiceError>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(
                service = %e.service(),
                error = %e,
                "Secondary fetch failed; enrichment degrades to unresolved"
            );
            Vec::new()
        }
    }
}
