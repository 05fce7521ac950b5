//! Library service API trait
//!
//! This trait is the seam between the console's core and the remote
//! services. The production implementation is [`HttpLibraryClient`];
//! tests substitute their own implementations to exercise the core
//! without a network.
//!
//! [`HttpLibraryClient`]: super::client::HttpLibraryClient

use crate::adapters::library::models::{FineChanges, NewFine};
use crate::domain::errors::ServiceError;
use crate::domain::ids::{BorrowId, FineId};
use crate::domain::{Book, BorrowRecord, Fine, UserProfile};
use async_trait::async_trait;

/// Typed access to the four remote collections
///
/// List operations return the full collection snapshot or a typed error;
/// the degrade-or-abort decision on failure belongs to the aggregation
/// layer, not the client. Mutations target one record each and either
/// change the remote record or report that they did not; there is no
/// partial application.
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// Fetch all user profiles
    async fn fetch_users(&self) -> Result<Vec<UserProfile>, ServiceError>;

    /// Fetch all books
    async fn fetch_books(&self) -> Result<Vec<Book>, ServiceError>;

    /// Fetch all borrow records
    async fn fetch_borrows(&self) -> Result<Vec<BorrowRecord>, ServiceError>;

    /// Fetch all fines
    async fn fetch_fines(&self) -> Result<Vec<Fine>, ServiceError>;

    /// Transition a borrow record to its returned state
    async fn mark_returned(&self, id: BorrowId) -> Result<(), ServiceError>;

    /// Remove a borrow record
    async fn delete_borrow(&self, id: BorrowId) -> Result<(), ServiceError>;

    /// Create a fine
    async fn create_fine(&self, fine: &NewFine) -> Result<(), ServiceError>;

    /// Update the mutable fields of a fine
    async fn update_fine(&self, id: FineId, changes: &FineChanges) -> Result<(), ServiceError>;

    /// Mark a fine as paid
    async fn pay_fine(&self, id: FineId) -> Result<(), ServiceError>;

    /// Remove a fine
    async fn delete_fine(&self, id: FineId) -> Result<(), ServiceError>;
}
