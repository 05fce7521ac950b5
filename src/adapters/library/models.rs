//! Request payloads for the library services
//!
//! The payload types double as the contract: [`FineChanges`] carries only
//! the two mutable fields, so an update can never resend `borrowId` or
//! `userId` no matter what the caller holds.

use crate::domain::fine::FineReason;
use crate::domain::ids::{BorrowId, UserId};
use rust_decimal::Decimal;
use serde::Serialize;

/// Body of `POST /fines`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFine {
    /// Borrow record the fine is issued for
    pub borrow_id: BorrowId,

    /// User the fine is charged to
    pub user_id: UserId,

    /// Amount owed; validated non-negative before it gets here
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Why the fine is issued
    pub reason: FineReason,
}

/// Body of `PUT /fines/{id}`
///
/// `borrow_id` and `user_id` are write-once on the fines service, so the
/// update payload has no place to put them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FineChanges {
    /// New amount
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// New reason
    pub reason: FineReason,
}
