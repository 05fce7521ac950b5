//! Fine models
//!
//! Fines are owned by the fines service. `borrow_id` and `user_id` are set
//! when the fine is created and immutable thereafter; only `amount`,
//! `reason` and `paid` can change.

use crate::domain::ids::{BorrowId, FineId, UserId};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a fine was issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FineReason {
    /// Returned after the due date
    #[default]
    Late,
    /// Book reported lost
    Lost,
    /// Book came back damaged
    Damage,
}

impl fmt::Display for FineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FineReason::Late => "LATE",
            FineReason::Lost => "LOST",
            FineReason::Damage => "DAMAGE",
        };
        f.write_str(label)
    }
}

impl FromStr for FineReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LATE" => Ok(FineReason::Late),
            "LOST" => Ok(FineReason::Lost),
            "DAMAGE" => Ok(FineReason::Damage),
            other => Err(format!(
                "invalid fine reason '{other}', expected one of: LATE, LOST, DAMAGE"
            )),
        }
    }
}

/// A fine as returned by `GET /fines`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    /// Unique identifier assigned by the fines service
    pub id: FineId,

    /// Borrow record this fine was issued for; write-once
    pub borrow_id: BorrowId,

    /// User the fine is charged to; write-once
    pub user_id: UserId,

    /// Amount owed, always non-negative
    pub amount: Decimal,

    /// Why the fine was issued
    pub reason: FineReason,

    /// Whether the fine has been settled
    #[serde(default)]
    pub paid: bool,

    /// When the fines service created the record
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A fine enriched with the borrower's display name
///
/// Derived on every aggregation pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFine {
    /// The authoritative record from the fines service
    pub record: Fine,

    /// Borrower display name, or the sentinel when unresolved
    pub user_name: String,
}

impl EnrichedFine {
    /// Identifier of the underlying fine
    pub fn id(&self) -> FineId {
        self.record.id
    }

    /// Whether the pay transition is still available
    pub fn can_pay(&self) -> bool {
        !self.record.paid
    }
}
