//! Borrow record models
//!
//! Records owned and mutated exclusively by the borrow service. The console
//! holds a view-only overlay over them: enrichment attaches display names
//! resolved from the user and catalog services, and mutating the overlay
//! never touches the foreign keys themselves.

use crate::domain::ids::{BookId, BorrowId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a borrow record
///
/// The borrow service owns the state machine. Values it is known to emit
/// are modeled explicitly; anything else deserializes to [`BorrowStatus::Unknown`]
/// rather than failing the whole snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowStatus {
    /// Book is out with the borrower
    Borrowed,
    /// Book came back on or before the due date
    Returned,
    /// Book came back after the due date
    LateReturned,
    /// Borrower reported the book lost
    Lost,
    /// A state this console does not model, or one the service omitted
    #[default]
    #[serde(other)]
    Unknown,
}

impl BorrowStatus {
    /// Whether the mark-returned transition is still available
    ///
    /// The transition is offered for every state except [`BorrowStatus::Returned`],
    /// matching the borrow service's own acceptance rule.
    pub fn can_mark_returned(&self) -> bool {
        !matches!(self, BorrowStatus::Returned)
    }
}

impl fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BorrowStatus::Borrowed => "BORROWED",
            BorrowStatus::Returned => "RETURNED",
            BorrowStatus::LateReturned => "LATE_RETURNED",
            BorrowStatus::Lost => "LOST",
            BorrowStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// A borrow record as returned by `GET /borrows`
///
/// `user_id` and `book_id` are foreign keys into collections owned by other
/// services; nothing enforces their integrity, which is why enrichment must
/// tolerate unresolved references.
///
/// Timestamps are the zoneless local datetimes the borrow service emits
/// (`2024-03-01T10:00:00`). All three are optional in the wire format; a
/// missing value renders as the unresolved sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    /// Unique identifier assigned by the borrow service
    pub id: BorrowId,

    /// Foreign key into the user service (not enforced)
    pub user_id: UserId,

    /// Foreign key into the catalog service (not enforced)
    pub book_id: BookId,

    /// When the book was taken out
    #[serde(default)]
    pub borrow_date: Option<NaiveDateTime>,

    /// When the book is due back
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,

    /// When the book actually came back, if it has
    #[serde(default)]
    pub return_date: Option<NaiveDateTime>,

    /// Current lifecycle state
    #[serde(default)]
    pub status: BorrowStatus,
}

/// A borrow record enriched with display names resolved from the user and
/// catalog snapshots
///
/// Constructed fresh on every aggregation pass and never persisted; after
/// any mutation the whole set is discarded and rebuilt from server truth.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBorrow {
    /// The authoritative record from the borrow service
    pub record: BorrowRecord,

    /// Borrower display name, or the sentinel when unresolved
    pub user_name: String,

    /// Book title, or the sentinel when unresolved
    pub book_title: String,
}

impl EnrichedBorrow {
    /// Identifier of the underlying borrow record
    pub fn id(&self) -> BorrowId {
        self.record.id
    }

    /// Whether the mark-returned action should be offered for this row
    pub fn can_mark_returned(&self) -> bool {
        self.record.status.can_mark_returned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialize_known_values() {
        let status: BorrowStatus = serde_json::from_str("\"BORROWED\"").unwrap();
        assert_eq!(status, BorrowStatus::Borrowed);
        let status: BorrowStatus = serde_json::from_str("\"LATE_RETURNED\"").unwrap();
        assert_eq!(status, BorrowStatus::LateReturned);
    }

    #[test]
    fn test_status_deserialize_unknown_value() {
        let status: BorrowStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, BorrowStatus::Unknown);
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(BorrowStatus::LateReturned.to_string(), "LATE_RETURNED");
        assert_eq!(BorrowStatus::Returned.to_string(), "RETURNED");
    }

    #[test]
    fn test_can_mark_returned_only_blocked_when_returned() {
        assert!(BorrowStatus::Borrowed.can_mark_returned());
        assert!(BorrowStatus::LateReturned.can_mark_returned());
        assert!(BorrowStatus::Lost.can_mark_returned());
        assert!(BorrowStatus::Unknown.can_mark_returned());
        assert!(!BorrowStatus::Returned.can_mark_returned());
    }

    #[test]
    fn test_deserialize_borrow_record() {
        let json = r#"{
            "id": 1,
            "userId": 10,
            "bookId": 100,
            "borrowDate": "2024-03-01T10:00:00",
            "dueDate": "2024-03-15T10:00:00",
            "returnDate": null,
            "status": "BORROWED"
        }"#;

        let record: BorrowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, BorrowId::new(1));
        assert_eq!(record.user_id, UserId::new(10));
        assert_eq!(record.book_id, BookId::new(100));
        assert!(record.return_date.is_none());
        assert_eq!(record.status, BorrowStatus::Borrowed);
    }

    #[test]
    fn test_deserialize_borrow_record_missing_dates_and_status() {
        let json = r#"{"id": 2, "userId": 11, "bookId": 101}"#;

        let record: BorrowRecord = serde_json::from_str(json).unwrap();
        assert!(record.borrow_date.is_none());
        assert!(record.due_date.is_none());
        assert_eq!(record.status, BorrowStatus::Unknown);
    }
}
