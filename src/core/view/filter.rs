//! Live search filtering
//!
//! Case-insensitive substring match of the search term against a fixed set
//! of derived text fields per entity. A row matches when any field
//! contains the term; an empty term matches everything. Filtering always
//! runs against the full base set, never chained onto a previously
//! filtered result.

use crate::domain::{EnrichedBorrow, EnrichedFine};

/// Rows that can be matched against a live search term
pub trait Searchable {
    /// Whether this row matches an already-lowercased, non-empty needle
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for EnrichedBorrow {
    /// Matches on book title, borrower name and status text
    fn matches(&self, needle: &str) -> bool {
        self.book_title.to_lowercase().contains(needle)
            || self.user_name.to_lowercase().contains(needle)
            || self.record.status.to_string().to_lowercase().contains(needle)
    }
}

impl Searchable for EnrichedFine {
    /// Matches on borrower name and reason text
    fn matches(&self, needle: &str) -> bool {
        self.user_name.to_lowercase().contains(needle)
            || self.record.reason.to_string().to_lowercase().contains(needle)
    }
}

/// Filter rows by a live search term
///
/// Returns references into `rows` in their original order.
pub fn filter<'a, T: Searchable>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }

    rows.iter().filter(|row| row.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{BookId, BorrowId, FineId, UserId};
    use crate::domain::{BorrowRecord, BorrowStatus, Fine, FineReason};
    use rust_decimal::Decimal;

    fn borrow_row(user_name: &str, book_title: &str, status: BorrowStatus) -> EnrichedBorrow {
        EnrichedBorrow {
            record: BorrowRecord {
                id: BorrowId::new(1),
                user_id: UserId::new(10),
                book_id: BookId::new(100),
                borrow_date: None,
                due_date: None,
                return_date: None,
                status,
            },
            user_name: user_name.to_string(),
            book_title: book_title.to_string(),
        }
    }

    fn fine_row(user_name: &str, reason: FineReason) -> EnrichedFine {
        EnrichedFine {
            record: Fine {
                id: FineId::new(1),
                borrow_id: BorrowId::new(1),
                user_id: UserId::new(10),
                amount: Decimal::from(10),
                reason,
                paid: false,
                created_at: None,
            },
            user_name: user_name.to_string(),
        }
    }

    #[test]
    fn test_empty_term_matches_everything_in_order() {
        let rows = vec![
            borrow_row("Alice", "Dune", BorrowStatus::Borrowed),
            borrow_row("Bob", "Emma", BorrowStatus::Returned),
        ];

        let matched = filter(&rows, "");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].user_name, "Alice");
        assert_eq!(matched[1].user_name, "Bob");
    }

    #[test]
    fn test_whitespace_term_matches_everything() {
        let rows = vec![borrow_row("Alice", "Dune", BorrowStatus::Borrowed)];
        assert_eq!(filter(&rows, "   ").len(), 1);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rows = vec![borrow_row("Alice", "Dune", BorrowStatus::Borrowed)];

        assert_eq!(filter(&rows, "alice").len(), 1);
        assert_eq!(filter(&rows, "ALICE").len(), 1);
        assert_eq!(filter(&rows, "dUnE").len(), 1);
    }

    #[test]
    fn test_borrow_matches_on_status_text() {
        let rows = vec![
            borrow_row("Alice", "Dune", BorrowStatus::LateReturned),
            borrow_row("Bob", "Emma", BorrowStatus::Borrowed),
        ];

        let matched = filter(&rows, "late_returned");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].user_name, "Alice");
    }

    #[test]
    fn test_borrow_matches_sentinel_name() {
        let rows = vec![borrow_row("N/A", "Dune", BorrowStatus::Borrowed)];
        assert_eq!(filter(&rows, "n/a").len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let rows = vec![borrow_row("Alice", "Dune", BorrowStatus::Borrowed)];
        assert!(filter(&rows, "zelda").is_empty());
    }

    #[test]
    fn test_fine_matches_on_reason_but_not_amount() {
        let rows = vec![
            fine_row("Alice", FineReason::Damage),
            fine_row("Bob", FineReason::Late),
        ];

        let matched = filter(&rows, "damage");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].user_name, "Alice");

        // amount is not part of the fine's match set
        assert!(filter(&rows, "10").is_empty());
    }
}
