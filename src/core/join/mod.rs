//! Join engine
//!
//! Best-effort denormalization of foreign keys into display strings. The
//! services own no referential integrity across each other, so a borrow
//! may reference a user or book that no longer exists; the join engine
//! substitutes a sentinel instead of dropping or failing the row.
//!
//! Enrichment never sorts, deduplicates or filters: the output preserves
//! the primary collection's order and row count exactly.

pub mod aggregate;

pub use aggregate::{load_borrow_rows, load_fine_rows};

use crate::domain::ids::{BookId, UserId};
use crate::domain::{Book, BorrowRecord, EnrichedBorrow, EnrichedFine, Fine, UserProfile};
use std::collections::HashMap;

/// Placeholder shown when a foreign key cannot be resolved
pub const UNRESOLVED: &str = "N/A";

/// Build a user id → display name map from a users snapshot
fn user_names(users: &[UserProfile]) -> HashMap<UserId, &str> {
    users.iter().map(|u| (u.user_id, u.name.as_str())).collect()
}

/// Build a book id → title map from a books snapshot
fn book_titles(books: &[Book]) -> HashMap<BookId, &str> {
    books.iter().map(|b| (b.id, b.title.as_str())).collect()
}

/// Enrich borrow records with borrower names and book titles
///
/// Every input row produces exactly one output row, in input order. A
/// reference with no match in the snapshot resolves to [`UNRESOLVED`].
///
/// # Examples
///
/// ```
/// use circdesk::core::join::{enrich_borrows, UNRESOLVED};
/// use circdesk::domain::{BorrowRecord, BorrowStatus, UserProfile};
///
/// let borrows = vec![BorrowRecord {
///     id: 1.into(),
///     user_id: 10.into(),
///     book_id: 100.into(),
///     borrow_date: None,
///     due_date: None,
///     return_date: None,
///     status: BorrowStatus::Borrowed,
/// }];
/// let users = vec![UserProfile { user_id: 10.into(), name: "Alice".into() }];
///
/// let rows = enrich_borrows(borrows, &users, &[]);
/// assert_eq!(rows[0].user_name, "Alice");
/// assert_eq!(rows[0].book_title, UNRESOLVED);
/// ```
pub fn enrich_borrows(
    borrows: Vec<BorrowRecord>,
    users: &[UserProfile],
    books: &[Book],
) -> Vec<EnrichedBorrow> {
    let names = user_names(users);
    let titles = book_titles(books);

    borrows
        .into_iter()
        .map(|record| EnrichedBorrow {
            user_name: resolve(names.get(&record.user_id).copied()),
            book_title: resolve(titles.get(&record.book_id).copied()),
            record,
        })
        .collect()
}

/// Enrich fines with borrower names
pub fn enrich_fines(fines: Vec<Fine>, users: &[UserProfile]) -> Vec<EnrichedFine> {
    let names = user_names(users);

    fines
        .into_iter()
        .map(|record| EnrichedFine {
            user_name: resolve(names.get(&record.user_id).copied()),
            record,
        })
        .collect()
}

/// Resolve a lookup result to a display string
///
/// An empty display field counts as unresolved.
fn resolve(looked_up: Option<&str>) -> String {
    match looked_up {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNRESOLVED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{BookId, BorrowId, FineId, UserId};
    use crate::domain::{BorrowStatus, FineReason};
    use rust_decimal::Decimal;

    fn borrow(id: i64, user_id: i64, book_id: i64) -> BorrowRecord {
        BorrowRecord {
            id: BorrowId::new(id),
            user_id: UserId::new(user_id),
            book_id: BookId::new(book_id),
            borrow_date: None,
            due_date: None,
            return_date: None,
            status: BorrowStatus::Borrowed,
        }
    }

    fn fine(id: i64, user_id: i64) -> Fine {
        Fine {
            id: FineId::new(id),
            borrow_id: BorrowId::new(1),
            user_id: UserId::new(user_id),
            amount: Decimal::from(10),
            reason: FineReason::Late,
            paid: false,
            created_at: None,
        }
    }

    fn user(id: i64, name: &str) -> UserProfile {
        UserProfile {
            user_id: UserId::new(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_enrich_borrows_resolves_both_keys() {
        let users = vec![user(10, "Alice")];
        let books = vec![Book {
            id: BookId::new(100),
            title: "Dune".to_string(),
        }];

        let rows = enrich_borrows(vec![borrow(1, 10, 100)], &users, &books);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_name, "Alice");
        assert_eq!(rows[0].book_title, "Dune");
    }

    #[test]
    fn test_enrich_borrows_missing_book_resolves_to_sentinel() {
        let users = vec![user(10, "Alice")];

        let rows = enrich_borrows(vec![borrow(1, 10, 100)], &users, &[]);
        assert_eq!(rows[0].user_name, "Alice");
        assert_eq!(rows[0].book_title, UNRESOLVED);
    }

    #[test]
    fn test_enrich_borrows_never_drops_rows() {
        let borrows = vec![borrow(1, 10, 100), borrow(2, 99, 999), borrow(3, 10, 100)];

        let rows = enrich_borrows(borrows, &[], &[]);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.user_name == UNRESOLVED));
        assert!(rows.iter().all(|r| r.book_title == UNRESOLVED));
    }

    #[test]
    fn test_enrich_borrows_preserves_order() {
        let borrows = vec![borrow(3, 1, 1), borrow(1, 1, 1), borrow(2, 1, 1)];

        let rows = enrich_borrows(borrows, &[], &[]);
        let ids: Vec<i64> = rows.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn test_enrich_fines_resolves_user_name() {
        let users = vec![user(10, "Alice"), user(11, "Bob")];

        let rows = enrich_fines(vec![fine(5, 11), fine(6, 12)], &users);
        assert_eq!(rows[0].user_name, "Bob");
        assert_eq!(rows[1].user_name, UNRESOLVED);
    }

    #[test]
    fn test_blank_display_name_counts_as_unresolved() {
        let users = vec![user(10, "")];

        let rows = enrich_fines(vec![fine(5, 10)], &users);
        assert_eq!(rows[0].user_name, UNRESOLVED);
    }
}
