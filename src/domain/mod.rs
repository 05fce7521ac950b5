//! Domain models and types for the circulation console.
//!
//! This module contains the core domain models, identifier types and the
//! error hierarchy shared by every layer of the console.
//!
//! # Overview
//!
//! - **Strongly-typed identifiers** ([`UserId`], [`BookId`], [`BorrowId`],
//!   [`FineId`]): newtypes over the services' numeric ids, so foreign keys
//!   from different collections cannot be mixed.
//! - **Collection models** ([`UserProfile`], [`Book`], [`BorrowRecord`],
//!   [`Fine`]): the wire shapes the services return.
//! - **Enriched views** ([`EnrichedBorrow`], [`EnrichedFine`]): derived
//!   rows carrying resolved display names; rebuilt on every aggregation
//!   pass, never authoritative.
//! - **Error types** ([`CircdeskError`], [`ServiceError`]) and the
//!   [`Result`] alias.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```
//! use circdesk::domain::{CircdeskError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(CircdeskError::Validation("amount must not be negative".into()))
//! }
//!
//! assert!(example().is_err());
//! ```

pub mod book;
pub mod borrow;
pub mod errors;
pub mod fine;
pub mod ids;
pub mod profile;
pub mod result;

// Re-export commonly used types for convenience
pub use book::Book;
pub use borrow::{BorrowRecord, BorrowStatus, EnrichedBorrow};
pub use errors::{CircdeskError, ServiceError, ServiceKind};
pub use fine::{EnrichedFine, Fine, FineReason};
pub use ids::{BookId, BorrowId, FineId, UserId};
pub use profile::UserProfile;
pub use result::Result;
