//! Book model
//!
//! Read-only projection of the catalog service's book records, consumed as
//! a join key when enriching borrow records with display titles.

use crate::domain::ids::BookId;
use serde::{Deserialize, Serialize};

/// A book as returned by `GET /books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier assigned by the catalog service
    pub id: BookId,

    /// Title shown in place of the raw identifier
    #[serde(default)]
    pub title: String,
}
