//! Lifecycle workspaces
//!
//! A workspace is the per-entity controller: it owns the materialized
//! enriched rows, the ephemeral view state and the mutation workflows.
//! Mutations never patch the view locally; every attempt is followed by a
//! full aggregation pass so the console only shows what a service has
//! confirmed.

pub mod borrows;
pub mod fines;

// Re-export commonly used types
pub use borrows::BorrowWorkspace;
pub use fines::{FineDraft, FineWorkspace};
