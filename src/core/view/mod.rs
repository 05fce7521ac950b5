//! View model: filtering and pagination
//!
//! Turns an enriched row set plus ephemeral view state (live search term,
//! current page) into the page actually shown to the operator. Everything
//! in this module is pure; the workspaces own the state and the rows.

pub mod filter;
pub mod paginate;
pub mod state;

// Re-export commonly used items
pub use filter::{filter, Searchable};
pub use paginate::{clamp_page, page_slice, total_pages};
pub use state::{PageView, ViewState};
