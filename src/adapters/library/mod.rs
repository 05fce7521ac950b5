//! Library service adapters
//!
//! Typed access to the four remote collections behind the [`LibraryApi`]
//! seam, plus the request payload types for mutations.

pub mod api;
pub mod client;
pub mod models;

// Re-export commonly used types
pub use api::LibraryApi;
pub use client::HttpLibraryClient;
pub use models::{FineChanges, NewFine};
