//! External service integrations
//!
//! Adapters translate between the console's domain types and the wire
//! contracts of the remote services. Everything HTTP-specific stays in
//! this layer; the core only sees the [`library::LibraryApi`] trait and
//! domain errors.

pub mod library;
