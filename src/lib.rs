// circdesk - Staff Circulation Console
// Copyright (c) 2025 circdesk Contributors
// Licensed under the MIT License

//! # circdesk - staff circulation console
//!
//! circdesk is the staff-facing console for a library platform built from
//! independent services (user profiles, catalog, borrowing, fines). It
//! aggregates the services' records into denormalized views, derives a
//! filtered and paginated presentation, and drives the borrow/fine
//! lifecycle transitions against services that share no foreign-key
//! integrity with each other.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Orchestration logic (join engine, view model, workspaces)
//! - [`adapters`] - HTTP access to the library services
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use circdesk::adapters::library::HttpLibraryClient;
//! use circdesk::config::load_config;
//! use circdesk::core::workspace::BorrowWorkspace;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("circdesk.toml")?;
//!     let client = Arc::new(HttpLibraryClient::new(config.services.clone())?);
//!
//!     let mut workspace = BorrowWorkspace::new(client, config.view.page_size);
//!     workspace.refresh().await?;
//!
//!     workspace.set_search("alice");
//!     let page = workspace.page();
//!     println!("{} matching records", page.filtered_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! One aggregation pass fetches the primary collection (borrows or fines)
//! and the secondary collections (users, books) concurrently. A primary
//! failure fails the pass and the workspace keeps its previous rows; a
//! secondary failure only degrades enrichment, substituting `"N/A"` for
//! every name it can no longer resolve. Mutations are never applied to
//! the view optimistically; after every attempt the workspace re-runs
//! the full pass and shows only server-confirmed state.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
