//! Core orchestration logic
//!
//! The pipeline runs one direction: the [`join`] engine aggregates
//! service snapshots into enriched rows, the [`view`] model filters and
//! pages them, and the [`workspace`] controllers drive mutations and the
//! refresh that follows every one of them.

pub mod join;
pub mod view;
pub mod workspace;
