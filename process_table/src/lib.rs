//! # Process Table
//!
//! This crate owns every simulated process.
//!
//! ## Philosophy
//!
//! The table is the single owner and indexer of process records:
//! - An arena of slots addressed by [`ProcessId`](core_types::ProcessId)
//! - A per-state index derived from each record's state field
//! - One saved context snapshot per process
//!
//! Everything outside the table sees processes read-only. State changes go
//! through [`ProcessTable::change_state`], which updates the record and the
//! index together.

pub mod state_index;
pub mod table;

pub use state_index::StateIndex;
pub use table::{ProcessTable, MAX_PROCESS_COUNT};
