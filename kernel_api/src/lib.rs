//! # Kernel API
//!
//! This crate defines the seams between the simulation engine and its
//! policy-specific collaborators.
//!
//! ## Philosophy
//!
//! The engine provides **mechanisms**, not policies:
//! - Admission, state transitions and execution accounting are fixed
//! - Which process runs next is decided by a [`Scheduler`]
//! - Per-process policy bookkeeping lives in a [`Context`]
//!
//! ## Design Goals
//!
//! 1. **Testability**: Every collaborator can be replaced by a test double
//! 2. **Explicitness**: Collaborators see processes by id and read-only record
//! 3. **Determinism**: Same inputs + same policy => same schedule
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A multi-core interface (one logical CPU only)
//! - A model of blocking or I/O

pub mod context;
pub mod error;
pub mod scheduler;

pub use context::Context;
pub use error::SimError;
pub use scheduler::Scheduler;
