//! # Core Types
//!
//! This crate defines the fundamental types shared by the scheduling simulator.
//!
//! ## Philosophy
//!
//! - **Ids, not references**: Processes are addressed by stable arena slots.
//! - **Logical time only**: Every timestamp is a tick of the simulated clock.
//! - **One state at a time**: A process record carries exactly one [`ProcessState`].
//!
//! ## Key Types
//!
//! - [`Tick`]: A point or span on the logical clock
//! - [`ProcessId`]: Arena slot of a process, stable for the process lifetime
//! - [`RunId`]: Identifier for a single simulation run
//! - [`ProcessDescriptor`]: Immutable input record for one process
//! - [`Pcb`]: Mutable process control block owned by the process table

pub mod descriptor;
pub mod ids;
pub mod process;

pub use descriptor::ProcessDescriptor;
pub use ids::{ProcessId, RunId};
pub use process::{Pcb, ProcessState};

/// A point (or span) on the logical simulation clock.
///
/// Signed because input records may carry zero or negative durations,
/// which are legal and mean "finished on arrival".
pub type Tick = i64;
