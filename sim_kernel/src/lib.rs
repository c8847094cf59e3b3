//! # Simulation Kernel
//!
//! Discrete-time CPU scheduling simulator.
//!
//! ## Purpose
//!
//! Replays a set of process descriptors against a scheduling policy and
//! records what the CPU did on every tick:
//! - Deterministic (logical clock, no real concurrency)
//! - Inspectable (timeline, process table and audit log are all exposed)
//! - Policy-agnostic (any [`kernel_api::Scheduler`] and [`kernel_api::Context`])
//!
//! ## Philosophy
//!
//! **The engine owns the mechanism; the policy owns the decision.**
//!
//! The engine decides *when* a decision is needed (a process finished, the
//! CPU is idle, or the policy asked to preempt). The scheduler decides
//! *who* runs next. Contexts are copied by value in and out of the process
//! table on every switch.

pub mod audit;
pub mod clock;
pub mod engine;
pub mod stats;
pub mod test_utils;
pub mod timeline;

pub use audit::ScheduleEvent;
pub use clock::SimClock;
pub use engine::{Simulator, SimulatorConfig};
pub use stats::{ProcessStats, SimulationStats};
pub use timeline::{Timeline, TimelineEntry};
