//! # Scheduling Policies
//!
//! Concrete implementations of [`kernel_api::Scheduler`] and
//! [`kernel_api::Context`] for the simulation engine.
//!
//! ## Philosophy
//!
//! - **Policy decides, engine enforces**: policies only order the ready pool
//!   and advise on preemption; state changes stay with the engine
//! - **Deterministic**: equal keys are served in insertion order
//! - **Selectable at run time**: [`PolicyKind::build`] returns a boxed policy
//!
//! ## Policies
//!
//! | name | order | preempts |
//! |---|---|---|
//! | `fcfs` | arrival | never |
//! | `sjf` | shortest duration | never |
//! | `srtf` | shortest remaining time | strictly shorter job waiting |
//! | `priority` | highest priority | never |
//! | `priority-preemptive` | highest priority | strictly higher priority waiting |
//! | `round-robin` | arrival | quantum used up and someone waiting |

mod context;
mod fcfs;
mod kind;
mod pool;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use context::{CpuAccounting, NoContext};
pub use fcfs::Fcfs;
pub use kind::{ParsePolicyError, PolicyKind, DEFAULT_QUANTUM};
pub use pool::OrderedPool;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTime;
