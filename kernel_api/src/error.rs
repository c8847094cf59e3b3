//! Simulation error types

use core_types::ProcessId;
use thiserror::Error;

/// Errors raised by the process table and the simulation engine
///
/// `AdmissionRejected` is recoverable: the engine drops the descriptor and
/// keeps going. The other variants signal a broken invariant and abort the
/// run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// Process table is at capacity
    #[error("Admission rejected: process table is full ({capacity} processes)")]
    AdmissionRejected { capacity: usize },

    /// Lookup by an id that was never assigned
    #[error("Unknown process: {0}")]
    UnknownProcess(ProcessId),

    /// Execution accounted to a process that already served its duration
    #[error("Execution overrun: {0} already served its duration")]
    ExecutionOverrun(ProcessId),

    /// The run ended with admitted processes that never finished
    #[error("Simulation ended with {unfinished} unfinished process(es)")]
    Stranded { unfinished: usize },
}

impl SimError {
    /// Checks whether the engine may continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SimError::AdmissionRejected { .. })
    }
}
