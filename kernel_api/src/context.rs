//! Per-process policy context

use core_types::ProcessId;
use std::fmt;

/// Policy-specific state carried by each process
///
/// The engine keeps one live *active* context. On a context switch the
/// outgoing process's active context is copied into its snapshot in the
/// process table and the incoming process's snapshot is copied out into the
/// active slot. Mutations made while a process runs are therefore invisible
/// to every other process.
///
/// `Default` builds the fresh context of a newly admitted process; `Clone`
/// is the snapshot/restore copy.
pub trait Context: Default + Clone + fmt::Debug {
    /// Advances the context by one tick of execution of `process`
    fn tick(&mut self, process: ProcessId);

    /// Diagnostic dump; carries no behavioral contract
    fn show(&self) -> String {
        format!("{:?}", self)
    }
}
