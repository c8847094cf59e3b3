//! Context types

use core_types::ProcessId;
use kernel_api::Context;
use serde::{Deserialize, Serialize};

/// Context for policies that keep no per-process state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContext;

impl Context for NoContext {
    fn tick(&mut self, _process: ProcessId) {}

    fn show(&self) -> String {
        "-".to_string()
    }
}

/// Counts the ticks a process has run while its context was loaded
///
/// Contexts are copied on every switch, so a finished process's snapshot
/// holds exactly its own execution time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuAccounting {
    pub ticks: u64,
    pub last_process: Option<ProcessId>,
}

impl Context for CpuAccounting {
    fn tick(&mut self, process: ProcessId) {
        self.ticks += 1;
        self.last_process = Some(process);
    }

    fn show(&self) -> String {
        match self.last_process {
            Some(process) => format!("{} ticks (last {})", self.ticks, process),
            None => format!("{} ticks", self.ticks),
        }
    }
}
