//! Shortest remaining time first (preemptive SJF)

use crate::pool::OrderedPool;
use core_types::{Pcb, ProcessId, Tick};
use kernel_api::Scheduler;

/// Picks the ready process with the least remaining work
///
/// Remaining time is sampled when a process is inserted; a waiting process
/// does not run, so the sample stays exact until it is picked.
#[derive(Debug, Clone, Default)]
pub struct ShortestRemainingTime {
    pool: OrderedPool<Tick>,
}

impl ShortestRemainingTime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ShortestRemainingTime {
    fn insert(&mut self, process: &Pcb) {
        self.pool.push(process.remaining(), process.id());
    }

    fn test(&mut self, active: &Pcb) -> bool {
        self.pool
            .peek_key()
            .is_some_and(|shortest| shortest < active.remaining())
    }

    fn pick(&mut self) -> Option<ProcessId> {
        self.pool.pop()
    }

    fn len(&self) -> usize {
        self.pool.len()
    }

    fn clear(&mut self) {
        self.pool.clear();
    }

    fn name(&self) -> &'static str {
        "srtf"
    }
}
