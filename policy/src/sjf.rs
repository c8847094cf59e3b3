//! Shortest job first (non-preemptive)

use crate::pool::OrderedPool;
use core_types::{Pcb, ProcessId, Tick};
use kernel_api::Scheduler;

/// Picks the ready process with the smallest total duration
#[derive(Debug, Clone, Default)]
pub struct ShortestJobFirst {
    pool: OrderedPool<Tick>,
}

impl ShortestJobFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ShortestJobFirst {
    fn insert(&mut self, process: &Pcb) {
        self.pool.push(process.duration(), process.id());
    }

    fn test(&mut self, _active: &Pcb) -> bool {
        false
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
        "sjf"
    }
}
