//! Round robin with a fixed quantum

use core_types::{Pcb, ProcessId};
use kernel_api::Scheduler;
use std::collections::VecDeque;
use std::num::NonZeroU64;

/// FIFO pool with time slicing
///
/// The slice is tracked here rather than in the process context: the
/// engine calls [`Scheduler::test`] once for every tick the active process
/// has run since the last [`Scheduler::pick`], except on the tick it
/// finishes.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    queue: VecDeque<ProcessId>,
    quantum: NonZeroU64,
    ran: u64,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum,
            ran: 0,
        }
    }

    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn insert(&mut self, process: &Pcb) {
        self.queue.push_back(process.id());
    }

    fn test(&mut self, _active: &Pcb) -> bool {
        self.ran += 1;
        self.ran >= self.quantum.get() && !self.queue.is_empty()
    }

    fn pick(&mut self) -> Option<ProcessId> {
        self.ran = 0;
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.ran = 0;
    }

    fn name(&self) -> &'static str {
        "round-robin"
    }
}
