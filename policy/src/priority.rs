//! Static priority scheduling

use crate::pool::OrderedPool;
use core_types::{Pcb, ProcessId};
use kernel_api::Scheduler;
use std::cmp::Reverse;

/// Picks the ready process with the highest priority value
///
/// With `preemptive` set, the active process is preempted as soon as a
/// strictly higher priority process is waiting.
#[derive(Debug, Clone, Default)]
pub struct Priority {
    pool: OrderedPool<Reverse<i32>>,
    preemptive: bool,
}

impl Priority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preemptive() -> Self {
        Self {
            preemptive: true,
            ..Self::default()
        }
    }

    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for Priority {
    fn insert(&mut self, process: &Pcb) {
        self.pool.push(Reverse(process.priority()), process.id());
    }

    fn test(&mut self, active: &Pcb) -> bool {
        self.preemptive
            && self
                .pool
                .peek_key()
                .is_some_and(|Reverse(highest)| highest > active.priority())
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
        if self.is_preemptive() {
            "priority-preemptive"
        } else {
            "priority"
        }
    }
}
