//! First come, first served

use core_types::{Pcb, ProcessId};
use kernel_api::Scheduler;
use std::collections::VecDeque;

/// Runs processes in the order they became ready; never preempts
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    queue: VecDeque<ProcessId>,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for Fcfs {
    fn insert(&mut self, process: &Pcb) {
        self.queue.push_back(process.id());
    }

    fn test(&mut self, _active: &Pcb) -> bool {
        false
    }

    fn pick(&mut self) -> Option<ProcessId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn name(&self) -> &'static str {
        "fcfs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_in_insertion_order() {
        let mut fcfs = Fcfs::new();
        fcfs.insert(&Pcb::new(ProcessId::new(2), 0, 9, 0));
        fcfs.insert(&Pcb::new(ProcessId::new(0), 0, 1, 5));

        assert_eq!(fcfs.pick(), Some(ProcessId::new(2)));
        assert_eq!(fcfs.pick(), Some(ProcessId::new(0)));
        assert_eq!(fcfs.pick(), None);
    }

    #[test]
    fn test_never_preempts() {
        let mut fcfs = Fcfs::new();
        let active = Pcb::new(ProcessId::new(0), 0, 100, 0);
        fcfs.insert(&Pcb::new(ProcessId::new(1), 0, 1, 9));
        for _ in 0..10 {
            assert!(!fcfs.test(&active));
        }
    }
}
