//! Test utilities for engine tests
//!
//! This module provides minimal scheduler and context doubles plus input
//! helpers, so engine behavior can be tested without any real policy.

use core_types::{Pcb, ProcessDescriptor, ProcessId, Tick};
use kernel_api::{Context, Scheduler};
use std::collections::VecDeque;

/// Builds descriptors from `(creation_time, duration, priority)` triples
///
/// `input_index` is the position in `records`.
pub fn descriptors(records: &[(Tick, Tick, i32)]) -> Vec<ProcessDescriptor> {
    records
        .iter()
        .enumerate()
        .map(|(index, &(creation, duration, priority))| {
            ProcessDescriptor::new(creation, duration, priority, index)
        })
        .collect()
}

/// First-ready-first-served scheduler with an optional fixed slice
///
/// With `slice = Some(n)`, the active process is preempted on every tick
/// where it has run at least `n` ticks since it was picked, even if nothing
/// else is waiting.
#[derive(Debug, Default)]
pub struct FifoScheduler {
    queue: VecDeque<ProcessId>,
    slice: Option<u64>,
    ran: u64,
    tests: u64,
}

impl FifoScheduler {
    /// Never preempts
    pub fn new() -> Self {
        Self::default()
    }

    /// Preempts after `slice` ticks
    pub fn with_slice(slice: u64) -> Self {
        Self {
            slice: Some(slice),
            ..Self::default()
        }
    }

    /// How many times `test` was called
    pub fn test_calls(&self) -> u64 {
        self.tests
    }
}

impl Scheduler for FifoScheduler {
    fn insert(&mut self, process: &Pcb) {
        self.queue.push_back(process.id());
    }

    fn test(&mut self, _active: &Pcb) -> bool {
        self.tests += 1;
        self.ran += 1;
        matches!(self.slice, Some(slice) if self.ran >= slice)
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
        "test-fifo"
    }
}

/// Context that counts the ticks it was live for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickCounter {
    pub ticks: u64,
    pub last: Option<ProcessId>,
}

impl Context for TickCounter {
    fn tick(&mut self, process: ProcessId) {
        self.ticks += 1;
        self.last = Some(process);
    }
}
