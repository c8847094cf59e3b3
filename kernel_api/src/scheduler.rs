//! Scheduler trait

use core_types::{Pcb, ProcessId};

/// Scheduling policy
///
/// The engine hands `Ready` processes to the policy with [`insert`], asks
/// once per tick whether the active process should give up the CPU with
/// [`test`], and takes the next process to run with [`pick`].
///
/// Policies see process records read-only and refer to processes by id.
/// They never change process state themselves.
///
/// [`insert`]: Scheduler::insert
/// [`test`]: Scheduler::test
/// [`pick`]: Scheduler::pick
pub trait Scheduler {
    /// Adds a ready process to the pool
    fn insert(&mut self, process: &Pcb);

    /// Returns true if `active` should be preempted this tick
    ///
    /// Called at most once per tick, before the engine changes any state
    /// for that tick.
    fn test(&mut self, active: &Pcb) -> bool;

    /// Removes and returns the next process to run
    ///
    /// Must return `None` only if the pool is empty.
    fn pick(&mut self) -> Option<ProcessId>;

    /// Number of processes waiting in the pool
    fn len(&self) -> usize;

    /// Empties the pool and forgets any per-run bookkeeping
    ///
    /// The engine calls this at the start of every run, so ids left over
    /// from an aborted run are never picked.
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short policy name for reports and logs
    fn name(&self) -> &'static str;
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn insert(&mut self, process: &Pcb) {
        (**self).insert(process)
    }

    fn test(&mut self, active: &Pcb) -> bool {
        (**self).test(active)
    }

    fn pick(&mut self) -> Option<ProcessId> {
        (**self).pick()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
