//! Process table arena

use crate::StateIndex;
use core_types::{Pcb, ProcessId, ProcessState, Tick};
use kernel_api::{Context, SimError};
use tracing::{trace, warn};

/// Default maximum number of processes a table tracks
pub const MAX_PROCESS_COUNT: usize = 100;

/// Owning arena of process records and their saved contexts
///
/// Slot `n` of `processes` and slot `n` of `contexts` belong to
/// `ProcessId::new(n)`. Slots are appended on admission and only released
/// all together by [`clear`](ProcessTable::clear).
#[derive(Debug)]
pub struct ProcessTable<C> {
    processes: Vec<Pcb>,
    contexts: Vec<C>,
    index: StateIndex,
    capacity: usize,
}

impl<C: Context> ProcessTable<C> {
    /// Creates a table bounded by [`MAX_PROCESS_COUNT`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_PROCESS_COUNT)
    }

    /// Creates a table that admits at most `capacity` processes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            processes: Vec::with_capacity(capacity),
            contexts: Vec::with_capacity(capacity),
            index: StateIndex::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.processes.len() >= self.capacity
    }

    /// Admits a new process in state `New` with a fresh context
    ///
    /// Fails with `AdmissionRejected` when the table is at capacity.
    pub fn create_process(
        &mut self,
        creation_time: Tick,
        duration: Tick,
        priority: i32,
    ) -> Result<ProcessId, SimError> {
        if self.is_full() {
            return Err(SimError::AdmissionRejected {
                capacity: self.capacity,
            });
        }

        let id = ProcessId::new(self.processes.len());
        self.processes
            .push(Pcb::new(id, creation_time, duration, priority));
        self.contexts.push(C::default());
        self.index.insert(id, ProcessState::New);

        Ok(id)
    }

    /// Returns the record for `id`
    pub fn get_process(&self, id: ProcessId) -> Result<&Pcb, SimError> {
        self.processes
            .get(id.slot())
            .ok_or(SimError::UnknownProcess(id))
    }

    fn get_process_mut(&mut self, id: ProcessId) -> Result<&mut Pcb, SimError> {
        self.processes
            .get_mut(id.slot())
            .ok_or(SimError::UnknownProcess(id))
    }

    /// Ids of the processes currently in `state`, in insertion order
    pub fn get_by_state(&self, state: ProcessState) -> &[ProcessId] {
        self.index.get(state)
    }

    /// Records of the processes currently in `state`, in insertion order
    pub fn processes_in(&self, state: ProcessState) -> impl Iterator<Item = &Pcb> + '_ {
        self.index
            .get(state)
            .iter()
            .filter_map(move |id| self.processes.get(id.slot()))
    }

    /// Moves a process to `state`
    ///
    /// Updates the state index and the record's state field together.
    /// Transition legality is the caller's contract and is not enforced here.
    pub fn change_state(&mut self, id: ProcessId, state: ProcessState) -> Result<(), SimError> {
        let pcb = self.get_process_mut(id)?;
        let previous = pcb.state();
        if previous != state && !previous.can_transition_to(state) {
            warn!(process = %id, from = previous.as_str(), to = state.as_str(), "Illegal state transition");
        }
        pcb.set_state(state);
        self.index.relocate(id, previous, state);
        trace!(process = %id, from = previous.as_str(), to = state.as_str(), "State changed");
        Ok(())
    }

    /// Accounts one tick of execution to `id`
    ///
    /// Returns the new executing time.
    pub fn account_tick(&mut self, id: ProcessId) -> Result<Tick, SimError> {
        let pcb = self.get_process_mut(id)?;
        if !pcb.record_tick() {
            return Err(SimError::ExecutionOverrun(id));
        }
        Ok(pcb.executing_time())
    }

    /// Moves `id` to `Finished` and stamps its end time
    ///
    /// The end time is only ever written once.
    pub fn finish(&mut self, id: ProcessId, at: Tick) -> Result<(), SimError> {
        self.change_state(id, ProcessState::Finished)?;
        if !self.get_process_mut(id)?.mark_end(at) {
            warn!(process = %id, at, "End time already recorded");
        }
        Ok(())
    }

    /// Returns a copy of the saved context of `id`
    pub fn load_context(&self, id: ProcessId) -> Result<C, SimError> {
        self.contexts
            .get(id.slot())
            .cloned()
            .ok_or(SimError::UnknownProcess(id))
    }

    /// Overwrites the saved context of `id`
    pub fn save_context(&mut self, id: ProcessId, context: C) -> Result<(), SimError> {
        let slot = self
            .contexts
            .get_mut(id.slot())
            .ok_or(SimError::UnknownProcess(id))?;
        *slot = context;
        Ok(())
    }

    /// Borrows the saved context of `id` without copying it
    pub fn context(&self, id: ProcessId) -> Result<&C, SimError> {
        self.contexts
            .get(id.slot())
            .ok_or(SimError::UnknownProcess(id))
    }

    /// Drops every process and context
    pub fn clear(&mut self) {
        self.processes.clear();
        self.contexts.clear();
        self.index.clear();
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// All records, in id order
    pub fn all_processes(&self) -> &[Pcb] {
        &self.processes
    }
}

impl<C: Context> Default for ProcessTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Quantum {
        used: u32,
    }

    impl Context for Quantum {
        fn tick(&mut self, _process: ProcessId) {
            self.used += 1;
        }
    }

    fn table() -> ProcessTable<Quantum> {
        ProcessTable::new()
    }

    #[test]
    fn test_create_assigns_monotonic_slots() {
        let mut table = table();
        let a = table.create_process(0, 3, 0).unwrap();
        let b = table.create_process(1, 2, 0).unwrap();

        assert_eq!(a, ProcessId::new(0));
        assert_eq!(b, ProcessId::new(1));
        assert_eq!(table.process_count(), 2);
        assert_eq!(table.get_process(b).unwrap().creation_time(), 1);
    }

    #[test]
    fn test_new_process_is_indexed_as_new() {
        let mut table = table();
        let id = table.create_process(0, 3, 0).unwrap();

        assert_eq!(table.get_process(id).unwrap().state(), ProcessState::New);
        assert_eq!(table.get_by_state(ProcessState::New), &[id]);
    }

    #[test]
    fn test_admission_rejected_at_capacity() {
        let mut table: ProcessTable<Quantum> = ProcessTable::with_capacity(2);
        table.create_process(0, 1, 0).unwrap();
        table.create_process(0, 1, 0).unwrap();

        let result = table.create_process(0, 1, 0);
        assert_eq!(result, Err(SimError::AdmissionRejected { capacity: 2 }));
        assert_eq!(table.process_count(), 2);
    }

    #[test]
    fn test_default_capacity() {
        let mut table = table();
        for _ in 0..MAX_PROCESS_COUNT {
            table.create_process(0, 1, 0).unwrap();
        }
        assert!(table.is_full());
        assert!(table.create_process(0, 1, 0).is_err());
    }

    #[test]
    fn test_unknown_process() {
        let table = table();
        let missing = ProcessId::new(4);
        assert_eq!(
            table.get_process(missing),
            Err(SimError::UnknownProcess(missing))
        );
        assert!(table.load_context(missing).is_err());
    }

    #[test]
    fn test_change_state_updates_record_and_index() {
        let mut table = table();
        let a = table.create_process(0, 3, 0).unwrap();
        let b = table.create_process(0, 3, 0).unwrap();

        table.change_state(b, ProcessState::Ready).unwrap();
        table.change_state(a, ProcessState::Ready).unwrap();

        assert_eq!(table.get_by_state(ProcessState::New), &[] as &[ProcessId]);
        assert_eq!(table.get_by_state(ProcessState::Ready), &[b, a]);
        assert_eq!(table.get_process(a).unwrap().state(), ProcessState::Ready);

        table.change_state(a, ProcessState::Executing).unwrap();
        assert_eq!(table.get_by_state(ProcessState::Ready), &[b]);
        assert_eq!(table.get_by_state(ProcessState::Executing), &[a]);
    }

    #[test]
    fn test_change_state_to_same_state_is_idempotent() {
        let mut table = table();
        let id = table.create_process(0, 3, 0).unwrap();
        table.change_state(id, ProcessState::New).unwrap();
        assert_eq!(table.get_by_state(ProcessState::New), &[id]);
    }

    #[test]
    fn test_processes_in_state() {
        let mut table = table();
        let a = table.create_process(0, 3, 7).unwrap();
        table.create_process(0, 3, 0).unwrap();
        table.change_state(a, ProcessState::Ready).unwrap();

        let ready: Vec<i32> = table
            .processes_in(ProcessState::Ready)
            .map(|pcb| pcb.priority())
            .collect();
        assert_eq!(ready, vec![7]);
    }

    #[test]
    fn test_account_tick_stops_at_duration() {
        let mut table = table();
        let id = table.create_process(0, 2, 0).unwrap();

        assert_eq!(table.account_tick(id), Ok(1));
        assert_eq!(table.account_tick(id), Ok(2));
        assert_eq!(table.account_tick(id), Err(SimError::ExecutionOverrun(id)));
        assert_eq!(table.get_process(id).unwrap().executing_time(), 2);
    }

    #[test]
    fn test_finish_sets_end_time_once() {
        let mut table = table();
        let id = table.create_process(3, 0, 0).unwrap();

        table.finish(id, 3).unwrap();
        table.finish(id, 8).unwrap();

        let pcb = table.get_process(id).unwrap();
        assert_eq!(pcb.state(), ProcessState::Finished);
        assert_eq!(pcb.end_time(), Some(3));
        assert_eq!(table.get_by_state(ProcessState::Finished), &[id]);
    }

    #[test]
    fn test_context_snapshot_is_a_copy() {
        let mut table = table();
        let a = table.create_process(0, 3, 0).unwrap();
        let b = table.create_process(0, 3, 0).unwrap();

        let mut live = table.load_context(a).unwrap();
        live.tick(a);
        live.tick(a);
        assert_eq!(table.context(a).unwrap().used, 0);

        table.save_context(a, live).unwrap();
        assert_eq!(table.context(a).unwrap().used, 2);
        assert_eq!(table.context(b).unwrap().used, 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut table = table();
        let id = table.create_process(0, 3, 0).unwrap();
        table.change_state(id, ProcessState::Ready).unwrap();

        table.clear();

        assert_eq!(table.process_count(), 0);
        assert!(table.all_processes().is_empty());
        assert!(table.get_by_state(ProcessState::Ready).is_empty());
        assert_eq!(table.create_process(0, 1, 0), Ok(ProcessId::new(0)));
    }
}
