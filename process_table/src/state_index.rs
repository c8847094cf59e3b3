//! State-indexed membership

use core_types::{ProcessId, ProcessState};
use std::collections::HashMap;

/// Mapping from state to the processes currently in it
///
/// Order within a state is insertion order. This is a cache of the PCB
/// state fields; the process table keeps the two in step.
#[derive(Debug, Default)]
pub struct StateIndex {
    members: HashMap<ProcessState, Vec<ProcessId>>,
}

impl StateIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the members of `state`
    pub fn get(&self, state: ProcessState) -> &[ProcessId] {
        self.members
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of processes in `state`
    pub fn count(&self, state: ProcessState) -> usize {
        self.get(state).len()
    }

    /// Adds `id` to `state` (no-op if already a member)
    pub fn insert(&mut self, id: ProcessId, state: ProcessState) {
        let members = self.members.entry(state).or_default();
        if !members.contains(&id) {
            members.push(id);
        }
    }

    /// Removes `id` from `state` if present
    pub fn remove(&mut self, id: ProcessId, state: ProcessState) {
        if let Some(members) = self.members.get_mut(&state) {
            members.retain(|&member| member != id);
        }
    }

    /// Moves `id` from one state to another
    pub fn relocate(&mut self, id: ProcessId, from: ProcessState, to: ProcessState) {
        self.remove(id, from);
        self.insert(id, to);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_empty_slice() {
        let index = StateIndex::new();
        assert!(index.get(ProcessState::Ready).is_empty());
        assert_eq!(index.count(ProcessState::New), 0);
    }

    #[test]
    fn test_insert_keeps_insertion_order() {
        let mut index = StateIndex::new();
        index.insert(ProcessId::new(2), ProcessState::Ready);
        index.insert(ProcessId::new(0), ProcessState::Ready);
        index.insert(ProcessId::new(1), ProcessState::Ready);

        assert_eq!(
            index.get(ProcessState::Ready),
            &[ProcessId::new(2), ProcessId::new(0), ProcessId::new(1)]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = StateIndex::new();
        index.insert(ProcessId::new(0), ProcessState::New);
        index.insert(ProcessId::new(0), ProcessState::New);
        assert_eq!(index.count(ProcessState::New), 1);
    }

    #[test]
    fn test_relocate() {
        let mut index = StateIndex::new();
        index.insert(ProcessId::new(0), ProcessState::New);
        index.relocate(ProcessId::new(0), ProcessState::New, ProcessState::Ready);

        assert_eq!(index.count(ProcessState::New), 0);
        assert_eq!(index.get(ProcessState::Ready), &[ProcessId::new(0)]);
    }

    #[test]
    fn test_clear() {
        let mut index = StateIndex::new();
        index.insert(ProcessId::new(0), ProcessState::Finished);
        index.clear();
        assert_eq!(index.count(ProcessState::Finished), 0);
    }
}
