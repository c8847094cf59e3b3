//! Ordered ready pool shared by the key-based policies

use core_types::ProcessId;
use std::collections::BTreeMap;

/// Ready pool ordered by a policy key, FIFO among equal keys
///
/// Entries are keyed by `(key, sequence)` where `sequence` is a
/// monotonically increasing insertion counter.
#[derive(Debug, Clone)]
pub struct OrderedPool<K: Ord> {
    entries: BTreeMap<(K, u64), ProcessId>,
    next_seq: u64,
}

impl<K: Ord + Copy> OrderedPool<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: K, process: ProcessId) {
        self.entries.insert((key, self.next_seq), process);
        self.next_seq += 1;
    }

    /// Removes the process with the smallest key
    pub fn pop(&mut self) -> Option<ProcessId> {
        self.entries.pop_first().map(|(_, process)| process)
    }

    /// Smallest key in the pool
    pub fn peek_key(&self) -> Option<K> {
        self.entries.keys().next().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord + Copy> Default for OrderedPool<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_key_first() {
        let mut pool = OrderedPool::new();
        pool.push(5, ProcessId::new(0));
        pool.push(1, ProcessId::new(1));
        pool.push(3, ProcessId::new(2));

        assert_eq!(pool.peek_key(), Some(1));
        assert_eq!(pool.pop(), Some(ProcessId::new(1)));
        assert_eq!(pool.pop(), Some(ProcessId::new(2)));
        assert_eq!(pool.pop(), Some(ProcessId::new(0)));
        assert_eq!(pool.pop(), None);
    }

    #[test]
    fn test_equal_keys_are_fifo() {
        let mut pool = OrderedPool::new();
        for slot in [4, 2, 7] {
            pool.push(0, ProcessId::new(slot));
        }
        assert_eq!(pool.pop(), Some(ProcessId::new(4)));
        assert_eq!(pool.pop(), Some(ProcessId::new(2)));
        assert_eq!(pool.pop(), Some(ProcessId::new(7)));
    }

    #[test]
    fn test_reinserted_process_goes_behind_peers() {
        let mut pool = OrderedPool::new();
        pool.push(1, ProcessId::new(0));
        pool.push(1, ProcessId::new(1));
        let first = pool.pop().unwrap();
        pool.push(1, first);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.pop(), Some(ProcessId::new(1)));
        assert_eq!(pool.pop(), Some(ProcessId::new(0)));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_clear_drops_every_entry() {
        let mut pool = OrderedPool::new();
        pool.push(2, ProcessId::new(0));
        pool.push(1, ProcessId::new(1));
        pool.clear();

        assert!(pool.is_empty());
        assert_eq!(pool.peek_key(), None);
        pool.push(3, ProcessId::new(2));
        assert_eq!(pool.pop(), Some(ProcessId::new(2)));
    }
}
