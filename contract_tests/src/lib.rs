//! # Scheduler Contract Tests
//!
//! "Golden" tests for the contracts between the engine, its policies and
//! the report consumers, so they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the `Scheduler` contract is written as code
//! - **Every policy, same checks**: a new policy joins by being listed in
//!   [`policy::PolicyKind::ALL`]
//! - **Stable output**: serialized names in the JSON report are contracts
//!
//! ## Structure
//!
//! - `scheduler`: pool behavior every policy must honor
//! - `report_schema`: wire names of events, timeline and configuration

pub mod report_schema;
pub mod scheduler;

/// Common helpers for contract validation
pub mod test_helpers {
    use core_types::{Pcb, ProcessId, Tick};
    use kernel_api::Scheduler;
    use policy::PolicyKind;
    use std::collections::BTreeSet;
    use std::num::NonZeroU64;

    /// Quantum used when building round robin for contract checks
    pub const CONTRACT_QUANTUM: u64 = 2;

    pub fn build(kind: PolicyKind) -> Box<dyn Scheduler> {
        let quantum = NonZeroU64::new(CONTRACT_QUANTUM).unwrap_or(NonZeroU64::MIN);
        kind.build(quantum)
    }

    /// A ready process record
    pub fn pcb(slot: usize, duration: Tick, priority: i32) -> Pcb {
        Pcb::new(ProcessId::new(slot), 0, duration, priority)
    }

    /// Picks until the pool is empty, checking `len` on the way down
    pub fn drain(scheduler: &mut dyn Scheduler) -> Vec<ProcessId> {
        let initial = scheduler.len();
        let mut picked = Vec::new();
        while let Some(id) = scheduler.pick() {
            picked.push(id);
            assert_eq!(
                scheduler.len(),
                initial.saturating_sub(picked.len()),
                "{}: len() must shrink by one per pick",
                scheduler.name()
            );
        }
        assert!(
            scheduler.is_empty(),
            "{}: pick() returned None with a non-empty pool",
            scheduler.name()
        );
        picked
    }

    /// Verifies `picked` is a permutation of `inserted`
    pub fn verify_same_members(name: &str, inserted: &[ProcessId], picked: &[ProcessId]) {
        let inserted: BTreeSet<_> = inserted.iter().copied().collect();
        let picked_set: BTreeSet<_> = picked.iter().copied().collect();
        assert_eq!(
            picked.len(),
            picked_set.len(),
            "{}: a process was picked twice",
            name
        );
        assert_eq!(
            inserted, picked_set,
            "{}: picked processes differ from inserted ones",
            name
        );
    }
}
