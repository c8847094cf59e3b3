//! Simulation Test Utilities
//!
//! Shared helpers for the cross-crate simulation tests.
//!
//! ## Test Philosophy
//!
//! - **Invariants over snapshots**: every run is checked against the
//!   bookkeeping guarantees of the engine, not just its expected output
//! - **Deterministic inputs**: generated workloads come from a fixed seed
//! - **Real policies**: runs use the shipped schedulers and contexts

use core_types::{ProcessDescriptor, ProcessState, Tick};
use kernel_api::{Scheduler, SimError};
use policy::{CpuAccounting, PolicyKind};
use sim_kernel::{ScheduleEvent, Simulator, SimulatorConfig};
use std::num::NonZeroU64;

pub type PolicySimulator = Simulator<Box<dyn Scheduler>, CpuAccounting>;

/// Builds descriptors from `(creation_time, duration, priority)` triples
pub fn workload(records: &[(Tick, Tick, i32)]) -> Vec<ProcessDescriptor> {
    sim_kernel::test_utils::descriptors(records)
}

/// Runs `descriptors` under `kind` with the default capacity
pub fn run(
    kind: PolicyKind,
    quantum: u64,
    descriptors: &[ProcessDescriptor],
) -> Result<PolicySimulator, SimError> {
    run_with_config(kind, quantum, SimulatorConfig::default(), descriptors)
}

pub fn run_with_config(
    kind: PolicyKind,
    quantum: u64,
    config: SimulatorConfig,
    descriptors: &[ProcessDescriptor],
) -> Result<PolicySimulator, SimError> {
    let quantum = NonZeroU64::new(quantum).unwrap_or(NonZeroU64::MIN);
    let mut sim = Simulator::with_config(kind.build(quantum), config);
    sim.simulate(descriptors)?;
    Ok(sim)
}

/// Timeline as slot numbers, `None` for idle ticks
pub fn slots(sim: &PolicySimulator) -> Vec<Option<usize>> {
    sim.timeline()
        .iter()
        .map(|entry| entry.process().map(|id| id.slot()))
        .collect()
}

/// Deterministic pseudo-random workload generator (xorshift64)
pub struct WorkloadGenerator {
    state: u64,
}

impl WorkloadGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> i64 {
        (self.next() % bound) as i64
    }

    /// `count` descriptors with arrivals in `0..20`, durations in `-1..8`
    /// and priorities in `0..5`
    pub fn generate(&mut self, count: usize) -> Vec<ProcessDescriptor> {
        (0..count)
            .map(|index| {
                ProcessDescriptor::new(
                    self.below(20),
                    self.below(9) - 1,
                    self.below(5) as i32,
                    index,
                )
            })
            .collect()
    }
}

/// Asserts the bookkeeping guarantees of a completed run
///
/// Assumes every descriptor was admitted.
pub fn verify_run(sim: &PolicySimulator) {
    let timeline = sim.timeline();
    let name = sim.scheduler().name();

    for pcb in sim.table().all_processes() {
        let id = pcb.id();
        assert_eq!(pcb.state(), ProcessState::Finished, "{}: {} not finished", name, id);
        assert_eq!(pcb.executing_time(), pcb.duration().max(0), "{}: {}", name, id);
        assert_eq!(timeline.ticks_of(id) as Tick, pcb.executing_time(), "{}: {}", name, id);

        let end = pcb.end_time().unwrap_or(Tick::MIN);
        let ran_at: Vec<usize> = timeline
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.process() == Some(id))
            .map(|(tick, _)| tick)
            .collect();
        match (ran_at.first(), ran_at.last()) {
            (Some(&first), Some(&last)) => {
                assert!(first as Tick >= pcb.start_time(), "{}: {} ran early", name, id);
                assert_eq!(end, last as Tick + 1, "{}: {} end time", name, id);
            }
            _ => assert_eq!(end, pcb.start_time(), "{}: {} instant finish", name, id),
        }

        let snapshot = sim.table().context(id).map(|c| c.ticks).unwrap_or(u64::MAX);
        assert_eq!(snapshot as Tick, pcb.executing_time(), "{}: {} context", name, id);
    }

    let dispatches = sim
        .audit_log()
        .iter()
        .filter(|e| matches!(e, ScheduleEvent::Dispatched { .. }))
        .count() as u64;
    assert_eq!(sim.context_switches(), dispatches, "{}", name);

    let segments = timeline
        .entries()
        .iter()
        .enumerate()
        .filter(|(tick, entry)| {
            !entry.is_idle() && (*tick == 0 || timeline.get(tick - 1) != Some(**entry))
        })
        .count() as u64;
    assert!(sim.context_switches() >= segments, "{}", name);

    let idle_events = sim
        .audit_log()
        .iter()
        .filter(|e| matches!(e, ScheduleEvent::Idle { .. }))
        .count();
    assert_eq!(timeline.idle_ticks(), idle_events, "{}", name);

    let last_end = sim
        .table()
        .all_processes()
        .iter()
        .filter_map(|pcb| pcb.end_time())
        .max();
    if let Some(last_end) = last_end {
        assert_eq!(last_end, timeline.len() as Tick, "{}: total ticks", name);
    }
    assert!(sim.active().is_none());
    assert!(sim.scheduler().is_empty(), "{}: pool not drained", name);
}
