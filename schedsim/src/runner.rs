//! Runs configured policies over one descriptor set

use crate::config::SimConfig;
use crate::report::RunReport;
use core_types::ProcessDescriptor;
use kernel_api::SimError;
use policy::{CpuAccounting, PolicyKind};
use sim_kernel::{Simulator, SimulatorConfig};
use std::num::NonZeroU64;
use tracing::debug;

/// Simulates `descriptors` under one policy
pub fn run_policy(
    kind: PolicyKind,
    quantum: NonZeroU64,
    config: SimulatorConfig,
    descriptors: &[ProcessDescriptor],
) -> Result<RunReport, SimError> {
    let mut sim: Simulator<_, CpuAccounting> = Simulator::with_config(kind.build(quantum), config);
    sim.simulate(descriptors)?;
    debug!(policy = %kind, contexts = %sim.context_table(), "Final contexts");
    Ok(RunReport::from_simulator(&sim))
}

/// Simulates `descriptors` under every policy the configuration selects
///
/// Every run gets its own simulator, so runs never share state.
pub fn run_configured(
    config: &SimConfig,
    descriptors: &[ProcessDescriptor],
) -> Result<Vec<RunReport>, crate::CliError> {
    let quantum = config.quantum_ticks()?;
    config
        .policy
        .kinds()
        .into_iter()
        .map(|kind| {
            run_policy(kind, quantum, config.simulator_config(), descriptors)
                .map_err(crate::CliError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicySelection;
    use sim_kernel::test_utils::descriptors;
    use sim_kernel::TimelineEntry;

    fn quantum(q: u64) -> NonZeroU64 {
        NonZeroU64::new(q).unwrap()
    }

    #[test]
    fn test_round_robin_interleaves() {
        let report = run_policy(
            PolicyKind::RoundRobin,
            quantum(1),
            SimulatorConfig::default(),
            &descriptors(&[(0, 2, 0), (0, 2, 0)]),
        )
        .unwrap();

        let order: Vec<Option<usize>> = report
            .timeline
            .iter()
            .map(|e| e.process().map(|p| p.slot()))
            .collect();
        assert_eq!(order, vec![Some(0), Some(1), Some(0), Some(1)]);
        assert_eq!(report.stats.context_switches, 4);
    }

    #[test]
    fn test_run_all_policies() {
        let config = SimConfig::default().with_policy(PolicySelection::All);
        let reports = run_configured(&config, &descriptors(&[(0, 3, 1), (1, 1, 5)])).unwrap();

        assert_eq!(reports.len(), PolicyKind::ALL.len());
        for (report, kind) in reports.iter().zip(PolicyKind::ALL) {
            assert_eq!(report.policy, kind.name());
            assert_eq!(report.timeline.len(), 4);
            assert!(!report.timeline.iter().any(TimelineEntry::is_idle));
        }
    }

    #[test]
    fn test_capacity_from_config() {
        let config = SimConfig::default().with_capacity(1);
        let reports = run_configured(&config, &descriptors(&[(0, 1, 0), (0, 1, 0)])).unwrap();
        assert_eq!(reports[0].stats.processes.len(), 1);
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let config = SimConfig::default().with_quantum(0);
        assert!(run_configured(&config, &[]).is_err());
    }
}
