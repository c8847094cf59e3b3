//! Statistics derived from finished process records

use crate::Timeline;
use core_types::{Pcb, ProcessId, Tick};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timing summary of one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub input_index: usize,
    pub process: ProcessId,
    pub priority: i32,
    pub start_time: Tick,
    pub end_time: Option<Tick>,
    pub duration: Tick,
    pub executing_time: Tick,
    /// `end_time - start_time`
    pub turnaround: Option<Tick>,
    /// Turnaround minus requested duration
    pub wait_time: Option<Tick>,
}

impl ProcessStats {
    fn from_pcb(input_index: usize, pcb: &Pcb) -> Self {
        Self {
            input_index,
            process: pcb.id(),
            priority: pcb.priority(),
            start_time: pcb.start_time(),
            end_time: pcb.end_time(),
            duration: pcb.duration(),
            executing_time: pcb.executing_time(),
            turnaround: pcb.turnaround(),
            wait_time: pcb.wait_time(),
        }
    }
}

/// Aggregate statistics for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// One entry per admitted process, in input order
    pub processes: Vec<ProcessStats>,
    pub average_turnaround: f64,
    pub average_wait: f64,
    pub context_switches: u64,
    pub total_ticks: usize,
    pub idle_ticks: usize,
}

impl SimulationStats {
    /// Derives statistics from the final process records
    ///
    /// `inputs` maps input index to the admitted process; `lookup` resolves
    /// a process id to its record. Averages over an empty set are 0.
    pub fn collect<'a, F>(
        inputs: &BTreeMap<usize, ProcessId>,
        lookup: F,
        timeline: &Timeline,
        context_switches: u64,
    ) -> Self
    where
        F: Fn(ProcessId) -> Option<&'a Pcb>,
    {
        let processes: Vec<ProcessStats> = inputs
            .iter()
            .filter_map(|(&index, &id)| lookup(id).map(|pcb| ProcessStats::from_pcb(index, pcb)))
            .collect();

        let average_turnaround = average(processes.iter().filter_map(|p| p.turnaround));
        let average_wait = average(processes.iter().filter_map(|p| p.wait_time));

        Self {
            processes,
            average_turnaround,
            average_wait,
            context_switches,
            total_ticks: timeline.len(),
            idle_ticks: timeline.idle_ticks(),
        }
    }

    /// Statistics for the process read from input position `index`
    pub fn for_input(&self, index: usize) -> Option<&ProcessStats> {
        self.processes.iter().find(|p| p.input_index == index)
    }
}

fn average(values: impl Iterator<Item = Tick>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: usize, start: Tick, duration: Tick, end: Tick) -> Pcb {
        let mut pcb = Pcb::new(ProcessId::new(id), start, duration, 0);
        for _ in 0..duration {
            pcb.record_tick();
        }
        pcb.mark_end(end);
        pcb
    }

    #[test]
    fn test_collect_two_process_run() {
        let pcbs = [finished(0, 0, 3, 3), finished(1, 1, 2, 5)];
        let inputs: BTreeMap<usize, ProcessId> =
            [(0, ProcessId::new(0)), (1, ProcessId::new(1))].into_iter().collect();
        let mut timeline = Timeline::new();
        for _ in 0..3 {
            timeline.push_run(ProcessId::new(0));
        }
        for _ in 0..2 {
            timeline.push_run(ProcessId::new(1));
        }

        let stats = SimulationStats::collect(&inputs, |id| pcbs.get(id.slot()), &timeline, 2);

        assert_eq!(stats.processes.len(), 2);
        assert_eq!(stats.for_input(1).unwrap().turnaround, Some(4));
        assert_eq!(stats.for_input(1).unwrap().wait_time, Some(2));
        assert_eq!(stats.average_turnaround, 3.5);
        assert_eq!(stats.average_wait, 1.0);
        assert_eq!(stats.total_ticks, 5);
        assert_eq!(stats.idle_ticks, 0);
        assert_eq!(stats.context_switches, 2);
    }

    #[test]
    fn test_empty_run_averages_are_zero() {
        let stats =
            SimulationStats::collect(&BTreeMap::new(), |_| None, &Timeline::new(), 0);
        assert!(stats.processes.is_empty());
        assert_eq!(stats.average_turnaround, 0.0);
        assert_eq!(stats.average_wait, 0.0);
        assert_eq!(stats.total_ticks, 0);
    }

    #[test]
    fn test_instant_finish_has_zero_turnaround() {
        let mut pcb = Pcb::new(ProcessId::new(0), 5, 0, 0);
        pcb.mark_end(5);
        let pcbs = [pcb];
        let inputs: BTreeMap<usize, ProcessId> = [(0, ProcessId::new(0))].into_iter().collect();

        let stats = SimulationStats::collect(&inputs, |id| pcbs.get(id.slot()), &Timeline::new(), 0);

        assert_eq!(stats.for_input(0).unwrap().turnaround, Some(0));
        assert_eq!(stats.for_input(0).unwrap().wait_time, Some(0));
    }

    #[test]
    fn test_negative_duration_wait_time() {
        let mut instant = Pcb::new(ProcessId::new(0), 0, -3, 0);
        instant.mark_end(0);
        let pcbs = [instant, finished(1, 0, 2, 2)];
        let inputs: BTreeMap<usize, ProcessId> =
            [(0, ProcessId::new(0)), (1, ProcessId::new(1))].into_iter().collect();

        let stats = SimulationStats::collect(&inputs, |id| pcbs.get(id.slot()), &Timeline::new(), 1);

        assert_eq!(stats.for_input(0).unwrap().turnaround, Some(0));
        assert_eq!(stats.for_input(0).unwrap().wait_time, Some(3));
        assert_eq!(stats.for_input(1).unwrap().wait_time, Some(0));
        assert_eq!(stats.average_wait, 1.5);
    }
}
