//! # Reporting
//!
//! Read-only rendering of a finished run.

use core_types::{RunId, Tick};
use kernel_api::{Context, Scheduler};
use serde::{Deserialize, Serialize};
use sim_kernel::{ScheduleEvent, SimulationStats, Simulator, Timeline};

/// Everything a report needs from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub policy: String,
    pub run_id: RunId,
    pub timeline: Timeline,
    pub stats: SimulationStats,
    pub events: Vec<ScheduleEvent>,
}

impl RunReport {
    pub fn from_simulator<S: Scheduler, C: Context>(sim: &Simulator<S, C>) -> Self {
        Self {
            policy: sim.scheduler().name().to_string(),
            run_id: sim.run_id(),
            timeline: sim.timeline().clone(),
            stats: sim.stats(),
            events: sim.audit_log().to_vec(),
        }
    }
}

/// Renders the per-tick chart
///
/// One column per admitted process (labelled by input position). A cell
/// is `##` while the process holds the CPU and `--` while it is admitted
/// but waiting.
pub fn render_chart(report: &RunReport) -> String {
    let mut out = String::from("tempo ");
    for process in &report.stats.processes {
        out.push_str(&format!("P{} ", process.input_index));
    }
    out.push('\n');

    for (tick, entry) in report.timeline.iter().enumerate() {
        let now = tick as Tick;
        out.push_str(&format!("{:<6}", format!("{}-{}", tick, tick + 1)));
        for process in &report.stats.processes {
            let waiting =
                process.start_time <= now && process.end_time.map_or(true, |end| end > now);
            let cell = if entry.process() == Some(process.process) {
                "## "
            } else if waiting {
                "-- "
            } else {
                "   "
            };
            out.push_str(cell);
        }
        out.push('\n');
    }
    out
}

/// Renders per-process turnaround and the run totals
pub fn render_stats(report: &RunReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();
    for process in &stats.processes {
        if let Some(turnaround) = process.turnaround {
            out.push_str(&format!(
                "Process {} - Turnaround time: {}\n",
                process.input_index, turnaround
            ));
        }
    }
    out.push_str(&format!(
        "Average turnaround time: {:.2}\n",
        stats.average_turnaround
    ));
    out.push_str(&format!("Average wait time: {:.2}\n", stats.average_wait));
    out.push_str(&format!("Context switches: {}\n", stats.context_switches));
    out.push_str(&format!("Total execution time: {}\n", stats.total_ticks));
    out
}

/// Chart and statistics under a policy heading
pub fn render_text(report: &RunReport) -> String {
    format!(
        "== {} ==\n{}\n{}",
        report.policy,
        render_chart(report),
        render_stats(report)
    )
}
