//! Scheduling audit trail
//!
//! The engine records every scheduling decision it carries out. The log is
//! deterministic: two runs over the same input with the same policy
//! produce identical logs.

use core_types::{ProcessId, Tick};
use serde::{Deserialize, Serialize};

/// Scheduling event for the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleEvent {
    /// A descriptor was admitted into the process table
    Admitted {
        process: ProcessId,
        input_index: usize,
        timestamp_ticks: Tick,
    },
    /// The table was full; the descriptor was dropped
    AdmissionRejected {
        input_index: usize,
        timestamp_ticks: Tick,
    },
    /// Admitted with nothing to run; went straight to Finished
    FinishedOnArrival {
        process: ProcessId,
        timestamp_ticks: Tick,
    },
    /// A process was loaded onto the CPU
    Dispatched {
        process: ProcessId,
        previous: Option<ProcessId>,
        timestamp_ticks: Tick,
    },
    /// The active process was returned to the scheduler
    Preempted {
        process: ProcessId,
        timestamp_ticks: Tick,
    },
    /// The active process served its full duration
    Finished {
        process: ProcessId,
        timestamp_ticks: Tick,
    },
    /// No process occupied the CPU during this tick
    Idle { timestamp_ticks: Tick },
}

impl ScheduleEvent {
    /// Tick at which the event happened
    pub fn timestamp_ticks(&self) -> Tick {
        match self {
            ScheduleEvent::Admitted {
                timestamp_ticks, ..
            }
            | ScheduleEvent::AdmissionRejected {
                timestamp_ticks, ..
            }
            | ScheduleEvent::FinishedOnArrival {
                timestamp_ticks, ..
            }
            | ScheduleEvent::Dispatched {
                timestamp_ticks, ..
            }
            | ScheduleEvent::Preempted {
                timestamp_ticks, ..
            }
            | ScheduleEvent::Finished {
                timestamp_ticks, ..
            }
            | ScheduleEvent::Idle { timestamp_ticks } => *timestamp_ticks,
        }
    }

    /// Process the event is about, if any
    pub fn process(&self) -> Option<ProcessId> {
        match self {
            ScheduleEvent::Admitted { process, .. }
            | ScheduleEvent::FinishedOnArrival { process, .. }
            | ScheduleEvent::Dispatched { process, .. }
            | ScheduleEvent::Preempted { process, .. }
            | ScheduleEvent::Finished { process, .. } => Some(*process),
            ScheduleEvent::AdmissionRejected { .. } | ScheduleEvent::Idle { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp() {
        let event = ScheduleEvent::Dispatched {
            process: ProcessId::new(1),
            previous: None,
            timestamp_ticks: 7,
        };
        assert_eq!(event.timestamp_ticks(), 7);
        assert_eq!(ScheduleEvent::Idle { timestamp_ticks: 3 }.timestamp_ticks(), 3);
    }

    #[test]
    fn test_process() {
        let event = ScheduleEvent::Preempted {
            process: ProcessId::new(2),
            timestamp_ticks: 0,
        };
        assert_eq!(event.process(), Some(ProcessId::new(2)));

        let event = ScheduleEvent::AdmissionRejected {
            input_index: 4,
            timestamp_ticks: 0,
        };
        assert_eq!(event.process(), None);
    }

    #[test]
    fn test_event_variants_are_stable() {
        // Variant names are part of the JSON report
        let json = serde_json::to_string(&ScheduleEvent::Idle { timestamp_ticks: 1 }).unwrap();
        assert_eq!(json, r#"{"Idle":{"timestamp_ticks":1}}"#);
    }
}
