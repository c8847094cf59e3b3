//! Report schema contract tests
//!
//! These tests pin the serialized names consumers of the JSON report
//! depend on.

use schedsim::CONFIG_VERSION;

/// Configuration format version consumers may rely on
pub const EXPECTED_CONFIG_VERSION: u32 = 1;

/// Returns true if the running build still reads the expected version
pub fn config_version_is_stable() -> bool {
    CONFIG_VERSION == EXPECTED_CONFIG_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ProcessId;
    use policy::PolicyKind;
    use serde_json::json;
    use sim_kernel::{ScheduleEvent, Timeline};

    #[test]
    fn test_config_version() {
        assert!(config_version_is_stable());
    }

    #[test]
    fn test_event_wire_names() {
        let p0 = ProcessId::new(0);
        let cases = [
            (
                ScheduleEvent::Admitted {
                    process: p0,
                    input_index: 2,
                    timestamp_ticks: 1,
                },
                json!({ "Admitted": { "process": 0, "input_index": 2, "timestamp_ticks": 1 } }),
            ),
            (
                ScheduleEvent::AdmissionRejected {
                    input_index: 7,
                    timestamp_ticks: 0,
                },
                json!({ "AdmissionRejected": { "input_index": 7, "timestamp_ticks": 0 } }),
            ),
            (
                ScheduleEvent::FinishedOnArrival {
                    process: p0,
                    timestamp_ticks: 5,
                },
                json!({ "FinishedOnArrival": { "process": 0, "timestamp_ticks": 5 } }),
            ),
            (
                ScheduleEvent::Dispatched {
                    process: ProcessId::new(1),
                    previous: None,
                    timestamp_ticks: 3,
                },
                json!({ "Dispatched": { "process": 1, "previous": null, "timestamp_ticks": 3 } }),
            ),
            (
                ScheduleEvent::Preempted {
                    process: p0,
                    timestamp_ticks: 2,
                },
                json!({ "Preempted": { "process": 0, "timestamp_ticks": 2 } }),
            ),
            (
                ScheduleEvent::Finished {
                    process: p0,
                    timestamp_ticks: 3,
                },
                json!({ "Finished": { "process": 0, "timestamp_ticks": 3 } }),
            ),
            (
                ScheduleEvent::Idle { timestamp_ticks: 4 },
                json!({ "Idle": { "timestamp_ticks": 4 } }),
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(serde_json::to_value(&event).unwrap(), expected);
        }
    }

    #[test]
    fn test_timeline_wire_format() {
        let mut timeline = Timeline::new();
        timeline.push_run(ProcessId::new(0));
        timeline.push_idle();
        timeline.push_run(ProcessId::new(2));

        assert_eq!(serde_json::to_value(&timeline).unwrap(), json!([0, null, 2]));
    }

    #[test]
    fn test_policy_wire_names() {
        let names: Vec<String> = PolicyKind::ALL
            .iter()
            .map(|k| serde_json::to_value(k).unwrap().as_str().unwrap_or("").to_string())
            .collect();
        assert_eq!(
            names,
            [
                "fcfs",
                "sjf",
                "srtf",
                "priority",
                "priority-preemptive",
                "round-robin"
            ]
        );
    }
}
