//! Run-time policy selection

use crate::{Fcfs, Priority, RoundRobin, ShortestJobFirst, ShortestRemainingTime};
use kernel_api::Scheduler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;

/// Default round-robin quantum, in ticks
pub const DEFAULT_QUANTUM: u64 = 2;

/// Policy names accepted on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    PriorityPreemptive,
    RoundRobin,
}

impl PolicyKind {
    /// Every policy, in report order
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::Priority,
        PolicyKind::PriorityPreemptive,
        PolicyKind::RoundRobin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::Sjf => "sjf",
            PolicyKind::Srtf => "srtf",
            PolicyKind::Priority => "priority",
            PolicyKind::PriorityPreemptive => "priority-preemptive",
            PolicyKind::RoundRobin => "round-robin",
        }
    }

    /// Returns true if the policy may ever ask for preemption
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            PolicyKind::Srtf | PolicyKind::PriorityPreemptive | PolicyKind::RoundRobin
        )
    }

    /// Builds a fresh scheduler; `quantum` is only used by round robin
    pub fn build(&self, quantum: NonZeroU64) -> Box<dyn Scheduler> {
        match self {
            PolicyKind::Fcfs => Box::new(Fcfs::new()),
            PolicyKind::Sjf => Box::new(ShortestJobFirst::new()),
            PolicyKind::Srtf => Box::new(ShortestRemainingTime::new()),
            PolicyKind::Priority => Box::new(Priority::new()),
            PolicyKind::PriorityPreemptive => Box::new(Priority::preemptive()),
            PolicyKind::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}
