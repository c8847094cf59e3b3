//! Per-tick execution timeline

use core_types::ProcessId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupied the CPU during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimelineEntry {
    /// No process was active
    Idle,
    /// The given process executed
    Run(ProcessId),
}

impl TimelineEntry {
    pub fn process(&self) -> Option<ProcessId> {
        match self {
            TimelineEntry::Idle => None,
            TimelineEntry::Run(id) => Some(*id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TimelineEntry::Idle)
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineEntry::Idle => write!(f, "--"),
            TimelineEntry::Run(id) => write!(f, "{}", id),
        }
    }
}

/// One entry per simulated tick, in tick order
///
/// Entry `t` describes the interval `[t, t + 1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_idle(&mut self) {
        self.entries.push(TimelineEntry::Idle);
    }

    pub fn push_run(&mut self, process: ProcessId) {
        self.entries.push(TimelineEntry::Run(process));
    }

    /// Total simulated ticks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, tick: usize) -> Option<TimelineEntry> {
        self.entries.get(tick).copied()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// Number of ticks no process was active
    pub fn idle_ticks(&self) -> usize {
        self.entries.iter().filter(|e| e.is_idle()).count()
    }

    /// Number of ticks some process executed
    pub fn busy_ticks(&self) -> usize {
        self.len() - self.idle_ticks()
    }

    /// Number of ticks `process` executed
    pub fn ticks_of(&self, process: ProcessId) -> usize {
        self.entries
            .iter()
            .filter(|e| e.process() == Some(process))
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
