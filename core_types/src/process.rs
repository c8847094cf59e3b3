//! Process control blocks and the process state machine

use crate::{ProcessId, Tick};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a simulated process
///
/// ```text
/// New ──► Ready ◄──► Executing ──► Finished
///  └───────────────────────────────►┘   (duration <= 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessState {
    /// Admitted, not yet handed to the scheduler
    New,
    /// Waiting in the scheduler's pool
    Ready,
    /// Occupying the CPU
    Executing,
    /// Done; terminal
    Finished,
}

impl ProcessState {
    /// Every state, in lifecycle order
    pub const ALL: [ProcessState; 4] = [
        ProcessState::New,
        ProcessState::Ready,
        ProcessState::Executing,
        ProcessState::Finished,
    ];

    /// Checks if the state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessState::Finished)
    }

    /// Checks whether moving from `self` to `next` is a legal transition
    ///
    /// The process table does not enforce this; the engine is expected to
    /// only request legal transitions.
    pub fn can_transition_to(&self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, next),
            (New, Ready)
                | (New, Finished)
                | (Ready, Executing)
                | (Executing, Ready)
                | (Executing, Finished)
        )
    }

    /// Returns a short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessState::New => "new",
            ProcessState::Ready => "ready",
            ProcessState::Executing => "executing",
            ProcessState::Finished => "finished",
        }
    }
}

/// Process control block
///
/// Owned by the process table. Everyone else only ever sees `&Pcb`, so the
/// mutators below are reachable through the table alone. The process's
/// saved context lives in the table slot with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcb {
    id: ProcessId,
    creation_time: Tick,
    duration: Tick,
    priority: i32,
    start_time: Tick,
    end_time: Option<Tick>,
    executing_time: Tick,
    state: ProcessState,
}

impl Pcb {
    /// Creates a PCB in state `New`
    pub fn new(id: ProcessId, creation_time: Tick, duration: Tick, priority: i32) -> Self {
        Self {
            id,
            creation_time,
            duration,
            priority,
            start_time: creation_time,
            end_time: None,
            executing_time: 0,
            state: ProcessState::New,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn creation_time(&self) -> Tick {
        self.creation_time
    }

    pub fn duration(&self) -> Tick {
        self.duration
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Tick at which the process became known to the system
    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    /// Tick at which the process finished, if it has
    pub fn end_time(&self) -> Option<Tick> {
        self.end_time
    }

    /// Ticks the process has actually spent on the CPU
    pub fn executing_time(&self) -> Tick {
        self.executing_time
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// True once the required duration has been served
    pub fn finished(&self) -> bool {
        self.executing_time >= self.duration
    }

    /// Ticks still needed to finish
    pub fn remaining(&self) -> Tick {
        (self.duration - self.executing_time).max(0)
    }

    /// `end_time - start_time`, once finished
    pub fn turnaround(&self) -> Option<Tick> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// `turnaround - duration`, once finished
    ///
    /// A negative duration yields a wait longer than the turnaround.
    pub fn wait_time(&self) -> Option<Tick> {
        self.turnaround().map(|t| t - self.duration)
    }

    /// Sets the state field
    ///
    /// Only the process table calls this, as part of a state-index update.
    pub fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    /// Accounts one tick of execution
    ///
    /// Returns false (and changes nothing) if the process has already
    /// served its duration.
    pub fn record_tick(&mut self) -> bool {
        if self.finished() {
            return false;
        }
        self.executing_time += 1;
        true
    }

    /// Records the finish tick
    ///
    /// `end_time` is set at most once; later calls return false.
    pub fn mark_end(&mut self, at: Tick) -> bool {
        if self.end_time.is_some() {
            return false;
        }
        self.end_time = Some(at);
        true
    }
}
