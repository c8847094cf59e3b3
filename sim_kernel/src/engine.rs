//! Simulation engine
//!
//! Drives the logical clock one tick at a time. Each tick runs, in order:
//!
//! 1. **Admission**: descriptors whose creation time has come are admitted
//! 2. **Promotion**: `New` processes become `Ready` and go to the scheduler
//! 3. **Check**: the active process finishes or may be preempted
//! 4. **Switch**: if needed, the scheduler picks the next process
//! 5. **Advance**: the clock moves forward one tick
//! 6. **Idle check**: with nothing active, either stop or record idle
//! 7. **Execute**: the active process is charged one tick

use crate::audit::ScheduleEvent;
use crate::clock::SimClock;
use crate::stats::SimulationStats;
use crate::timeline::Timeline;
use core_types::{Pcb, ProcessDescriptor, ProcessId, ProcessState, RunId, Tick};
use kernel_api::{Context, Scheduler, SimError};
use process_table::{ProcessTable, MAX_PROCESS_COUNT};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info, trace, warn};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Maximum number of processes the table admits per run
    pub capacity: usize,
}

impl SimulatorConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_PROCESS_COUNT,
        }
    }
}

/// Tick-driven CPU scheduling simulator
///
/// Generic over the scheduling policy `S` and the per-process context `C`.
/// A simulator can be run any number of times; every run starts from a
/// clean slate.
pub struct Simulator<S, C> {
    config: SimulatorConfig,
    scheduler: S,
    table: ProcessTable<C>,
    clock: SimClock,
    active: Option<ProcessId>,
    active_context: C,
    timeline: Timeline,
    context_switches: u64,
    /// Input index -> admitted process
    input_to_pid: BTreeMap<usize, ProcessId>,
    audit_log: Vec<ScheduleEvent>,
    run_id: RunId,
}

impl<S: Scheduler, C: Context> Simulator<S, C> {
    /// Creates a simulator with the default configuration
    pub fn new(scheduler: S) -> Self {
        Self::with_config(scheduler, SimulatorConfig::default())
    }

    pub fn with_config(scheduler: S, config: SimulatorConfig) -> Self {
        Self {
            table: ProcessTable::with_capacity(config.capacity),
            config,
            scheduler,
            clock: SimClock::new(),
            active: None,
            active_context: C::default(),
            timeline: Timeline::new(),
            context_switches: 0,
            input_to_pid: BTreeMap::new(),
            audit_log: Vec::new(),
            run_id: RunId::new(),
        }
    }

    /// Replays `descriptors` until every admitted process has finished
    ///
    /// Descriptors are admitted in `(creation_time, input_index)` order.
    /// The scheduler is cleared first, so a simulator whose previous run
    /// returned an error can be reused.
    pub fn simulate(&mut self, descriptors: &[ProcessDescriptor]) -> Result<(), SimError> {
        self.reset();

        let mut schedule = descriptors.to_vec();
        schedule.sort_by_key(ProcessDescriptor::admission_key);
        let mut creation_queue: VecDeque<ProcessDescriptor> = schedule.into();

        info!(
            run = %self.run_id,
            policy = self.scheduler.name(),
            processes = descriptors.len(),
            "Simulation started"
        );

        loop {
            let now = self.clock.now();
            self.admit_arrivals(&mut creation_queue, now)?;
            self.promote_new()?;

            let mut should_switch = false;
            if let Some(active) = self.active {
                let pcb = self.table.get_process(active)?;
                if pcb.finished() {
                    self.table.finish(active, now)?;
                    self.audit_log.push(ScheduleEvent::Finished {
                        process: active,
                        timestamp_ticks: now,
                    });
                    debug!(process = %active, at = now, "Process finished");
                    should_switch = true;
                } else if self.scheduler.test(pcb) {
                    self.table.change_state(active, ProcessState::Ready)?;
                    self.scheduler.insert(self.table.get_process(active)?);
                    self.audit_log.push(ScheduleEvent::Preempted {
                        process: active,
                        timestamp_ticks: now,
                    });
                    debug!(process = %active, at = now, "Process preempted");
                    should_switch = true;
                }
            }

            if should_switch || self.active.is_none() {
                let next = self.scheduler.pick();
                self.switch_context(next, now)?;
                if let Some(active) = self.active {
                    self.table.change_state(active, ProcessState::Executing)?;
                }
            }

            self.clock.advance();

            let Some(active) = self.active else {
                if creation_queue.is_empty() {
                    break;
                }
                self.timeline.push_idle();
                self.audit_log.push(ScheduleEvent::Idle {
                    timestamp_ticks: now,
                });
                continue;
            };

            self.table.account_tick(active)?;
            self.active_context.tick(active);
            self.timeline.push_run(active);
        }

        self.verify_termination()?;

        info!(
            run = %self.run_id,
            policy = self.scheduler.name(),
            ticks = self.timeline.len(),
            context_switches = self.context_switches,
            "Simulation finished"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.scheduler.clear();
        self.table.clear();
        self.clock.reset();
        self.active = None;
        self.active_context = C::default();
        self.timeline.clear();
        self.context_switches = 0;
        self.input_to_pid.clear();
        self.audit_log.clear();
        self.run_id = RunId::new();
    }

    fn admit_arrivals(
        &mut self,
        creation_queue: &mut VecDeque<ProcessDescriptor>,
        now: Tick,
    ) -> Result<(), SimError> {
        while let Some(desc) = creation_queue.front().copied() {
            if desc.creation_time > now {
                break;
            }
            creation_queue.pop_front();

            let id = match self
                .table
                .create_process(desc.creation_time, desc.duration, desc.priority)
            {
                Ok(id) => id,
                Err(err) if err.is_recoverable() => {
                    warn!(input_index = desc.input_index, at = now, error = %err, "Process not admitted");
                    self.audit_log.push(ScheduleEvent::AdmissionRejected {
                        input_index: desc.input_index,
                        timestamp_ticks: now,
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            self.input_to_pid.insert(desc.input_index, id);
            self.audit_log.push(ScheduleEvent::Admitted {
                process: id,
                input_index: desc.input_index,
                timestamp_ticks: now,
            });
            debug!(process = %id, input_index = desc.input_index, at = now, "Process admitted");

            if self.table.get_process(id)?.finished() {
                self.table.finish(id, now)?;
                self.audit_log.push(ScheduleEvent::FinishedOnArrival {
                    process: id,
                    timestamp_ticks: now,
                });
                debug!(process = %id, at = now, "Process finished on arrival");
            }
        }
        Ok(())
    }

    fn promote_new(&mut self) -> Result<(), SimError> {
        let fresh = self.table.get_by_state(ProcessState::New).to_vec();
        for id in fresh {
            self.table.change_state(id, ProcessState::Ready)?;
            self.scheduler.insert(self.table.get_process(id)?);
        }
        Ok(())
    }

    /// Saves the outgoing context and loads the incoming one
    ///
    /// Only loading a process counts as a context switch.
    fn switch_context(&mut self, next: Option<ProcessId>, now: Tick) -> Result<(), SimError> {
        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(table = %self.context_table(), "Before context switch");
        }

        let previous = self.active;
        if let Some(outgoing) = previous {
            let context = std::mem::take(&mut self.active_context);
            self.table.save_context(outgoing, context)?;
        }
        if let Some(incoming) = next {
            self.active_context = self.table.load_context(incoming)?;
            self.context_switches += 1;
            self.audit_log.push(ScheduleEvent::Dispatched {
                process: incoming,
                previous,
                timestamp_ticks: now,
            });
            debug!(process = %incoming, at = now, "Context switch");
        }
        self.active = next;
        Ok(())
    }

    fn verify_termination(&self) -> Result<(), SimError> {
        let unfinished = self
            .table
            .all_processes()
            .iter()
            .filter(|pcb| !pcb.state().is_terminal())
            .count();
        if unfinished > 0 {
            warn!(run = %self.run_id, unfinished, "Simulation stopped with unfinished processes");
            return Err(SimError::Stranded { unfinished });
        }
        Ok(())
    }

    /// One entry per simulated tick
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Number of times a process was loaded onto the CPU
    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    pub fn table(&self) -> &ProcessTable<C> {
        &self.table
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// The process admitted for input record `index`, if it was admitted
    pub fn process_for_input(&self, index: usize) -> Option<&Pcb> {
        self.input_to_pid
            .get(&index)
            .and_then(|&id| self.table.get_process(id).ok())
    }

    /// Input index -> admitted process id, for every admitted record
    pub fn input_mapping(&self) -> &BTreeMap<usize, ProcessId> {
        &self.input_to_pid
    }

    pub fn audit_log(&self) -> &[ScheduleEvent] {
        &self.audit_log
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Current logical time
    pub fn clock(&self) -> Tick {
        self.clock.now()
    }

    /// Currently active process
    pub fn active(&self) -> Option<ProcessId> {
        self.active
    }

    /// Statistics over the last run
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::collect(
            &self.input_to_pid,
            |id| self.table.get_process(id).ok(),
            &self.timeline,
            self.context_switches,
        )
    }

    /// Dump of the active context and every saved snapshot
    pub fn context_table(&self) -> String {
        let mut out = format!("Active: {}\n", self.active_context.show());
        for pcb in self.table.all_processes() {
            if let Ok(context) = self.table.context(pcb.id()) {
                out.push_str(&format!("{}: {}\n", pcb.id(), context.show()));
            }
        }
        out
    }
}
