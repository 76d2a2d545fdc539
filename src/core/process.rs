use super::error::SimulationError;
use super::event_clock::{EventClock, Wakeup};
use super::metrics::MetricsCollector;
use super::random::RandomSource;
use super::resource_pool::{ResourcePool, UnitHandle};
use super::types::{ProcessId, SimTime};
use std::collections::HashMap;

/// The suspension point a process reaches when it yields.
#[derive(Debug)]
pub enum Step {
    /// Suspend for a virtual duration in minutes; resumed with
    /// `Wakeup::Timer`.
    Sleep(f64),
    /// Suspend until the resource pool grants a unit; resumed with
    /// `Wakeup::UnitGranted`.
    AwaitUnit,
    /// The process is finished and is dropped by the scheduler.
    Complete,
}

/// A resumable unit of simulated behavior.
///
/// A process runs uninterrupted from one suspension point to the next —
/// there is no preemption and never two processes executing at once. Each
/// call to `resume` advances the process's own state machine and returns
/// where it suspends next.
pub trait Process {
    fn resume(
        &mut self,
        ctx: &mut ProcessContext<'_>,
        wakeup: Wakeup,
    ) -> Result<Step, SimulationError>;
}

/// What a running process may touch while it holds control.
///
/// Mutations of shared state (pool occupancy, metrics, the event queue)
/// happen only through this context between suspension points, which is what
/// makes the single-threaded cooperative model race-free. Spawns are
/// buffered and registered after the process yields.
pub struct ProcessContext<'a> {
    process: ProcessId,
    now: SimTime,
    clock: &'a mut EventClock,
    pool: &'a mut ResourcePool,
    metrics: &'a mut MetricsCollector,
    random: &'a mut dyn RandomSource,
    spawned: Vec<Box<dyn Process>>,
}

impl<'a> ProcessContext<'a> {
    pub(crate) fn new(
        process: ProcessId,
        now: SimTime,
        clock: &'a mut EventClock,
        pool: &'a mut ResourcePool,
        metrics: &'a mut MetricsCollector,
        random: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            process,
            now,
            clock,
            pool,
            metrics,
            random,
            spawned: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Id of the process currently holding control.
    pub fn process_id(&self) -> ProcessId {
        self.process
    }

    /// The run's random source.
    pub fn random(&mut self) -> &mut dyn RandomSource {
        &mut *self.random
    }

    /// The run's metrics accumulator.
    pub fn metrics(&mut self) -> &mut MetricsCollector {
        &mut *self.metrics
    }

    /// Queue a new process to start at the current instant. It is
    /// registered once the running process yields, and its `Start` wakeup
    /// dispatches after events already scheduled for this instant.
    pub fn spawn(&mut self, process: Box<dyn Process>) {
        self.spawned.push(process);
    }

    /// Return a granted unit to the pool.
    ///
    /// If the queue is non-empty the unit transfers to the longest waiter
    /// and that process is woken at the current instant — no virtual time
    /// elapses between release and handoff.
    pub fn release_unit(&mut self, handle: UnitHandle) -> Result<(), SimulationError> {
        if let Some(handoff) = self.pool.release(handle)? {
            self.clock.schedule(
                self.now,
                handoff.request.process,
                Wakeup::UnitGranted(handoff.handle),
            )?;
        }
        Ok(())
    }

    pub(crate) fn take_spawned(self) -> Vec<Box<dyn Process>> {
        self.spawned
    }
}

/// Registry of live processes.
///
/// Ids are handed out sequentially; a process is removed for the duration of
/// its `resume` call and re-inserted unless it completed, so at most one
/// process is ever outside the registry.
pub struct ProcessScheduler {
    processes: HashMap<ProcessId, Box<dyn Process>>,
    next_id: u64,
}

impl ProcessScheduler {
    pub fn new() -> Self {
        Self {
            processes: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a process and return its id.
    pub fn register(&mut self, process: Box<dyn Process>) -> ProcessId {
        let id = ProcessId(self.next_id);
        self.next_id += 1;
        self.processes.insert(id, process);
        id
    }

    /// Take a process out of the registry for resumption.
    pub fn take(&mut self, id: ProcessId) -> Option<Box<dyn Process>> {
        self.processes.remove(&id)
    }

    /// Put a suspended process back after it yields.
    pub fn restore(&mut self, id: ProcessId, process: Box<dyn Process>) {
        self.processes.insert(id, process);
    }

    /// Number of live processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Default for ProcessScheduler {
    fn default() -> Self {
        Self::new()
    }
}
