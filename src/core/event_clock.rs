use super::error::SimulationError;
use super::resource_pool::UnitHandle;
use super::types::{ProcessId, SimTime};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Why a suspended process is being resumed.
#[derive(Debug)]
pub enum Wakeup {
    /// First resumption after the process was spawned.
    Start,
    /// A timed wait elapsed.
    Timer,
    /// The resource pool granted a unit; the handle must be surrendered
    /// back to the pool when the process is done with it.
    UnitGranted(UnitHandle),
}

/// An event pending in the clock's queue.
///
/// Ordering is by scheduled time, with ties broken by `sequence_num`
/// (insertion order), so simultaneous events always dispatch in the order
/// they were scheduled.
#[derive(Debug)]
pub struct ScheduledEvent {
    pub time: SimTime,
    pub sequence_num: u64,
    pub process: ProcessId,
    pub wakeup: Wakeup,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.sequence_num == other.sequence_num
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.sequence_num.cmp(&self.sequence_num))
    }
}

/// Priority queue of pending events plus the current virtual time.
///
/// The clock only moves forward: popping an event advances `now` to that
/// event's time, and scheduling strictly in the past is rejected.
pub struct EventClock {
    event_queue: BinaryHeap<ScheduledEvent>,
    sequence_counter: u64,
    now: SimTime,
}

impl EventClock {
    /// Create a new clock at time zero with an empty queue.
    pub fn new() -> Self {
        Self {
            event_queue: BinaryHeap::new(),
            sequence_counter: 0,
            now: SimTime::ZERO,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule a wakeup for `process` at absolute time `at`.
    ///
    /// Scheduling at exactly the current time is allowed (same-instant
    /// resource handoffs rely on it); scheduling before it is a fatal
    /// engine defect.
    pub fn schedule(
        &mut self,
        at: SimTime,
        process: ProcessId,
        wakeup: Wakeup,
    ) -> Result<(), SimulationError> {
        if at < self.now {
            return Err(SimulationError::InvalidSchedule { at, now: self.now });
        }
        self.event_queue.push(ScheduledEvent {
            time: at,
            sequence_num: self.sequence_counter,
            process,
            wakeup,
        });
        self.sequence_counter += 1;
        Ok(())
    }

    /// Pop the earliest event whose time does not exceed `horizon`,
    /// advancing the clock to that event's time.
    ///
    /// An event at exactly `horizon` is dispatched; anything strictly later
    /// stays in the queue and is simply never delivered.
    pub fn pop_due(&mut self, horizon: SimTime) -> Option<ScheduledEvent> {
        let next_time = self.peek_next_time()?;
        if next_time > horizon {
            return None;
        }
        let event = self.event_queue.pop()?;
        self.now = event.time;
        Some(event)
    }

    /// Time of the next pending event without removing it.
    pub fn peek_next_time(&self) -> Option<SimTime> {
        self.event_queue.peek().map(|event| event.time)
    }

    /// Check if there are any events remaining in the queue.
    pub fn has_events(&self) -> bool {
        !self.event_queue.is_empty()
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}
