use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A point in virtual time, measured in simulated minutes.
///
/// Time is driven entirely by the event clock and advances in jumps; it has
/// no relation to wall-clock time. Values are non-negative and the engine
/// only ever moves the clock forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimTime(f64);

impl SimTime {
    /// The start of every simulation run.
    pub const ZERO: SimTime = SimTime(0.0);

    /// Create a time value from raw minutes.
    pub fn new(minutes: f64) -> Self {
        SimTime(minutes)
    }

    /// Raw minute value.
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// The time `delta` minutes after `self`.
    pub fn plus(self, delta: f64) -> SimTime {
        SimTime(self.0 + delta)
    }

    /// Minutes elapsed since `earlier`.
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp gives the total order PartialOrd on f64 lacks; times are
        // never NaN in practice, so this agrees with the numeric order.
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Identifier for a logical process registered with the scheduler.
///
/// Assigned sequentially in registration order, which keeps event ordering
/// (and therefore whole runs) reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub(crate) u64);

impl ProcessId {
    /// Get the raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "proc-{}", self.0)
    }
}

/// Display identifier for a patient, numbered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub(crate) u64);

impl PatientId {
    pub fn new(n: u64) -> Self {
        PatientId(n)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Severity of an arriving patient's condition.
///
/// Severity only influences the consultation-time distribution; it never
/// affects queueing order (the doctor pool is strictly FIFO).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Scale factor applied to the base consultation time for this severity.
    pub fn consultation_multiplier(self) -> f64 {
        match self {
            Severity::Low => 0.7,
            Severity::Medium => 1.0,
            Severity::High => 1.5,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        write!(f, "{}", label)
    }
}
