use super::types::{ProcessId, SimTime};
use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Configuration problems are reported before a run starts; every other
/// variant indicates an engine defect and aborts the run rather than
/// continuing with corrupted state. Out-of-range samples (negative service
/// durations, zero arrival intervals) are not errors — they are clamped by
/// documented model policy.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// An event was scheduled strictly before the current clock time.
    #[error("cannot schedule event at {at} min: clock is already at {now} min")]
    InvalidSchedule { at: SimTime, now: SimTime },

    /// Rejected configuration; the run never begins.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A unit was released that was never acquired.
    #[error("resource pool release with no units in use")]
    ReleaseUnderflow,

    /// An event targeted a process the scheduler does not know.
    #[error("event dispatched to unknown process {0}")]
    UnknownProcess(ProcessId),

    /// A process was resumed with a wakeup its current state cannot accept.
    #[error("process {0} resumed with an unexpected wakeup")]
    UnexpectedWakeup(ProcessId),
}
