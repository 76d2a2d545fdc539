use crate::core::error::SimulationError;
use crate::core::event_clock::Wakeup;
use crate::core::process::{Process, ProcessContext, Step};
use crate::core::resource_pool::UnitHandle;
use crate::core::types::{PatientId, Severity, SimTime};
use log::info;

/// Floor for sampled consultation durations, in minutes.
///
/// A normal draw can come out negative or implausibly small; model policy
/// clamps every consultation to at least 5 minutes. For low-severity
/// patients the nominal mean can sit below this floor, which skews their
/// distribution upward.
pub const MIN_CONSULTATION_MINUTES: f64 = 5.0;

/// Fixed spread of the consultation-time distribution, in minutes.
pub const CONSULTATION_STD_DEV: f64 = 4.0;

enum JourneyState {
    Created,
    Waiting {
        arrival: SimTime,
        severity: Severity,
    },
    InConsultation {
        wait_time: f64,
        duration: f64,
        handle: UnitHandle,
    },
    Discharged,
}

/// One patient's path through the facility:
/// arrive → wait for a doctor → consultation → discharge.
///
/// Wait time is measured from arrival to the instant a doctor is granted,
/// so a patient who never queues records exactly zero. On discharge the
/// doctor is released first, then metrics are recorded, then the process
/// terminates. A journey still in consultation when the horizon passes
/// simply never resumes and leaves no metrics.
pub struct PatientJourney {
    id: PatientId,
    base_consultation_time: f64,
    state: JourneyState,
}

impl PatientJourney {
    pub fn new(id: PatientId, base_consultation_time: f64) -> Self {
        Self {
            id,
            base_consultation_time,
            state: JourneyState::Created,
        }
    }
}

impl Process for PatientJourney {
    fn resume(
        &mut self,
        ctx: &mut ProcessContext<'_>,
        wakeup: Wakeup,
    ) -> Result<Step, SimulationError> {
        let state = std::mem::replace(&mut self.state, JourneyState::Discharged);
        match (state, wakeup) {
            (JourneyState::Created, Wakeup::Start) => {
                let severity = ctx.random().next_severity();
                let arrival = ctx.now();
                info!(
                    "Patient {} arrives at {} min [severity: {}]",
                    self.id, arrival, severity
                );
                self.state = JourneyState::Waiting { arrival, severity };
                Ok(Step::AwaitUnit)
            }
            (JourneyState::Waiting { arrival, severity }, Wakeup::UnitGranted(handle)) => {
                let wait_time = ctx.now().since(arrival);
                let mean = self.base_consultation_time * severity.consultation_multiplier();
                let duration = ctx
                    .random()
                    .next_service_duration(mean, CONSULTATION_STD_DEV)
                    .max(MIN_CONSULTATION_MINUTES);
                info!(
                    "Patient {} sees doctor at {} min (waited {:.1} min)",
                    self.id,
                    ctx.now(),
                    wait_time
                );
                self.state = JourneyState::InConsultation {
                    wait_time,
                    duration,
                    handle,
                };
                Ok(Step::Sleep(duration))
            }
            (
                JourneyState::InConsultation {
                    wait_time,
                    duration,
                    handle,
                    ..
                },
                Wakeup::Timer,
            ) => {
                // Release before recording: the doctor must be available to
                // the next waiter in this same instant.
                ctx.release_unit(handle)?;
                ctx.metrics().record_discharge(wait_time);
                info!(
                    "Patient {} discharged at {} min (consultation {:.1} min)",
                    self.id,
                    ctx.now(),
                    duration
                );
                Ok(Step::Complete)
            }
            _ => Err(SimulationError::UnexpectedWakeup(ctx.process_id())),
        }
    }
}
