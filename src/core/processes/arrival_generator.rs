use super::patient_journey::PatientJourney;
use crate::core::error::SimulationError;
use crate::core::event_clock::Wakeup;
use crate::core::process::{Process, ProcessContext, Step};
use crate::core::types::PatientId;
use log::debug;

/// Shortest allowed gap between arrivals, in minutes. A Poisson draw can be
/// zero; the model floors it rather than admitting simultaneous generated
/// arrivals.
pub const MIN_ARRIVAL_INTERVAL: f64 = 1.0;

/// Feeds patients into the system.
///
/// On its first resumption (time zero) it spawns the configured backlog of
/// patients already waiting at the door, then settles into a loop: sleep for
/// a drawn inter-arrival interval, spawn one patient, repeat. It never
/// terminates on its own — the horizon cuts its next timer off.
pub struct ArrivalGenerator {
    arrival_interval_mean: f64,
    base_consultation_time: f64,
    initial_backlog_count: u32,
    next_patient_number: u64,
}

impl ArrivalGenerator {
    pub fn new(
        arrival_interval_mean: f64,
        base_consultation_time: f64,
        initial_backlog_count: u32,
    ) -> Self {
        Self {
            arrival_interval_mean,
            base_consultation_time,
            initial_backlog_count,
            next_patient_number: 1,
        }
    }

    fn spawn_patient(&mut self, ctx: &mut ProcessContext<'_>) {
        let id = PatientId::new(self.next_patient_number);
        self.next_patient_number += 1;
        debug!("t={} spawning patient {}", ctx.now(), id);
        ctx.spawn(Box::new(PatientJourney::new(id, self.base_consultation_time)));
    }

    fn sleep_until_next_arrival(&mut self, ctx: &mut ProcessContext<'_>) -> Step {
        let drawn = ctx.random().next_arrival_interval(self.arrival_interval_mean);
        Step::Sleep(drawn.max(MIN_ARRIVAL_INTERVAL))
    }
}

impl Process for ArrivalGenerator {
    fn resume(
        &mut self,
        ctx: &mut ProcessContext<'_>,
        wakeup: Wakeup,
    ) -> Result<Step, SimulationError> {
        match wakeup {
            Wakeup::Start => {
                for _ in 0..self.initial_backlog_count {
                    self.spawn_patient(ctx);
                }
                Ok(self.sleep_until_next_arrival(ctx))
            }
            Wakeup::Timer => {
                self.spawn_patient(ctx);
                Ok(self.sleep_until_next_arrival(ctx))
            }
            Wakeup::UnitGranted(_) => Err(SimulationError::UnexpectedWakeup(ctx.process_id())),
        }
    }
}
