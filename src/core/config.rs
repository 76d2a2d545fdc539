use super::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Configuration for one simulation run.
///
/// Defaults mirror the reference hospital scenario: 7 doctors, 12-minute
/// base consultations, arrivals roughly every 2 minutes, a 120-minute day,
/// and 3 patients already waiting when the doors open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of identical doctors in the pool.
    pub doctor_count: u32,
    /// Mean consultation length in minutes before severity scaling.
    pub base_consultation_time: f64,
    /// Mean minutes between patient arrivals.
    pub arrival_interval_mean: f64,
    /// Virtual minutes to simulate.
    pub simulation_horizon: f64,
    /// Patients pre-loaded at time zero.
    pub initial_backlog_count: u32,
    /// Seed for the default random source.
    pub random_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            doctor_count: 7,
            base_consultation_time: 12.0,
            arrival_interval_mean: 2.0,
            simulation_horizon: 120.0,
            initial_backlog_count: 3,
            random_seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doctor_count(mut self, count: u32) -> Self {
        self.doctor_count = count;
        self
    }

    pub fn with_base_consultation_time(mut self, minutes: f64) -> Self {
        self.base_consultation_time = minutes;
        self
    }

    pub fn with_arrival_interval_mean(mut self, minutes: f64) -> Self {
        self.arrival_interval_mean = minutes;
        self
    }

    pub fn with_simulation_horizon(mut self, minutes: f64) -> Self {
        self.simulation_horizon = minutes;
        self
    }

    pub fn with_initial_backlog(mut self, count: u32) -> Self {
        self.initial_backlog_count = count;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Reject configurations the model cannot run; checked before the run
    /// starts so a bad config never produces a partial simulation.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.doctor_count == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "doctor_count must be at least 1".to_string(),
            ));
        }
        if !(self.base_consultation_time > 0.0) || !self.base_consultation_time.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "base_consultation_time must be a positive number of minutes, got {}",
                self.base_consultation_time
            )));
        }
        if !(self.arrival_interval_mean > 0.0) || !self.arrival_interval_mean.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "arrival_interval_mean must be a positive number of minutes, got {}",
                self.arrival_interval_mean
            )));
        }
        if !(self.simulation_horizon > 0.0) || !self.simulation_horizon.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!(
                "simulation_horizon must be a positive number of minutes, got {}",
                self.simulation_horizon
            )));
        }
        Ok(())
    }
}
