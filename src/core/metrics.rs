use super::config::SimulationConfig;
use serde::{Deserialize, Serialize};

/// Accumulates outcomes of completed patient journeys over one run.
///
/// Owned by the engine and scoped to a single simulation; mutated only when
/// a journey discharges, read only after the run ends. Journeys still in
/// flight at the horizon never report here.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    patients_treated: u64,
    total_wait_time: f64,
    wait_times: Vec<f64>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one discharged patient and the time they waited for a doctor.
    pub fn record_discharge(&mut self, wait_time: f64) {
        self.patients_treated += 1;
        self.total_wait_time += wait_time;
        self.wait_times.push(wait_time);
    }

    pub fn patients_treated(&self) -> u64 {
        self.patients_treated
    }

    /// Wait times in completion order, append-only during the run.
    pub fn wait_times(&self) -> &[f64] {
        &self.wait_times
    }

    /// Derive the end-of-run report for the given configuration.
    pub fn report(&self, config: &SimulationConfig) -> SimulationReport {
        let treated = self.patients_treated;
        let average_wait_time = self.total_wait_time / (treated.max(1)) as f64;
        let maximum_wait_time = self.wait_times.iter().copied().fold(0.0, f64::max);
        let doctor_utilization_percent = (treated as f64 * config.base_consultation_time)
            / (config.simulation_horizon * config.doctor_count as f64)
            * 100.0;
        let throughput_per_hour =
            ((treated as f64 / config.simulation_horizon) * 60.0).floor() as u64;

        SimulationReport {
            patients_treated: treated,
            average_wait_time,
            maximum_wait_time,
            doctor_utilization_percent,
            throughput_per_hour,
        }
    }
}

/// Aggregate results of one simulation run, handed to the reporting layer.
///
/// Utilization is the nominal figure: treated patients times the base
/// consultation time over total doctor-minutes, not a measure of actual
/// busy time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub patients_treated: u64,
    pub average_wait_time: f64,
    pub maximum_wait_time: f64,
    pub doctor_utilization_percent: f64,
    pub throughput_per_hour: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::default()
            .with_doctor_count(7)
            .with_base_consultation_time(12.0)
            .with_simulation_horizon(120.0)
    }

    #[test]
    fn test_empty_run_reports_zeroes() {
        let metrics = MetricsCollector::new();
        let report = metrics.report(&config());
        assert_eq!(report.patients_treated, 0);
        assert_eq!(report.average_wait_time, 0.0);
        assert_eq!(report.maximum_wait_time, 0.0);
        assert_eq!(report.doctor_utilization_percent, 0.0);
        assert_eq!(report.throughput_per_hour, 0);
    }

    #[test]
    fn test_wait_aggregates() {
        let mut metrics = MetricsCollector::new();
        metrics.record_discharge(0.0);
        metrics.record_discharge(10.0);
        metrics.record_discharge(5.0);

        let report = metrics.report(&config());
        assert_eq!(report.patients_treated, 3);
        assert_eq!(report.average_wait_time, 5.0);
        assert_eq!(report.maximum_wait_time, 10.0);
        assert_eq!(metrics.wait_times(), &[0.0, 10.0, 5.0]);
    }

    #[test]
    fn test_utilization_identity() {
        let mut metrics = MetricsCollector::new();
        for _ in 0..40 {
            metrics.record_discharge(1.0);
        }
        let report = metrics.report(&config());
        // Exact rational identity, not an approximation.
        assert_eq!(
            report.doctor_utilization_percent,
            (40.0 * 12.0) / (120.0 * 7.0) * 100.0
        );
    }

    #[test]
    fn test_throughput_floors_to_integer() {
        let mut metrics = MetricsCollector::new();
        for _ in 0..41 {
            metrics.record_discharge(0.0);
        }
        // 41 patients over 120 min is 20.5/hour, reported as 20.
        let report = metrics.report(&config());
        assert_eq!(report.throughput_per_hour, 20);
    }
}
