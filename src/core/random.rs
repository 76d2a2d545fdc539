use super::types::Severity;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Normal, Poisson};

/// Relative frequencies of the three severity categories.
pub const SEVERITY_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Source of the stochastic inputs the model consumes.
///
/// The core never touches an RNG directly; everything random flows through
/// this seam, so a seeded source makes whole runs reproducible and a scripted
/// source makes scenarios exact. Clamping of out-of-range samples is the
/// caller's policy, not the source's.
pub trait RandomSource {
    /// Minutes until the next patient arrival, drawn around `mean`.
    fn next_arrival_interval(&mut self, mean: f64) -> f64;

    /// Severity category for an arriving patient, weighted 0.5 / 0.3 / 0.2.
    fn next_severity(&mut self) -> Severity;

    /// Consultation duration in minutes drawn from a normal distribution.
    /// The sample may be negative or implausibly small; the caller applies
    /// the model's minimum-duration clamp.
    fn next_service_duration(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Seeded random source using the model's nominal distributions: Poisson
/// arrivals, weighted-categorical severity, normal service times.
pub struct StdRandomSource {
    rng: StdRng,
    severity_weights: WeightedIndex<f64>,
}

impl StdRandomSource {
    /// Create a source with a fixed seed for deterministic timing.
    pub fn new(seed: u64) -> Self {
        // The weights are fixed constants, so building the index cannot fail.
        let severity_weights =
            WeightedIndex::new(SEVERITY_WEIGHTS).expect("severity weights are valid");
        Self {
            rng: StdRng::seed_from_u64(seed),
            severity_weights,
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_arrival_interval(&mut self, mean: f64) -> f64 {
        match Poisson::new(mean) {
            Ok(dist) => dist.sample(&mut self.rng),
            // Non-positive mean: nothing sensible to sample, fall back to
            // the mean itself. Config validation rejects this upstream.
            Err(_) => mean,
        }
    }

    fn next_severity(&mut self) -> Severity {
        match self.severity_weights.sample(&mut self.rng) {
            0 => Severity::Low,
            1 => Severity::Medium,
            _ => Severity::High,
        }
    }

    fn next_service_duration(&mut self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }
}

/// Random source that replays fixed sequences, cycling when a sequence runs
/// out. An empty sequence falls back to the requested mean (or `Low`).
///
/// Used by tests and scenario reproduction where exact values matter.
pub struct ScriptedRandomSource {
    intervals: Vec<f64>,
    severities: Vec<Severity>,
    durations: Vec<f64>,
    interval_idx: usize,
    severity_idx: usize,
    duration_idx: usize,
}

impl ScriptedRandomSource {
    pub fn new(intervals: Vec<f64>, severities: Vec<Severity>, durations: Vec<f64>) -> Self {
        Self {
            intervals,
            severities,
            durations,
            interval_idx: 0,
            severity_idx: 0,
            duration_idx: 0,
        }
    }

    fn next_from<T: Copy>(script: &[T], idx: &mut usize) -> Option<T> {
        if script.is_empty() {
            return None;
        }
        let value = script[*idx % script.len()];
        *idx += 1;
        Some(value)
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_arrival_interval(&mut self, mean: f64) -> f64 {
        Self::next_from(&self.intervals, &mut self.interval_idx).unwrap_or(mean)
    }

    fn next_severity(&mut self) -> Severity {
        Self::next_from(&self.severities, &mut self.severity_idx).unwrap_or(Severity::Low)
    }

    fn next_service_duration(&mut self, mean: f64, _std_dev: f64) -> f64 {
        Self::next_from(&self.durations, &mut self.duration_idx).unwrap_or(mean)
    }
}
