use clinsim::{
    ScriptedRandomSource, Severity, SimulationConfig, SimulationEngine, SimulationReport,
};

fn scripted(
    intervals: Vec<f64>,
    severities: Vec<Severity>,
    durations: Vec<f64>,
) -> Box<ScriptedRandomSource> {
    Box::new(ScriptedRandomSource::new(intervals, severities, durations))
}

fn run_default_seeded(seed: u64) -> (SimulationReport, Vec<f64>) {
    let config = SimulationConfig::default().with_random_seed(seed);
    let mut engine = SimulationEngine::from_config(config).expect("valid config");
    let report = engine.run().expect("run succeeds");
    (report, engine.metrics().wait_times().to_vec())
}

#[test]
fn seeded_runs_reproduce_exactly() {
    let (report_a, waits_a) = run_default_seeded(42);
    let (report_b, waits_b) = run_default_seeded(42);
    assert_eq!(report_a, report_b);
    assert_eq!(waits_a, waits_b);
}

#[test]
fn different_seeds_usually_diverge() {
    let (_, waits_a) = run_default_seeded(1);
    let (_, waits_b) = run_default_seeded(2);
    // Not a hard guarantee, but with ~60 arrivals over 120 minutes two
    // seeds producing identical wait sequences would indicate the seed is
    // being ignored.
    assert_ne!(waits_a, waits_b);
}

#[test]
fn full_day_produces_plausible_load() {
    let (report, waits) = run_default_seeded(42);
    assert!(report.patients_treated > 0);
    assert_eq!(waits.len() as u64, report.patients_treated);
    assert!(waits.iter().all(|&w| w >= 0.0), "waits are never negative");
    assert!(report.maximum_wait_time >= report.average_wait_time);
}

#[test]
fn utilization_matches_the_reported_formula_exactly() {
    let config = SimulationConfig::default()
        .with_doctor_count(7)
        .with_base_consultation_time(12.0)
        .with_simulation_horizon(120.0)
        .with_random_seed(7);
    let mut engine = SimulationEngine::from_config(config).expect("valid config");
    let report = engine.run().expect("run succeeds");

    let expected = (report.patients_treated as f64 * 12.0) / (120.0 * 7.0) * 100.0;
    assert_eq!(report.doctor_utilization_percent, expected);

    let expected_throughput =
        ((report.patients_treated as f64 / 120.0) * 60.0).floor() as u64;
    assert_eq!(report.throughput_per_hour, expected_throughput);
}

#[test]
fn backlog_pair_on_single_doctor_yields_average_wait_of_five() {
    // Two patients at the door, one doctor, both consultations exactly 10
    // minutes: A is served 0→10 with no wait, B waits 10 and is served
    // 10→20.
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(2)
        .with_simulation_horizon(30.0);
    let source = scripted(vec![1_000.0], vec![Severity::Medium], vec![10.0]);
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    let report = engine.run().expect("run succeeds");

    assert_eq!(report.patients_treated, 2);
    assert_eq!(engine.metrics().wait_times(), &[0.0, 10.0]);
    assert_eq!(report.average_wait_time, 5.0);
}

#[test]
fn shorter_horizon_drops_the_unfinished_patient() {
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(2)
        .with_simulation_horizon(15.0);
    let source = scripted(vec![1_000.0], vec![Severity::Medium], vec![10.0]);
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    let report = engine.run().expect("run succeeds");

    // B is mid-consultation at the horizon; their completion event is
    // never dispatched and they are excluded from the metrics.
    assert_eq!(report.patients_treated, 1);
    assert_eq!(engine.metrics().wait_times(), &[0.0]);
}

#[test]
fn saturated_pool_grants_strictly_in_arrival_order() {
    // Five queued patients, one doctor, fixed 10-minute consultations:
    // waits must be exact multiples of the service time, in queue order,
    // regardless of the severities drawn.
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(5)
        .with_simulation_horizon(100.0);
    let source = scripted(
        vec![1_000.0],
        vec![
            Severity::High,
            Severity::High,
            Severity::Low,
            Severity::Medium,
            Severity::Low,
        ],
        vec![10.0],
    );
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    engine.run().expect("run succeeds");

    assert_eq!(
        engine.metrics().wait_times(),
        &[0.0, 10.0, 20.0, 30.0, 40.0]
    );
}

#[test]
fn negative_service_sample_is_served_for_the_floor_duration() {
    // A scripted draw of -3 must be treated as the 5-minute floor: the
    // single patient is discharged at exactly t=5.
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(1)
        .with_simulation_horizon(5.0);
    let source = scripted(vec![1_000.0], vec![Severity::Low], vec![-3.0]);
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    let report = engine.run().expect("run succeeds");
    assert_eq!(report.patients_treated, 1);

    // With a horizon just short of the floor the discharge never happens.
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(1)
        .with_simulation_horizon(4.9);
    let source = scripted(vec![1_000.0], vec![Severity::Low], vec![-3.0]);
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    let report = engine.run().expect("run succeeds");
    assert_eq!(report.patients_treated, 0);
}

#[test]
fn generated_arrivals_join_the_queue_behind_the_backlog() {
    // One doctor, one backlog patient, then arrivals every 2 minutes with
    // 10-minute consultations. The backlog patient is served immediately;
    // each generated patient queues behind the previous ones.
    let config = SimulationConfig::default()
        .with_doctor_count(1)
        .with_initial_backlog(1)
        .with_simulation_horizon(32.0);
    let source = scripted(vec![2.0], vec![Severity::Medium], vec![10.0]);
    let mut engine = SimulationEngine::new(config, source).expect("valid config");
    let report = engine.run().expect("run succeeds");

    // Service starts: 0, 10, 20 — arrivals at 0, 2, 4 — waits 0, 8, 16.
    // The patient starting at 30 finishes at 40, past the horizon.
    assert_eq!(report.patients_treated, 3);
    assert_eq!(engine.metrics().wait_times(), &[0.0, 8.0, 16.0]);
}

#[test]
fn occupancy_stays_within_capacity_for_a_heavy_day() {
    let config = SimulationConfig::default()
        .with_doctor_count(3)
        .with_arrival_interval_mean(1.0)
        .with_simulation_horizon(200.0)
        .with_random_seed(99);
    let mut engine = SimulationEngine::from_config(config).expect("valid config");
    engine.run().expect("run succeeds");

    let pool = engine.pool();
    assert!(pool.in_use() <= pool.capacity());
    // With arrivals every ~1 minute against 3 doctors at ~12 minutes each,
    // the pool must end the day saturated with a queue behind it.
    assert_eq!(pool.in_use(), pool.capacity());
    assert!(pool.waiting_len() > 0);
}
