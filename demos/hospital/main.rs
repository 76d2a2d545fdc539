use clinsim::{SimulationConfig, SimulationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger; RUST_LOG=info shows the per-patient journey lines.
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let config = SimulationConfig::default();

    println!("{}", "=".repeat(70));
    println!("HEALTHCARE SYSTEM SIMULATION");
    println!("{}", "=".repeat(70));
    println!("Configuration:");
    println!("  Doctors available: {}", config.doctor_count);
    println!(
        "  Average consultation time: {} minutes",
        config.base_consultation_time
    );
    println!(
        "  Patient arrival interval: ~{} minutes",
        config.arrival_interval_mean
    );
    println!(
        "  Simulation duration: {} minutes ({:.1} hours)",
        config.simulation_horizon,
        config.simulation_horizon / 60.0
    );
    println!("  Patients waiting at open: {}", config.initial_backlog_count);
    println!("{}", "=".repeat(70));

    let mut engine = SimulationEngine::from_config(config)?;
    let report = engine.run()?;

    println!();
    println!("{}", "=".repeat(70));
    println!("SIMULATION RESULTS");
    println!("{}", "=".repeat(70));
    println!("Total patients treated: {}", report.patients_treated);
    println!("Average wait time: {:.2} minutes", report.average_wait_time);
    println!("Maximum wait time: {:.2} minutes", report.maximum_wait_time);
    println!(
        "Doctor utilization: {:.1}%",
        report.doctor_utilization_percent
    );
    println!("Throughput (patients/hour): {}", report.throughput_per_hour);
    println!("{}", "=".repeat(70));

    Ok(())
}
