pub mod config;
pub mod error;
pub mod event_clock;
pub mod metrics;
pub mod process;
pub mod processes;
pub mod random;
pub mod resource_pool;
pub mod simulation_engine;
pub mod types;
