pub mod core;

// Re-export commonly used types
pub use crate::core::config::SimulationConfig;
pub use crate::core::error::SimulationError;
pub use crate::core::metrics::{MetricsCollector, SimulationReport};
pub use crate::core::random::{RandomSource, ScriptedRandomSource, StdRandomSource};
pub use crate::core::simulation_engine::SimulationEngine;
pub use crate::core::types::{PatientId, ProcessId, Severity, SimTime};
