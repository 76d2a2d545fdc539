pub mod arrival_generator;
pub mod patient_journey;

pub use arrival_generator::ArrivalGenerator;
pub use patient_journey::PatientJourney;
