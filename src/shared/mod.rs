pub mod interfaces;
pub mod telemetry;
