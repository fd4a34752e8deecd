pub mod telemetry;
pub mod csv;
pub mod json;

pub use telemetry::{Telemetry, TelemetryError, TelemetrySample};
