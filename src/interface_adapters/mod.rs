// Interface adapters: scenario files in, telemetry out.

pub mod protocol;
pub mod scenario;
pub mod telemetry;
