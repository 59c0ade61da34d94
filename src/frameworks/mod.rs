// Frameworks layer: environment-driven settings and process bootstrap.

pub mod config;
pub mod runner;
