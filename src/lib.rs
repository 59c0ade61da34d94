pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{AcceptedConfig, DynamicsProfile, Environment, PhysicsReport, SimulationConfig, SimulationState};
pub use frameworks::runner::{run, run_with_config};
pub use use_cases::{Simulation, step, step_with_profile};
