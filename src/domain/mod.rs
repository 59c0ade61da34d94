// Domain layer: environment, configuration, per-module state and the dynamics rules.

pub mod config;
pub mod environment;
pub mod errors;
pub mod physics;
pub mod report;
pub mod state;
pub mod systems;
pub mod tuning;

pub use config::{AcceptedConfig, ModuleShape, SimulationConfig};
pub use environment::Environment;
pub use errors::ConfigError;
pub use report::PhysicsReport;
pub use state::{ArmLagState, HubState, JointState, ModuleSnapshot, ModuleState, SelfRotationState, SimulationState};
pub use tuning::DynamicsProfile;
