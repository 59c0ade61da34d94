// Use-case level inputs/outputs for the simulation loop.

use crate::domain::{Environment, ModuleShape, ModuleSnapshot, PhysicsReport, SimulationConfig};
use std::time::Duration;

/// A change requested by a control collaborator (slider, dropdown, toggle).
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    Configure(SimulationConfig),
    SetEnvironment(Environment),
    SetRotationRate(f64),
    SetActive(bool),
    SetOccupantMass(f64),
    SetArmLength(f64),
    SetModuleCount(u8),
    SetRotationLock(bool),
    SetModuleShape(ModuleShape),
    SetModuleScale(f64),
}

impl ControlEvent {
    /// Returns `config` with this change applied. Validation happens afterwards.
    pub fn apply_to(self, mut config: SimulationConfig) -> SimulationConfig {
        match self {
            ControlEvent::Configure(next) => return next,
            ControlEvent::SetEnvironment(environment) => config.environment = environment,
            ControlEvent::SetRotationRate(rpm) => config.rpm = rpm,
            ControlEvent::SetActive(active) => config.active = active,
            ControlEvent::SetOccupantMass(mass) => config.occupant_mass = mass,
            ControlEvent::SetArmLength(length) => config.arm_length = length,
            ControlEvent::SetModuleCount(count) => config.module_count = count,
            ControlEvent::SetRotationLock(locked) => config.rotation_lock = locked,
            ControlEvent::SetModuleShape(shape) => config.module_shape = shape,
            ControlEvent::SetModuleScale(scale) => config.module_scale = scale,
        }
        config
    }
}

/// Control event to inject once `at` has elapsed since the run started.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent {
    pub at: Duration,
    pub event: ControlEvent,
}

/// Everything a renderer needs after one step.
#[derive(Debug, Clone)]
pub struct SimulationUpdate {
    pub tick: u64,
    pub elapsed: f64,
    pub hub_angle: f64,
    pub hub_display_angle: f64,
    pub modules: Vec<ModuleSnapshot>,
    pub report: PhysicsReport,
}
