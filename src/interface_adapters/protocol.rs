// Serde DTOs for scenario files and telemetry lines, with conversions to and from the
// domain types. The domain itself stays free of wire concerns.

use crate::domain::tuning::ProfileKind;
use crate::domain::{Environment, ModuleShape, ModuleSnapshot, PhysicsReport, SimulationConfig};
use crate::use_cases::{ControlEvent, SimulationUpdate};
use serde::{Deserialize, Serialize};

/// Scenario file layout. Every field is optional and falls back to the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioDto {
    pub environment: Environment,
    pub rpm: f64,
    pub active: bool,
    pub occupant_mass: f64,
    pub arm_length: f64,
    pub module_count: u8,
    pub rotation_lock: bool,
    pub module_shape: ModuleShape,
    pub module_scale: f64,
    pub profile: ProfileKind,
    pub events: Vec<ScheduledEventDto>,
}

impl Default for ScenarioDto {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            environment: config.environment,
            rpm: config.rpm,
            active: config.active,
            occupant_mass: config.occupant_mass,
            arm_length: config.arm_length,
            module_count: config.module_count,
            rotation_lock: config.rotation_lock,
            module_shape: config.module_shape,
            module_scale: config.module_scale,
            profile: ProfileKind::default(),
            events: Vec::new(),
        }
    }
}

impl ScenarioDto {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            environment: self.environment,
            rpm: self.rpm,
            active: self.active,
            occupant_mass: self.occupant_mass,
            arm_length: self.arm_length,
            module_count: self.module_count,
            rotation_lock: self.rotation_lock,
            module_shape: self.module_shape,
            module_scale: self.module_scale,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduledEventDto {
    /// Seconds after start.
    pub at: f64,
    pub action: ControlActionDto,
}

/// One control change, e.g. `{ type = "set_active", value = false }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ControlActionDto {
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

impl From<ControlActionDto> for ControlEvent {
    fn from(action: ControlActionDto) -> Self {
        match action {
            ControlActionDto::SetEnvironment(environment) => ControlEvent::SetEnvironment(environment),
            ControlActionDto::SetRotationRate(rpm) => ControlEvent::SetRotationRate(rpm),
            ControlActionDto::SetActive(active) => ControlEvent::SetActive(active),
            ControlActionDto::SetOccupantMass(mass) => ControlEvent::SetOccupantMass(mass),
            ControlActionDto::SetArmLength(length) => ControlEvent::SetArmLength(length),
            ControlActionDto::SetModuleCount(count) => ControlEvent::SetModuleCount(count),
            ControlActionDto::SetRotationLock(locked) => ControlEvent::SetRotationLock(locked),
            ControlActionDto::SetModuleShape(shape) => ControlEvent::SetModuleShape(shape),
            ControlActionDto::SetModuleScale(scale) => ControlEvent::SetModuleScale(scale),
        }
    }
}

/// One telemetry line.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryDto {
    pub tick: u64,
    pub elapsed: f64,
    pub hub_angle: f64,
    pub modules: Vec<ModuleDto>,
    pub report: ReportDto,
}

impl From<SimulationUpdate> for TelemetryDto {
    fn from(update: SimulationUpdate) -> Self {
        Self {
            tick: update.tick,
            elapsed: update.elapsed,
            hub_angle: update.hub_display_angle,
            modules: update.modules.iter().map(ModuleDto::from).collect(),
            report: ReportDto::from(&update.report),
        }
    }
}

/// Per-module angles in radians.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDto {
    pub index: usize,
    pub azimuth: f64,
    pub angle_x: f64,
    pub angle_z: f64,
    pub lag_angle: f64,
    pub counter_angle: f64,
}

impl From<&ModuleSnapshot> for ModuleDto {
    fn from(module: &ModuleSnapshot) -> Self {
        Self {
            index: module.index,
            azimuth: module.azimuth,
            angle_x: module.angle_x,
            angle_z: module.angle_z,
            lag_angle: module.lag_angle,
            counter_angle: module.counter_angle,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDto {
    pub environment: Environment,
    pub rpm: f64,
    pub angular_velocity: f64,
    pub centrifugal_accel: f64,
    pub true_gravity: f64,
    pub combined_gravity: f64,
    pub gravity_ratio: f64,
    pub gravity_angle_deg: f64,
    pub ideal_joint_angle_deg: f64,
    pub lag_angle_deg: f64,
    pub total_mass: f64,
    pub mass_inertia_factor: f64,
    pub rim_speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period: Option<f64>,
    pub rotation_lock: bool,
}

impl From<&PhysicsReport> for ReportDto {
    fn from(report: &PhysicsReport) -> Self {
        Self {
            environment: report.environment,
            rpm: report.rpm,
            angular_velocity: report.angular_velocity,
            centrifugal_accel: report.centrifugal_accel,
            true_gravity: report.true_gravity,
            combined_gravity: report.combined_gravity,
            gravity_ratio: report.gravity_ratio,
            gravity_angle_deg: report.gravity_angle.to_degrees(),
            ideal_joint_angle_deg: report.ideal_joint_angle_deg,
            lag_angle_deg: report.lag_angle_deg,
            total_mass: report.total_mass,
            mass_inertia_factor: report.mass_inertia_factor,
            rim_speed: report.rim_speed,
            rotation_period: report.rotation_period,
            rotation_lock: report.rotation_lock,
        }
    }
}
