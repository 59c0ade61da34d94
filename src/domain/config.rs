// Simulation configuration as supplied by the control collaborators.

use super::environment::Environment;
use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Distance from the hub axis to each joint, in metres.
pub const HUB_ARM_LENGTH: f64 = 4.0;

/// Mass of an empty module, in kilograms.
pub const MODULE_BASE_MASS: f64 = 50.0;

pub const ROTATION_RATE_RANGE: RangeInclusive<f64> = 0.0..=60.0;
pub const OCCUPANT_MASS_RANGE: RangeInclusive<f64> = 40.0..=120.0;
pub const ARM_LENGTH_RANGE: RangeInclusive<f64> = 0.3..=2.0;
pub const MODULE_COUNTS: [u8; 5] = [1, 2, 4, 6, 8];

/// Module hull shape. Only rendering reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleShape {
    #[default]
    Capsule,
    Box,
    Sphere,
    Cylinder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub environment: Environment,
    /// Hub rotation rate in revolutions per minute.
    pub rpm: f64,
    /// DRIVE while true, RETURN while false.
    pub active: bool,
    pub occupant_mass: f64,
    /// Connecting-arm length in metres (geometry only).
    pub arm_length: f64,
    pub module_count: u8,
    pub rotation_lock: bool,
    pub module_shape: ModuleShape,
    pub module_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Earth,
            rpm: 10.0,
            active: false,
            occupant_mass: 70.0,
            arm_length: 1.0,
            module_count: 4,
            rotation_lock: false,
            module_shape: ModuleShape::Capsule,
            module_scale: 1.0,
        }
    }
}

impl SimulationConfig {
    /// Checks every option against its domain and hands back a config that can be
    /// stepped. Nothing is clamped or coerced here.
    pub fn validate(self) -> Result<AcceptedConfig, ConfigError> {
        check_range("rpm", self.rpm, ROTATION_RATE_RANGE, ConfigError::RotationRateOutOfRange)?;
        check_range(
            "occupant_mass",
            self.occupant_mass,
            OCCUPANT_MASS_RANGE,
            ConfigError::OccupantMassOutOfRange,
        )?;
        check_range("arm_length", self.arm_length, ARM_LENGTH_RANGE, ConfigError::ArmLengthOutOfRange)?;

        if !MODULE_COUNTS.contains(&self.module_count) {
            return Err(ConfigError::UnsupportedModuleCount(self.module_count));
        }
        if !self.module_scale.is_finite() || self.module_scale <= 0.0 {
            return Err(ConfigError::InvalidModuleScale(self.module_scale));
        }

        Ok(AcceptedConfig(self))
    }

    pub fn total_mass(&self) -> f64 {
        MODULE_BASE_MASS + self.occupant_mass
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
    out_of_range: fn(f64) -> ConfigError,
) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite(field));
    }
    if !range.contains(&value) {
        return Err(out_of_range(value));
    }
    Ok(())
}

/// A configuration that passed [`SimulationConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedConfig(SimulationConfig);

impl AcceptedConfig {
    pub fn get(&self) -> &SimulationConfig {
        &self.0
    }
}

impl std::ops::Deref for AcceptedConfig {
    type Target = SimulationConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
