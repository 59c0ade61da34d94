// Shared formulas for the solvers and the derived report.
//
// Every function branches on the environment before dividing by gravity, so vacuum
// never reaches `atan(x / 0)`.

use super::config::{HUB_ARM_LENGTH, MODULE_BASE_MASS};
use super::environment::Environment;
use super::tuning::{ArmLagTuning, JointTuning};
use std::f64::consts::{FRAC_PI_2, TAU};

pub fn angular_velocity_from_rpm(rpm: f64) -> f64 {
    rpm * TAU / 60.0
}

/// Outward acceleration felt at the joint, `ω² · r`.
pub fn centrifugal_accel(angular_velocity: f64) -> f64 {
    angular_velocity * angular_velocity * HUB_ARM_LENGTH
}

pub fn mass_inertia_factor(total_mass: f64) -> f64 {
    (total_mass / MODULE_BASE_MASS).sqrt()
}

/// Angle of combined gravity away from true "down", in radians.
pub fn gravity_angle(environment: Environment, centrifugal: f64) -> f64 {
    if environment.is_vacuum() {
        return if centrifugal > 0.0 { FRAC_PI_2 } else { 0.0 };
    }
    centrifugal.atan2(environment.gravity())
}

/// Joint Z-axis angle that lines the module floor up with combined gravity.
pub fn joint_target(environment: Environment, centrifugal: f64, tuning: &JointTuning) -> f64 {
    let ideal = if environment.is_vacuum() {
        // Pure centrifugal "down" while spinning, neutral at zero spin.
        if centrifugal > 0.0 { FRAC_PI_2 } else { 0.0 }
    } else {
        (centrifugal / environment.gravity()).atan()
    };
    ideal.clamp(0.0, FRAC_PI_2.min(tuning.max_angle))
}

/// Trailing tilt the connecting arm settles at while spinning.
pub fn arm_lag_target(environment: Environment, centrifugal: f64, tuning: &ArmLagTuning) -> f64 {
    let lag = if environment.is_vacuum() {
        (centrifugal / tuning.reference_accel).atan() * tuning.bulge_factor * tuning.vacuum_scale
    } else {
        (centrifugal / environment.gravity()).atan() * tuning.bulge_factor
    };
    lag.clamp(0.0, tuning.max_lag)
}

/// Inputs every per-module solver reads on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveInputs {
    pub environment: Environment,
    pub active: bool,
    pub angular_velocity: f64,
    pub centrifugal_accel: f64,
    pub mass_inertia_factor: f64,
}

impl DriveInputs {
    pub fn new(environment: Environment, active: bool, angular_velocity: f64, total_mass: f64) -> Self {
        Self {
            environment,
            active,
            angular_velocity,
            centrifugal_accel: centrifugal_accel(angular_velocity),
            mass_inertia_factor: mass_inertia_factor(total_mass),
        }
    }
}
