// Scalar physics readout for telemetry and on-screen labels.

use super::config::{HUB_ARM_LENGTH, SimulationConfig};
use super::environment::{EARTH_GRAVITY, Environment};
use super::physics::{arm_lag_target, centrifugal_accel, gravity_angle, joint_target, mass_inertia_factor};
use super::tuning::DynamicsProfile;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsReport {
    pub environment: Environment,
    pub rpm: f64,
    /// Actual hub spin in rad/s (zero while stopped).
    pub angular_velocity: f64,
    pub centrifugal_accel: f64,
    pub true_gravity: f64,
    /// Magnitude of the effective gravity felt inside a module, m/s².
    pub combined_gravity: f64,
    /// `combined_gravity` in units of Earth g.
    pub gravity_ratio: f64,
    /// Direction of effective gravity away from true down, radians.
    pub gravity_angle: f64,
    pub ideal_joint_angle_deg: f64,
    pub lag_angle_deg: f64,
    pub total_mass: f64,
    pub mass_inertia_factor: f64,
    /// Tangential speed at the joints, m/s.
    pub rim_speed: f64,
    /// Seconds per revolution; `None` at zero spin.
    pub rotation_period: Option<f64>,
    pub rotation_lock: bool,
}

/// Builds the readout from configuration and the current hub spin. Pure.
pub fn derive_report(config: &SimulationConfig, angular_velocity: f64, profile: &DynamicsProfile) -> PhysicsReport {
    let environment = config.environment;
    let true_gravity = environment.gravity();
    let centrifugal = centrifugal_accel(angular_velocity);

    let combined_gravity = if environment.is_vacuum() {
        centrifugal
    } else {
        centrifugal.hypot(true_gravity)
    };

    let spinning = angular_velocity.abs() > 0.0;
    let rotation_period = spinning.then(|| std::f64::consts::TAU / angular_velocity.abs());
    let rpm = if spinning { config.rpm } else { 0.0 };

    PhysicsReport {
        environment,
        rpm,
        angular_velocity,
        centrifugal_accel: centrifugal,
        true_gravity,
        combined_gravity,
        gravity_ratio: combined_gravity / EARTH_GRAVITY,
        gravity_angle: gravity_angle(environment, centrifugal),
        ideal_joint_angle_deg: joint_target(environment, centrifugal, &profile.joint).to_degrees(),
        lag_angle_deg: arm_lag_target(environment, centrifugal, &profile.arm_lag).to_degrees(),
        total_mass: config.total_mass(),
        mass_inertia_factor: mass_inertia_factor(config.total_mass()),
        rim_speed: angular_velocity.abs() * HUB_ARM_LENGTH,
        rotation_period,
        rotation_lock: config.rotation_lock,
    }
}

impl fmt::Display for PhysicsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "environment:      {} ({:.2} m/s²)", self.environment, self.true_gravity)?;
        writeln!(
            f,
            "rotation:         {:.1} rpm, ω = {:.3} rad/s, rim {:.2} m/s",
            self.rpm, self.angular_velocity, self.rim_speed
        )?;
        match self.rotation_period {
            Some(period) => writeln!(f, "period:           {period:.2} s")?,
            None => writeln!(f, "period:           stopped")?,
        }
        writeln!(f, "centrifugal:      {:.2} m/s²", self.centrifugal_accel)?;
        writeln!(
            f,
            "combined gravity: {:.2} m/s² ({:.2} g) at {:.1}°",
            self.combined_gravity,
            self.gravity_ratio,
            self.gravity_angle.to_degrees()
        )?;
        writeln!(f, "ideal joint:      {:.1}°", self.ideal_joint_angle_deg)?;
        writeln!(f, "arm lag:          {:.1}°", self.lag_angle_deg)?;
        writeln!(
            f,
            "mass:             {:.0} kg (inertia ×{:.2})",
            self.total_mass, self.mass_inertia_factor
        )?;
        write!(
            f,
            "rotation lock:    {}",
            if self.rotation_lock { "on" } else { "off" }
        )
    }
}
