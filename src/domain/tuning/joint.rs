use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

/// Tuning for the two-axis joint solver.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTuning {
    /// Spring gain toward the target for a module at base mass, in 1/s².
    pub base_align_speed: f64,

    /// Per-step velocity retention (1.0 = undamped).
    pub damping: f64,

    /// Gain multiplier used while returning to neutral in a gravity environment.
    pub return_multiplier: f64,

    /// Hard stop for both joint axes, in radians.
    pub max_angle: f64,
}

impl JointTuning {
    pub fn hinge() -> Self {
        Self {
            damping: 0.9,
            max_angle: FRAC_PI_3,
            ..Self::default()
        }
    }

    pub fn return_speed(&self) -> f64 {
        self.base_align_speed * self.return_multiplier
    }
}

impl Default for JointTuning {
    fn default() -> Self {
        Self {
            base_align_speed: 1.5,
            damping: 0.88,
            return_multiplier: 1.5,
            max_angle: FRAC_PI_2,
        }
    }
}
