use std::f64::consts::FRAC_PI_6;

/// Tuning for the connecting arm's trailing-lag filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLagTuning {
    /// Acceleration that stands in for gravity when there is none, in m/s².
    pub reference_accel: f64,

    /// Fraction of the gravity angle the arm bulges out by.
    pub bulge_factor: f64,

    /// Extra attenuation applied in vacuum.
    pub vacuum_scale: f64,

    /// Filter rate toward the target while spinning, in 1/s. `None` tracks the
    /// target directly.
    pub lag_speed: Option<f64>,

    /// Relaxation rate toward zero after stopping under gravity, in 1/s.
    pub return_speed: f64,

    /// Largest lag the arm may take, in radians.
    pub max_lag: f64,
}

impl ArmLagTuning {
    pub fn unfiltered() -> Self {
        Self {
            lag_speed: None,
            ..Self::default()
        }
    }
}

impl Default for ArmLagTuning {
    fn default() -> Self {
        Self {
            reference_accel: 10.0,
            bulge_factor: 0.8,
            vacuum_scale: 0.3,
            lag_speed: Some(2.0),
            return_speed: 3.0,
            max_lag: FRAC_PI_6,
        }
    }
}
