use crate::domain::physics::{DriveInputs, arm_lag_target};
use crate::domain::state::ArmLagState;
use crate::domain::tuning::ArmLagTuning;

/// First-order filter for the connecting arm's trailing tilt.
pub fn tick_arm_lag(arm: &mut ArmLagState, dt: f64, inputs: &DriveInputs, tuning: &ArmLagTuning) {
    if inputs.active {
        let target = arm_lag_target(inputs.environment, inputs.centrifugal_accel, tuning);
        arm.lag_angle = match tuning.lag_speed {
            Some(lag_speed) => approach(arm.lag_angle, target, lag_speed * dt),
            None => target,
        };
    } else if !inputs.environment.is_vacuum() {
        arm.lag_angle = approach(arm.lag_angle, 0.0, tuning.return_speed * dt);
    }

    arm.lag_angle = arm.lag_angle.clamp(0.0, tuning.max_lag);
}

fn approach(value: f64, target: f64, rate: f64) -> f64 {
    value + (target - value) * rate
}
