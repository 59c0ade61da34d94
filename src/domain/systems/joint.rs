use crate::domain::physics::{DriveInputs, joint_target};
use crate::domain::state::JointState;
use crate::domain::tuning::JointTuning;
use std::f64::consts::FRAC_PI_2;
use tracing::trace;

/// Advances one module's two-axis joint by `dt` seconds.
///
/// DRIVE pulls the Z axis toward the combined-gravity angle and the X axis toward
/// zero, with a gain that falls off with the square root of the loaded mass. RETURN
/// depends on the environment: under gravity both axes spring back to neutral at the
/// faster return gain, while in vacuum the joint keeps its orientation and only the
/// residual velocity decays.
pub fn tick_joint(joint: &mut JointState, dt: f64, inputs: &DriveInputs, tuning: &JointTuning) {
    if inputs.active {
        let target_z = joint_target(inputs.environment, inputs.centrifugal_accel, tuning);
        let response_speed = tuning.base_align_speed / inputs.mass_inertia_factor;

        (joint.angle_x, joint.velocity_x) =
            damped_step(joint.angle_x, joint.velocity_x, 0.0, response_speed, dt, tuning.damping);
        (joint.angle_z, joint.velocity_z) =
            damped_step(joint.angle_z, joint.velocity_z, target_z, response_speed, dt, tuning.damping);
    } else if inputs.environment.is_vacuum() {
        // Nothing pulls the module back once the spin stops.
        joint.velocity_x *= tuning.damping;
        joint.velocity_z *= tuning.damping;
    } else {
        let return_speed = tuning.return_speed();

        (joint.angle_x, joint.velocity_x) =
            damped_step(joint.angle_x, joint.velocity_x, 0.0, return_speed, dt, tuning.damping);
        (joint.angle_z, joint.velocity_z) =
            damped_step(joint.angle_z, joint.velocity_z, 0.0, return_speed, dt, tuning.damping);
    }

    let max_angle = tuning.max_angle.min(FRAC_PI_2);
    clamp_axis(&mut joint.angle_x, &mut joint.velocity_x, max_angle);
    clamp_axis(&mut joint.angle_z, &mut joint.velocity_z, max_angle);
}

fn damped_step(angle: f64, velocity: f64, target: f64, speed: f64, dt: f64, damping: f64) -> (f64, f64) {
    let velocity = (velocity + (target - angle) * speed * dt) * damping;
    (angle + velocity * dt, velocity)
}

// Holds the axis at the stop and drops any velocity still pushing into it.
fn clamp_axis(angle: &mut f64, velocity: &mut f64, max_angle: f64) {
    if *angle > max_angle {
        trace!(angle = *angle, max_angle, "joint hit positive stop");
        *angle = max_angle;
        *velocity = velocity.min(0.0);
    } else if *angle < -max_angle {
        trace!(angle = *angle, max_angle, "joint hit negative stop");
        *angle = -max_angle;
        *velocity = velocity.max(0.0);
    }
}
