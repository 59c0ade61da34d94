use crate::domain::environment::Environment;
use crate::domain::state::{HubState, SelfRotationState};
use crate::domain::tuning::SelfRotationTuning;

/// Keeps a locked module's interior fixed in the external frame.
///
/// While spinning with the lock on, the counter-angle is recomputed from the hub
/// angle every tick rather than integrated, so the two cancel exactly. With the lock
/// off the module rides rigidly on its arm. After a stop, vacuum freezes the last
/// counter-angle and gravity unwinds it toward the arm.
pub fn tick_self_rotation(
    rotation: &mut SelfRotationState,
    dt: f64,
    hub: &HubState,
    environment: Environment,
    active: bool,
    locked: bool,
    tuning: &SelfRotationTuning,
) {
    if !locked {
        rotation.counter_angle = 0.0;
        return;
    }

    if active {
        rotation.counter_angle = -hub.angle;
    } else if !environment.is_vacuum() {
        let blend = (tuning.return_rate * dt).min(1.0);
        rotation.counter_angle -= rotation.counter_angle * blend;
    }
}
