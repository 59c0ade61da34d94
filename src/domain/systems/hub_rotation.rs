use crate::domain::physics::angular_velocity_from_rpm;
use crate::domain::state::HubState;

/// Advances the hub spin. A stopped hub keeps its angle.
pub fn tick_hub(hub: &mut HubState, dt: f64, rpm: f64, active: bool) {
    if !active {
        hub.angular_velocity = 0.0;
        return;
    }

    hub.angular_velocity = angular_velocity_from_rpm(rpm);
    hub.angle += hub.angular_velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn when_active_for_one_second_at_thirty_rpm_then_hub_turns_half_a_revolution() {
        let mut hub = HubState::default();
        for _ in 0..60 {
            tick_hub(&mut hub, 1.0 / 60.0, 30.0, true);
        }
        assert_relative_eq!(hub.angle, PI, epsilon = 1e-9);
        assert_relative_eq!(hub.angular_velocity, PI);
    }

    #[test]
    fn when_inactive_then_angle_is_held_and_velocity_reads_zero() {
        let mut hub = HubState {
            angle: 1.25,
            angular_velocity: 2.0,
        };
        tick_hub(&mut hub, 0.05, 30.0, false);
        assert_eq!(hub.angle, 1.25);
        assert_eq!(hub.angular_velocity, 0.0);
    }

    #[test]
    fn when_active_at_zero_rpm_then_hub_is_steady() {
        let mut hub = HubState {
            angle: 0.75,
            angular_velocity: 0.0,
        };
        tick_hub(&mut hub, 0.05, 0.0, true);
        assert_eq!(hub.angle, 0.75);
        assert_eq!(hub.angular_velocity, 0.0);
    }
}
