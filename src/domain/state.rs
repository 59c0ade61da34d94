// Simulation state owned by the stepping function, plus read-only snapshots for renderers.

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HubState {
    /// Accumulated spin angle in radians. Never wrapped, so counter-rotation can
    /// cancel it exactly.
    pub angle: f64,
    /// Current spin rate in rad/s; zero while stopped.
    pub angular_velocity: f64,
}

impl HubState {
    /// Spin angle folded into `[0, 2π)` for display.
    pub fn display_angle(&self) -> f64 {
        self.angle.rem_euclid(TAU)
    }

    /// Azimuthal placement of module `index` out of `count` around the hub.
    pub fn module_azimuth(&self, index: usize, count: usize) -> f64 {
        index as f64 * TAU / count.max(1) as f64 + self.angle
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointState {
    pub angle_x: f64,
    pub angle_z: f64,
    pub velocity_x: f64,
    pub velocity_z: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmLagState {
    pub lag_angle: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelfRotationState {
    pub counter_angle: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModuleState {
    pub joint: JointState,
    pub arm_lag: ArmLagState,
    pub self_rotation: SelfRotationState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    pub hub: HubState,
    pub modules: Vec<ModuleState>,
    /// Number of completed steps.
    pub tick: u64,
    /// Simulated seconds, after step-size sanitising.
    pub elapsed: f64,
}

impl SimulationState {
    pub fn new(module_count: usize) -> Self {
        Self {
            modules: vec![ModuleState::default(); module_count],
            ..Self::default()
        }
    }

    /// Recreates every per-module state at zero when the module count changed.
    /// Returns true if the module set was rebuilt.
    pub fn ensure_module_count(&mut self, module_count: usize) -> bool {
        if self.modules.len() == module_count {
            return false;
        }
        self.modules = vec![ModuleState::default(); module_count];
        true
    }

    pub fn snapshots(&self) -> Vec<ModuleSnapshot> {
        let count = self.modules.len();
        self.modules
            .iter()
            .enumerate()
            .map(|(index, module)| ModuleSnapshot {
                index,
                azimuth: self.hub.module_azimuth(index, count),
                angle_x: module.joint.angle_x,
                angle_z: module.joint.angle_z,
                lag_angle: module.arm_lag.lag_angle,
                counter_angle: module.self_rotation.counter_angle,
            })
            .collect()
    }
}

/// Per-module angles a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleSnapshot {
    pub index: usize,
    pub azimuth: f64,
    pub angle_x: f64,
    pub angle_z: f64,
    pub lag_angle: f64,
    pub counter_angle: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn when_module_count_changes_then_states_are_recreated_at_zero() {
        let mut state = SimulationState::new(2);
        state.modules[0].joint.angle_z = 0.5;

        assert!(state.ensure_module_count(4));
        assert_eq!(state.modules.len(), 4);
        assert!(state.modules.iter().all(|m| *m == ModuleState::default()));
    }

    #[test]
    fn when_module_count_is_unchanged_then_states_are_kept() {
        let mut state = SimulationState::new(2);
        state.modules[1].arm_lag.lag_angle = 0.2;

        assert!(!state.ensure_module_count(2));
        assert_eq!(state.modules[1].arm_lag.lag_angle, 0.2);
    }

    #[test]
    fn when_hub_has_spun_several_turns_then_display_angle_wraps() {
        let hub = HubState {
            angle: 3.0 * TAU + 0.25,
            angular_velocity: 0.0,
        };
        assert_relative_eq!(hub.display_angle(), 0.25, epsilon = 1e-9);
        assert_relative_eq!(hub.angle, 3.0 * TAU + 0.25);
    }

    #[test]
    fn when_four_modules_then_they_sit_a_quarter_turn_apart() {
        let hub = HubState {
            angle: 0.1,
            angular_velocity: 0.0,
        };
        assert_relative_eq!(hub.module_azimuth(0, 4), 0.1);
        assert_relative_eq!(hub.module_azimuth(2, 4), std::f64::consts::PI + 0.1);
    }
}
