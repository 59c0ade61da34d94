use super::types::{ControlEvent, SimulationUpdate};
use crate::domain::config::AcceptedConfig;
use crate::domain::physics::DriveInputs;
use crate::domain::report::derive_report;
use crate::domain::systems::{arm_lag, hub_rotation, joint, self_rotation};
use crate::domain::{ConfigError, DynamicsProfile, PhysicsReport, SimulationConfig, SimulationState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Largest step the integrators stay stable for, in seconds.
pub const MAX_STEP: f64 = 0.1;

/// Advances `state` by `dt` seconds with the canonical tuning and returns the readout.
pub fn step(dt: f64, config: &AcceptedConfig, state: &mut SimulationState) -> PhysicsReport {
    step_with_profile(dt, config, &DynamicsProfile::canonical(), state)
}

pub fn step_with_profile(
    dt: f64,
    config: &AcceptedConfig,
    profile: &DynamicsProfile,
    state: &mut SimulationState,
) -> PhysicsReport {
    let dt = sanitize_dt(dt);

    let module_count = usize::from(config.module_count);
    if state.ensure_module_count(module_count) {
        info!(module_count, "module set rebuilt");
    }

    hub_rotation::tick_hub(&mut state.hub, dt, config.rpm, config.active);
    let hub = state.hub;
    let inputs = DriveInputs::new(
        config.environment,
        config.active,
        hub.angular_velocity,
        config.total_mass(),
    );

    // Modules never read each other's state.
    for module in &mut state.modules {
        joint::tick_joint(&mut module.joint, dt, &inputs, &profile.joint);
        arm_lag::tick_arm_lag(&mut module.arm_lag, dt, &inputs, &profile.arm_lag);
        self_rotation::tick_self_rotation(
            &mut module.self_rotation,
            dt,
            &hub,
            config.environment,
            config.active,
            config.rotation_lock,
            &profile.self_rotation,
        );
    }

    state.tick += 1;
    state.elapsed += dt;

    derive_report(config, hub.angular_velocity, profile)
}

fn sanitize_dt(dt: f64) -> f64 {
    if !dt.is_finite() || dt < 0.0 {
        warn!(dt, "ignoring invalid step size");
        return 0.0;
    }
    if dt > MAX_STEP {
        debug!(dt, max = MAX_STEP, "clamping step size");
        return MAX_STEP;
    }
    dt
}

/// Owns one simulation: its accepted config, tuning and state.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: AcceptedConfig,
    profile: DynamicsProfile,
    state: SimulationState,
}

impl Simulation {
    pub fn new(config: SimulationConfig, profile: DynamicsProfile) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let state = SimulationState::new(usize::from(config.module_count));
        Ok(Self {
            config,
            profile,
            state,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        self.config.get()
    }

    pub fn profile(&self) -> &DynamicsProfile {
        &self.profile
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Applies a control change. A rejected change leaves the current config in place.
    pub fn apply(&mut self, event: ControlEvent) -> Result<(), ConfigError> {
        let previous = self.config.get();
        let accepted = event.apply_to(previous.clone()).validate()?;

        if accepted.environment != previous.environment {
            info!(from = %previous.environment, to = %accepted.environment, "environment changed");
        }
        if accepted.active != previous.active {
            info!(active = accepted.active, rpm = accepted.rpm, "hub drive toggled");
        }
        if accepted.rotation_lock != previous.rotation_lock {
            info!(locked = accepted.rotation_lock, "rotation lock toggled");
        }

        self.config = accepted;
        Ok(())
    }

    /// Readout for the current config and hub spin, without stepping.
    pub fn report(&self) -> PhysicsReport {
        derive_report(&self.config, self.state.hub.angular_velocity, &self.profile)
    }

    pub fn advance(&mut self, dt: f64) -> SimulationUpdate {
        let report = step_with_profile(dt, &self.config, &self.profile, &mut self.state);
        SimulationUpdate {
            tick: self.state.tick,
            elapsed: self.state.elapsed,
            hub_angle: self.state.hub.angle,
            hub_display_angle: self.state.hub.display_angle(),
            modules: self.state.snapshots(),
            report,
        }
    }
}

/// Runs the simulation on a timer until `shutdown` fires, then hands it back.
///
/// Control events queued since the previous tick are applied before stepping. The
/// step size is the measured time since the previous tick, so a late tick still
/// advances by real elapsed time (clamped to [`MAX_STEP`]).
pub async fn simulation_task(
    mut simulation: Simulation,
    mut control_rx: mpsc::Receiver<ControlEvent>,
    update_tx: broadcast::Sender<SimulationUpdate>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) -> Simulation {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    info!(
        tick_ms = tick_interval.as_millis() as u64,
        modules = simulation.config().module_count,
        profile = ?simulation.profile().kind,
        "simulation loop started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => break,
            _ = interval.tick() => {}
        }

        while let Ok(event) = control_rx.try_recv() {
            if let Err(error) = simulation.apply(event.clone()) {
                warn!(?event, %error, "control event rejected");
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let update = simulation.advance(dt);
        // No subscribers is fine; renderers may attach later.
        let _ = update_tx.send(update);
    }

    info!(tick = simulation.state().tick, "simulation loop stopped");
    simulation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Environment;
    use approx::assert_relative_eq;

    fn accepted(config: SimulationConfig) -> AcceptedConfig {
        config.validate().expect("test config should be valid")
    }

    #[test]
    fn when_step_runs_then_tick_and_elapsed_advance() {
        let config = accepted(SimulationConfig {
            active: true,
            ..SimulationConfig::default()
        });
        let mut state = SimulationState::new(4);

        step(0.02, &config, &mut state);
        step(0.03, &config, &mut state);

        assert_eq!(state.tick, 2);
        assert_relative_eq!(state.elapsed, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn when_step_is_too_large_then_it_is_clamped() {
        let config = accepted(SimulationConfig {
            active: true,
            rpm: 30.0,
            ..SimulationConfig::default()
        });
        let mut state = SimulationState::new(4);

        step(5.0, &config, &mut state);

        assert_relative_eq!(state.elapsed, MAX_STEP);
        assert_relative_eq!(state.hub.angle, std::f64::consts::PI * MAX_STEP, epsilon = 1e-12);
    }

    #[test]
    fn when_step_is_nan_then_state_does_not_move() {
        let config = accepted(SimulationConfig {
            active: true,
            rpm: 30.0,
            ..SimulationConfig::default()
        });
        let mut state = SimulationState::new(4);

        step(f64::NAN, &config, &mut state);
        step(-1.0, &config, &mut state);

        assert_eq!(state.hub.angle, 0.0);
        assert_eq!(state.elapsed, 0.0);
        assert!(state.modules.iter().all(|m| m.joint.angle_z == 0.0));
    }

    #[test]
    fn when_module_count_changes_between_steps_then_state_list_is_recreated() {
        let mut config = SimulationConfig {
            active: true,
            rpm: 20.0,
            module_count: 2,
            ..SimulationConfig::default()
        };
        let mut state = SimulationState::new(2);
        for _ in 0..30 {
            step(1.0 / 60.0, &accepted(config.clone()), &mut state);
        }
        assert!(state.modules[0].joint.angle_z > 0.0);

        config.module_count = 6;
        step(0.0, &accepted(config), &mut state);

        assert_eq!(state.modules.len(), 6);
        assert!(state.modules.iter().all(|m| m.joint.angle_z == 0.0));
    }

    #[test]
    fn when_event_is_invalid_then_simulation_keeps_previous_config() {
        let mut simulation =
            Simulation::new(SimulationConfig::default(), DynamicsProfile::canonical()).expect("valid");

        let result = simulation.apply(ControlEvent::SetModuleCount(5));

        assert_eq!(result, Err(ConfigError::UnsupportedModuleCount(5)));
        assert_eq!(simulation.config().module_count, 4);
    }

    #[test]
    fn when_events_are_applied_then_next_advance_uses_them() {
        let mut simulation =
            Simulation::new(SimulationConfig::default(), DynamicsProfile::canonical()).expect("valid");

        simulation
            .apply(ControlEvent::SetEnvironment(Environment::Vacuum))
            .expect("environment change");
        simulation.apply(ControlEvent::SetRotationRate(30.0)).expect("rpm change");
        simulation.apply(ControlEvent::SetActive(true)).expect("start");
        let update = simulation.advance(1.0 / 60.0);

        assert_eq!(update.tick, 1);
        assert_eq!(update.modules.len(), 4);
        assert_eq!(update.report.environment, Environment::Vacuum);
        assert_relative_eq!(update.report.ideal_joint_angle_deg, 90.0, epsilon = 1e-12);
        assert!(update.hub_angle > 0.0);
    }

    #[test]
    fn when_simulation_is_created_with_bad_config_then_it_fails_fast() {
        let config = SimulationConfig {
            occupant_mass: 10.0,
            ..SimulationConfig::default()
        };
        let result = Simulation::new(config, DynamicsProfile::canonical());
        assert!(matches!(result, Err(ConfigError::OccupantMassOutOfRange(_))));
    }
}
