use crate::domain::tuning::ProfileKind;
use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not dynamics tuning).

pub const CONTROL_CHANNEL_CAPACITY: usize = 64;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_HZ: u32 = 60;
pub const MAX_TICK_HZ: u32 = 1_000;

pub fn tick_interval() -> Duration {
    tick_interval_from_hz(env::var("HUB_SIM_TICK_HZ").ok().as_deref())
}

// Rates outside 1..=MAX_TICK_HZ fall back to the default so the period is never zero.
fn tick_interval_from_hz(raw: Option<&str>) -> Duration {
    let hz = match raw.map(|v| v.trim().parse::<u32>()) {
        None => DEFAULT_TICK_HZ,
        Some(Ok(hz)) if (1..=MAX_TICK_HZ).contains(&hz) => hz,
        Some(_) => {
            tracing::warn!(
                value = raw.unwrap_or_default(),
                max = MAX_TICK_HZ,
                "invalid HUB_SIM_TICK_HZ; using default"
            );
            DEFAULT_TICK_HZ
        }
    };
    Duration::from_nanos(1_000_000_000 / u64::from(hz))
}

pub fn scenario_path() -> Option<PathBuf> {
    env::var_os("HUB_SIM_SCENARIO")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// Zero runs until interrupted.
pub fn run_duration() -> Option<Duration> {
    let secs = env::var("HUB_SIM_DURATION_SECS")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)?;
    Some(Duration::from_secs_f64(secs))
}

pub fn telemetry_every() -> u64 {
    env::var("HUB_SIM_TELEMETRY_EVERY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// Profile override; when unset the scenario's own choice stands.
pub fn profile_override() -> Option<ProfileKind> {
    parse_profile(&env::var("HUB_SIM_PROFILE").ok()?)
}

fn parse_profile(raw: &str) -> Option<ProfileKind> {
    raw.parse()
        .inspect_err(|e| tracing::warn!(error = %e, "ignoring HUB_SIM_PROFILE"))
        .ok()
}

/// Everything the runner reads from the environment, gathered once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub tick_interval: Duration,
    pub scenario_path: Option<PathBuf>,
    pub run_duration: Option<Duration>,
    pub telemetry_every: u64,
    pub profile_override: Option<ProfileKind>,
}

impl RuntimeSettings {
    pub fn from_env() -> Self {
        Self {
            tick_interval: tick_interval(),
            scenario_path: scenario_path(),
            run_duration: run_duration(),
            telemetry_every: telemetry_every(),
            profile_override: profile_override(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            tick_interval: tick_interval_from_hz(None),
            scenario_path: None,
            run_duration: None,
            telemetry_every: 30,
            profile_override: None,
        }
    }
}
