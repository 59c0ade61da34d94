// Process bootstrap for the headless simulation runner.

use crate::domain::{ConfigError, SimulationConfig};
use crate::frameworks::config::{self, RuntimeSettings};
use crate::interface_adapters::scenario::{Scenario, ScenarioError, load_scenario};
use crate::interface_adapters::telemetry::telemetry_writer;
use crate::use_cases::schedule::replay_schedule;
use crate::use_cases::{ControlEvent, Simulation, SimulationUpdate, simulation_task};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Notify, broadcast, mpsc};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("telemetry output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("simulation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Telemetry owns stdout; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs a scenario until `settings.run_duration` elapses or Ctrl-C, writing
/// telemetry lines to stdout. Returns the final simulation.
pub async fn run(scenario: Scenario, settings: RuntimeSettings) -> Result<Simulation, RunError> {
    if settings.tick_interval.is_zero() {
        tracing::error!("tick interval is zero; refusing to start");
        return Err(RunError::InvalidTickInterval);
    }

    let profile = settings
        .profile_override
        .map(|kind| kind.profile())
        .unwrap_or(scenario.profile);
    let simulation = Simulation::new(scenario.config, profile).inspect_err(|e| {
        tracing::error!(error = %e, "scenario configuration rejected");
    })?;

    let (control_tx, control_rx) = mpsc::channel::<ControlEvent>(config::CONTROL_CHANNEL_CAPACITY);
    // The telemetry receiver exists before the loop starts so the first ticks are kept.
    let (update_tx, telemetry_rx) =
        broadcast::channel::<SimulationUpdate>(config::UPDATE_BROADCAST_CAPACITY);
    let shutdown = Arc::new(Notify::new());

    let telemetry_every = settings.telemetry_every;
    let telemetry = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        telemetry_writer(telemetry_rx, &mut stdout, telemetry_every).await
    });

    let schedule = tokio::spawn(replay_schedule(scenario.events, control_tx));

    let world = tokio::spawn(simulation_task(
        simulation,
        control_rx,
        update_tx,
        settings.tick_interval,
        shutdown.clone(),
    ));

    match settings.run_duration {
        Some(duration) => {
            tokio::select! {
                _ = tokio::time::sleep(duration) => {
                    tracing::info!(seconds = duration.as_secs_f64(), "run duration reached");
                }
                _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
            }
        }
        None => {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("interrupted");
        }
    }

    shutdown.notify_one();
    schedule.abort();
    let simulation = world.await?;

    // The update sender was dropped with the task, so the writer drains and exits.
    let lines = telemetry.await??;
    tracing::info!(
        ticks = simulation.state().tick,
        telemetry_lines = lines,
        "run finished"
    );
    tracing::info!("final readout\n{}", simulation.report());

    Ok(simulation)
}

pub async fn run_with_config() -> Result<(), RunError> {
    init_runtime();

    let settings = RuntimeSettings::from_env();
    let scenario = match &settings.scenario_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            load_scenario(path).await.inspect_err(|e| {
                tracing::error!(error = %e, "failed to load scenario");
            })?
        }
        None => {
            tracing::info!("no scenario configured; spinning up the default hub");
            Scenario {
                config: SimulationConfig {
                    active: true,
                    ..SimulationConfig::default()
                },
                ..Scenario::default()
            }
        }
    };

    run(scenario, settings).await.map(|_| ())
}
