// Scenario files: initial configuration, tuning profile and a timed control script.

use super::protocol::ScenarioDto;
use crate::domain::{DynamicsProfile, SimulationConfig};
use crate::use_cases::{ControlEvent, ScheduledEvent};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("event offset {0} s is not a finite, non-negative duration")]
    InvalidEventOffset(f64),
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: SimulationConfig,
    pub profile: DynamicsProfile,
    pub events: Vec<ScheduledEvent>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            profile: DynamicsProfile::canonical(),
            events: Vec::new(),
        }
    }
}

impl TryFrom<ScenarioDto> for Scenario {
    type Error = ScenarioError;

    fn try_from(dto: ScenarioDto) -> Result<Self, Self::Error> {
        let config = dto.config();
        let events = dto
            .events
            .into_iter()
            .map(|scheduled| {
                // Rejects negative, non-finite and overflowing offsets alike.
                let at = Duration::try_from_secs_f64(scheduled.at)
                    .map_err(|_| ScenarioError::InvalidEventOffset(scheduled.at))?;
                Ok(ScheduledEvent {
                    at,
                    event: ControlEvent::from(scheduled.action),
                })
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        Ok(Self {
            config,
            profile: dto.profile.profile(),
            events,
        })
    }
}

/// Parses scenario TOML. Range checks on the config happen when the simulation
/// accepts it, not here.
pub fn parse_scenario(text: &str) -> Result<Scenario, ScenarioError> {
    let dto: ScenarioDto = toml::from_str(text)?;
    Scenario::try_from(dto)
}

pub async fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_scenario(&text)
}
