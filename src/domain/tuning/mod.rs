// Dynamics tuning, kept apart from runtime configuration (tick rate, channel sizes).

pub mod arm_lag;
pub mod joint;
pub mod self_rotation;

pub use arm_lag::ArmLagTuning;
pub use joint::JointTuning;
pub use self_rotation::SelfRotationTuning;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Named tuning profiles. Constants are never mixed between profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    #[default]
    Canonical,
    Hinge,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 2] = [ProfileKind::Canonical, ProfileKind::Hinge];

    pub fn profile(self) -> DynamicsProfile {
        match self {
            ProfileKind::Canonical => DynamicsProfile::canonical(),
            ProfileKind::Hinge => DynamicsProfile::hinge(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::Canonical => "canonical",
            ProfileKind::Hinge => "hinge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tuning profile `{0}`")]
pub struct UnknownProfile(pub String);

impl FromStr for ProfileKind {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ProfileKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

/// Complete set of solver constants for one simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsProfile {
    pub kind: ProfileKind,
    pub joint: JointTuning,
    pub arm_lag: ArmLagTuning,
    pub self_rotation: SelfRotationTuning,
}

impl DynamicsProfile {
    pub fn canonical() -> Self {
        Self {
            kind: ProfileKind::Canonical,
            joint: JointTuning::default(),
            arm_lag: ArmLagTuning::default(),
            self_rotation: SelfRotationTuning::default(),
        }
    }

    /// Alternate profile: a 60° hinge stop, slightly heavier damping and an arm that
    /// follows its target without lag.
    pub fn hinge() -> Self {
        Self {
            kind: ProfileKind::Hinge,
            joint: JointTuning::hinge(),
            arm_lag: ArmLagTuning::unfiltered(),
            self_rotation: SelfRotationTuning::default(),
        }
    }
}

impl Default for DynamicsProfile {
    fn default() -> Self {
        Self::canonical()
    }
}
