use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard Earth gravity in m/s², also the unit for "g" ratios.
pub const EARTH_GRAVITY: f64 = 9.81;

/// Gravity environment the hub operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Earth,
    Moon,
    Mars,
    Vacuum,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Earth,
        Environment::Moon,
        Environment::Mars,
        Environment::Vacuum,
    ];

    /// Gravity magnitude in m/s². Vacuum is exactly zero.
    pub fn gravity(self) -> f64 {
        match self {
            Environment::Earth => EARTH_GRAVITY,
            Environment::Moon => 1.62,
            Environment::Mars => 3.71,
            Environment::Vacuum => 0.0,
        }
    }

    /// True when nothing pulls a stopped module back to neutral.
    pub fn is_vacuum(self) -> bool {
        matches!(self, Environment::Vacuum)
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Earth => "earth",
            Environment::Moon => "moon",
            Environment::Mars => "mars",
            Environment::Vacuum => "vacuum",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
