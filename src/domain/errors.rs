// Domain-level errors raised when a configuration is accepted for stepping.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rotation rate {0} rpm is outside 0..=60")]
    RotationRateOutOfRange(f64),

    #[error("occupant mass {0} kg is outside 40..=120")]
    OccupantMassOutOfRange(f64),

    #[error("connecting arm length {0} m is outside 0.3..=2.0")]
    ArmLengthOutOfRange(f64),

    #[error("module count {0} is not one of 1, 2, 4, 6, 8")]
    UnsupportedModuleCount(u8),

    #[error("module scale {0} must be a positive finite number")]
    InvalidModuleScale(f64),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}
