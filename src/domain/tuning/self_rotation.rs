/// Tuning for counter-rotation under rotation lock.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfRotationTuning {
    /// Rate at which a stopped module unwinds toward the arm under gravity, in 1/s.
    pub return_rate: f64,
}

impl Default for SelfRotationTuning {
    fn default() -> Self {
        Self { return_rate: 3.0 }
    }
}
