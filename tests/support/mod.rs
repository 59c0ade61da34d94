// Shared helpers for the integration tests.
#![allow(dead_code)]

use hub_sim::domain::{AcceptedConfig, PhysicsReport, SimulationConfig, SimulationState};
use hub_sim::step;

pub const DT: f64 = 1.0 / 60.0;

pub fn accepted(config: SimulationConfig) -> AcceptedConfig {
    config.validate().expect("test config should be valid")
}

/// Steps `state` at 60 Hz for `seconds` and returns the last readout.
pub fn run_for(seconds: f64, config: &AcceptedConfig, state: &mut SimulationState) -> PhysicsReport {
    let ticks = (seconds / DT).round() as u64;
    let mut report = step(0.0, config, state);
    for _ in 0..ticks {
        report = step(DT, config, state);
    }
    report
}

/// Small deterministic generator so property sweeps are reproducible.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}
