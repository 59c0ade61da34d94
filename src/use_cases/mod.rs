// Use cases layer: stepping workflow and the tick loop around it.

pub mod schedule;
pub mod simulation;
pub mod types;

pub use simulation::{MAX_STEP, Simulation, simulation_task, step, step_with_profile};
pub use types::{ControlEvent, ScheduledEvent, SimulationUpdate};
