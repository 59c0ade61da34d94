// Per-tick update rules. Each system mutates only the state it owns.

pub mod arm_lag;
pub mod hub_rotation;
pub mod joint;
pub mod self_rotation;
