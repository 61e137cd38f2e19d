//! Actuator drivers.

pub mod barrier;
pub mod pump;
pub mod signage;
