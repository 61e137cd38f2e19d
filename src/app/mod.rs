//! Application core: the control loop, with zero direct I/O.
//!
//! This module drives the decision engine cycle by cycle.  All interaction
//! with sensors, actuators, clocks, and storage happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
