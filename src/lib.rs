//! Underpass flood guard library.
//!
//! The decision engine ([`decision`]) is a pure function from
//! (previous actuator state, sensor reading) to the next actuator state.
//! Everything around it (sensors, drivers, adapters, the cycle driver in
//! [`app`]) exists to feed it and act on its output.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod decision;
pub mod drivers;
pub mod error;
pub mod sensors;
