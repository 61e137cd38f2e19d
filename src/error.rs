//! Unified error types for the flood guard.
//!
//! The decision engine has no error path; everything here belongs to the
//! boundary: loading configuration and sanitising raw gauge data.  All
//! variants are `Copy` so they can be logged and passed around freely.

use core::fmt;

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible boundary operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
    /// A sensor returned unusable data.
    Sensor(SensorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Raw level is NaN or infinite.
    NonFinite,
    /// Raw level is physically impossible (below the gauge floor).
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "reading not finite"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_subsystem() {
        let e: Error = ConfigError::ValidationFailed("alert_level must be below lockdown_level").into();
        assert_eq!(
            e.to_string(),
            "config: validation failed: alert_level must be below lockdown_level"
        );
        let e: Error = SensorError::NonFinite.into();
        assert_eq!(e.to_string(), "sensor: reading not finite");
    }
}
