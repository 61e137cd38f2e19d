//! Port traits: the hexagonal boundary between the control loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (gauge, barrier/pumps, event sinks, config storage,
//! cycle pacing) implement these traits.  The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the decision engine never touches I/O directly.

use core::time::Duration;

use crate::config::SystemConfig;
use crate::decision::{ActuatorState, Barrier, Pumps};
use crate::sensors::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: field → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle.
///
/// Implementations own the previous water level and derive the rise rate
/// from it; the snapshot they return is already sanitised.
pub trait SensorPort {
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → field)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the barrier and pumps.
pub trait ActuatorPort {
    /// Drive both actuators to `state`.
    fn apply(&mut self, state: ActuatorState);

    /// Last commanded barrier position.
    fn barrier(&self) -> Barrier;

    /// Last commanded pump state.
    fn pumps(&self) -> Pumps;

    /// Barrier closed, pumps on. The configuration every fault falls back to.
    fn all_safe(&mut self) {
        self.apply(ActuatorState::LOCKED);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Pacer port (driven adapter: domain → clock)
// ───────────────────────────────────────────────────────────────

/// Blocks between cycles.  The decision engine never waits; only the
/// cycle driver does, through this port.
pub trait Pacer {
    fn wait(&mut self, period: Duration);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate before persisting and after loading.
/// Invalid values are rejected with [`ConfigError::ValidationFailed`],
/// never silently clamped.
pub trait ConfigPort {
    /// Load configuration.  Returns [`SystemConfig::default()`] if no
    /// stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config failed deserialisation.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
