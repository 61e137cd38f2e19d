//! System configuration parameters
//!
//! Calibration thresholds for the decision engine, cycle timing, and the
//! rain/drain model used by the simulated gauge.  Loaded once at startup
//! (JSON file or defaults) and never mutated while the loop runs.

use serde::{Deserialize, Serialize};

use crate::app::ports::{ConfigError, ConfigPort};

/// The four calibration constants the decision engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Water level (cm) at which pumps start while the road stays open.
    pub alert_level: f32,
    /// Water level (cm) that forces barrier closed and pumps on.
    pub lockdown_level: f32,
    /// Water level (cm) that must be undercut before a locked site reopens.
    pub normalization_level: f32,
    /// Rise rate (cm/min) that triggers a lockdown before `lockdown_level`.
    pub predictive_rise_rate: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alert_level: 5.0,
            lockdown_level: 15.0,
            normalization_level: 3.0,
            predictive_rise_rate: 2.5,
        }
    }
}

impl Thresholds {
    /// Check `normalization < alert < lockdown` and a positive rise rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.alert_level,
            self.lockdown_level,
            self.normalization_level,
            self.predictive_rise_rate,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationFailed("thresholds must be finite"));
        }
        if self.normalization_level < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "normalization_level must be >= 0",
            ));
        }
        if self.normalization_level >= self.alert_level {
            return Err(ConfigError::ValidationFailed(
                "normalization_level must be below alert_level",
            ));
        }
        if self.alert_level >= self.lockdown_level {
            return Err(ConfigError::ValidationFailed(
                "alert_level must be below lockdown_level",
            ));
        }
        if self.predictive_rise_rate <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "predictive_rise_rate must be positive",
            ));
        }
        Ok(())
    }
}

/// Parameters of the simulated water-level gauge and traffic camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Per-cycle level change (cm) while it rains and nothing drains.
    pub rain_delta_cm: (f32, f32),
    /// Per-cycle level change (cm) while the site is locked and pumping.
    pub drain_delta_cm: (f32, f32),
    /// Probability (0–1) that the camera reports traffic in a cycle.
    pub traffic_probability: f64,
    /// RNG seed for reproducible runs; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rain_delta_cm: (0.1, 3.5),
            drain_delta_cm: (-1.0, 1.5),
            traffic_probability: 0.75,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !valid_range(self.rain_delta_cm) {
            return Err(ConfigError::ValidationFailed("rain_delta_cm range is empty"));
        }
        if !valid_range(self.drain_delta_cm) {
            return Err(ConfigError::ValidationFailed("drain_delta_cm range is empty"));
        }
        if !(0.0..=1.0).contains(&self.traffic_probability) {
            return Err(ConfigError::ValidationFailed(
                "traffic_probability must be within 0..=1",
            ));
        }
        Ok(())
    }
}

fn valid_range((lo, hi): (f32, f32)) -> bool {
    lo.is_finite() && hi.is_finite() && lo < hi
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Display name of the monitored underpass.
    pub site_name: String,

    // --- Decision ---
    pub thresholds: Thresholds,

    // --- Timing ---
    /// Number of control cycles in one run.
    pub cycle_count: u32,
    /// Pause between cycles (milliseconds).
    pub cycle_interval_ms: u32,

    // --- Simulation ---
    pub simulation: SimulationConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            site_name: String::from("Tesourinha do Eixão"),
            thresholds: Thresholds::default(),
            cycle_count: 12,
            cycle_interval_ms: 500,
            simulation: SimulationConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Reject configurations the control loop must not run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("site_name must not be empty"));
        }
        if self.cycle_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("cycle_interval_ms must be > 0"));
        }
        self.thresholds.validate()?;
        self.simulation.validate()
    }

    /// Cycle period as a `Duration`.
    pub fn cycle_interval(&self) -> core::time::Duration {
        core::time::Duration::from_millis(u64::from(self.cycle_interval_ms))
    }

    /// Compact binary encoding for snapshots.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Corrupted)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)
    }
}

/// Load through `port` and validate, whatever the port itself checks.
pub fn load_validated(port: &impl ConfigPort) -> crate::error::Result<SystemConfig> {
    let config = port.load()?;
    config.validate()?;
    Ok(config)
}
