//! Values threaded through the decision engine.
//!
//! `SensorReading` is what the gauge produced this cycle; `ActuatorState`
//! is what the barrier and pumps were told last cycle.  Both are small
//! `Copy` values: the engine takes them by value and hands back a fresh
//! `ActuatorState`, so nothing is ever mutated in place or aliased.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sensor reading (produced by the source each cycle)
// ---------------------------------------------------------------------------

/// One cycle's worth of water-level data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorReading {
    /// Water depth at the lowest point of the underpass (cm, >= 0).
    pub water_level_cm: f32,
    /// Change since the previous reading (cm/min).  Negative = falling.
    pub rise_rate_cm_per_min: f32,
}

impl SensorReading {
    pub const fn new(water_level_cm: f32, rise_rate_cm_per_min: f32) -> Self {
        Self {
            water_level_cm,
            rise_rate_cm_per_min,
        }
    }

    /// Bring a reading into the engine's input domain.
    ///
    /// Negative or NaN levels become `0.0`, a non-finite rate becomes `0.0`.
    /// `+inf` level is kept: it compares above every threshold, which is the
    /// safe reading of a saturated gauge.
    pub fn sanitized(self) -> Self {
        let level = if self.water_level_cm.is_nan() || self.water_level_cm < 0.0 {
            0.0
        } else {
            self.water_level_cm
        };
        let rate = if self.rise_rate_cm_per_min.is_finite() {
            self.rise_rate_cm_per_min
        } else {
            0.0
        };
        Self::new(level, rate)
    }
}

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Traffic barrier position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Barrier {
    Open,
    Closed,
}

/// Drainage pump bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pumps {
    On,
    Off,
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

impl fmt::Display for Pumps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
        }
    }
}

/// Output of the previous decision and input to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActuatorState {
    pub barrier: Barrier,
    pub pumps: Pumps,
}

impl ActuatorState {
    /// Road open, pumps idle.  Initial state at power-up.
    pub const NORMAL: Self = Self::new(Barrier::Open, Pumps::Off);
    /// Road open, pumps draining.
    pub const ALERT: Self = Self::new(Barrier::Open, Pumps::On);
    /// Road closed, pumps draining.  The safe configuration.
    pub const LOCKED: Self = Self::new(Barrier::Closed, Pumps::On);

    pub const fn new(barrier: Barrier, pumps: Pumps) -> Self {
        Self { barrier, pumps }
    }

    /// Composite mode, or `None` for `{Closed, Off}` which no rule produces.
    pub fn mode(self) -> Option<Mode> {
        match (self.barrier, self.pumps) {
            (Barrier::Open, Pumps::Off) => Some(Mode::Normal),
            (Barrier::Open, Pumps::On) => Some(Mode::Alert),
            (Barrier::Closed, Pumps::On) => Some(Mode::Locked),
            (Barrier::Closed, Pumps::Off) => None,
        }
    }

    pub fn barrier_closed(self) -> bool {
        self.barrier == Barrier::Closed
    }

    pub fn pumps_on(self) -> bool {
        self.pumps == Pumps::On
    }
}

impl Default for ActuatorState {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The three reachable actuator configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Normal,
    Alert,
    Locked,
}

impl Mode {
    pub const fn state(self) -> ActuatorState {
        match self {
            Self::Normal => ActuatorState::NORMAL,
            Self::Alert => ActuatorState::ALERT,
            Self::Locked => ActuatorState::LOCKED,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Alert => write!(f, "ALERT"),
            Self::Locked => write!(f, "LOCKED"),
        }
    }
}
