//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (console log or test capture).

use crate::decision::{ActuatorState, Barrier, Mode, Pumps, RuleId, SensorReading};
use crate::drivers::signage::Signage;
use crate::sensors::SensorSnapshot;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries site name and initial state).
    Started { site: String, state: ActuatorState },

    /// A cycle began and the sensors were sampled.
    SensorsRead { cycle: u32, snapshot: SensorSnapshot },

    /// A rule changed the actuator state.
    Decision {
        rule: RuleId,
        from: ActuatorState,
        to: ActuatorState,
        reading: SensorReading,
    },

    /// The composite mode changed (`None` only for the unreachable
    /// closed-barrier/pumps-off combination).
    ModeChanged { from: Option<Mode>, to: Option<Mode> },

    /// The decided state was applied to the actuators.
    Actuated(TelemetryData),

    /// The run loop completed.
    Finished { cycles: u32 },
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub cycle: u32,
    pub water_level_cm: f32,
    pub rise_rate_cm_per_min: f32,
    pub traffic_detected: bool,
    pub barrier: Barrier,
    pub pumps: Pumps,
    pub signage: Signage,
}
