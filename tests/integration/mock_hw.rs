//! Mock site adapter for integration tests.
//!
//! Replays a scripted list of readings and records every actuator call so
//! tests can assert on the full command history.

use floodguard::app::events::AppEvent;
use floodguard::app::ports::{ActuatorPort, ConfigError, ConfigPort, EventSink, SensorPort};
use floodguard::config::SystemConfig;
use floodguard::decision::{ActuatorState, Barrier, Pumps, SensorReading};
use floodguard::sensors::SensorSnapshot;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    Apply(ActuatorState),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    readings: Vec<SensorReading>,
    next: usize,
}

#[allow(dead_code)]
impl MockHardware {
    /// Replays `(level, rate)` pairs in order; the last one repeats.
    pub fn scripted(readings: &[(f32, f32)]) -> Self {
        Self {
            calls: Vec::new(),
            readings: readings
                .iter()
                .map(|&(level, rate)| SensorReading::new(level, rate))
                .collect(),
            next: 0,
        }
    }

    pub fn last_applied(&self) -> Option<ActuatorState> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::Apply(s) => Some(*s),
        })
    }

    pub fn applied(&self) -> Vec<ActuatorState> {
        self.calls
            .iter()
            .map(|c| match c {
                ActuatorCall::Apply(s) => *s,
            })
            .collect()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> SensorSnapshot {
        let idx = self.next.min(self.readings.len().saturating_sub(1));
        self.next += 1;
        SensorSnapshot {
            reading: self.readings.get(idx).copied().unwrap_or_default(),
            traffic_detected: true,
        }
    }
}

impl ActuatorPort for MockHardware {
    fn apply(&mut self, state: ActuatorState) {
        self.calls.push(ActuatorCall::Apply(state));
    }

    fn barrier(&self) -> Barrier {
        self.last_applied().map_or(Barrier::Open, |s| s.barrier)
    }

    fn pumps(&self) -> Pumps {
        self.last_applied().map_or(Pumps::Off, |s| s.pumps)
    }
}

// ── MockConfig ────────────────────────────────────────────────

pub struct MockConfig(pub SystemConfig);

impl ConfigPort for MockConfig {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        self.0.validate()?;
        Ok(self.0.clone())
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        config.validate()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn decisions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Decision { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
