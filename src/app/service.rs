//! Application service: the cycle driver.
//!
//! [`AppService`] owns the decision engine and the one piece of state that
//! survives between cycles: the last commanded [`ActuatorState`].  Each
//! cycle it pulls a snapshot, asks the engine for the next state, applies
//! it, and reports what happened.  All I/O flows through port traits
//! injected at call sites, so the whole loop runs against mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AppService         │
//! ActuatorPort ◀──│  DecisionEngine · state │ ──▶ Pacer
//!                 └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::decision::{ActuatorState, Decision, DecisionEngine, Mode, RuleId};
use crate::drivers::signage::Signage;
use crate::sensors::SensorSnapshot;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, Pacer, SensorPort};

// ───────────────────────────────────────────────────────────────
// Cycle report
// ───────────────────────────────────────────────────────────────

/// What one call to [`AppService::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u32,
    pub snapshot: SensorSnapshot,
    pub previous: ActuatorState,
    pub decision: Decision,
}

impl CycleReport {
    pub fn changed(&self) -> bool {
        self.previous != self.decision.state
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    engine: DecisionEngine,
    site: String,
    state: ActuatorState,
    cycle: u32,
    last_snapshot: SensorSnapshot,
}

impl AppService {
    /// Construct the service.  Starts in NORMAL (barrier open, pumps off).
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            engine: DecisionEngine::new(config.thresholds),
            site: config.site_name.clone(),
            state: ActuatorState::NORMAL,
            cycle: 0,
            last_snapshot: SensorSnapshot::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the actuators to the initial state and announce the start.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.apply(self.state);
        sink.emit(&AppEvent::Started {
            site: self.site.clone(),
            state: self.state,
        });
        info!("[{}] control loop initialised in {:?}", self.site, self.state.mode());
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: read sensors → decide → actuate.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`]; the simulated gauge reacts to the actuators, so
    /// one adapter owns both sides.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle = self.cycle.saturating_add(1);
        let previous = self.state;

        // 1. Sense
        let snapshot = hw.read_all();
        self.last_snapshot = snapshot;
        sink.emit(&AppEvent::SensorsRead {
            cycle: self.cycle,
            snapshot,
        });

        // 2. Decide (pure)
        let decision = self.engine.evaluate(previous, snapshot.reading);
        debug!("Cycle {}: rule '{}'", self.cycle, decision.rule.name());

        if decision.state != previous {
            self.log_decision(decision, &snapshot);
            sink.emit(&AppEvent::Decision {
                rule: decision.rule,
                from: previous,
                to: decision.state,
                reading: snapshot.reading,
            });
            let (from, to) = (previous.mode(), decision.state.mode());
            if from != to {
                sink.emit(&AppEvent::ModeChanged { from, to });
            }
        }

        // 3. Actuate
        self.state = decision.state;
        hw.apply(self.state);
        sink.emit(&AppEvent::Actuated(self.build_telemetry()));

        CycleReport {
            cycle: self.cycle,
            snapshot,
            previous,
            decision,
        }
    }

    /// Fixed-length run: `cycles` ticks with `pacer` waiting between them.
    /// No wait follows the final cycle.  Returns the number of cycles run.
    pub fn run(
        &mut self,
        cycles: u32,
        period: core::time::Duration,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
        pacer: &mut impl Pacer,
    ) -> u32 {
        for n in 0..cycles {
            if n > 0 {
                pacer.wait(period);
            }
            self.tick(hw, sink);
        }
        sink.emit(&AppEvent::Finished { cycles });
        info!("[{}] run complete after {} cycles, final mode {:?}", self.site, cycles, self.mode());
        cycles
    }

    // ── Queries ───────────────────────────────────────────────

    /// Telemetry for the most recent cycle.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            cycle: self.cycle,
            water_level_cm: self.last_snapshot.reading.water_level_cm,
            rise_rate_cm_per_min: self.last_snapshot.reading.rise_rate_cm_per_min,
            traffic_detected: self.last_snapshot.traffic_detected,
            barrier: self.state.barrier,
            pumps: self.state.pumps,
            signage: Signage::for_barrier(self.state.barrier),
        }
    }

    /// Last commanded actuator state.
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    pub fn mode(&self) -> Option<Mode> {
        self.state.mode()
    }

    /// Cycles executed since construction.
    pub fn cycle_count(&self) -> u32 {
        self.cycle
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    // ── Internal ──────────────────────────────────────────────

    fn log_decision(&self, decision: Decision, snap: &SensorSnapshot) {
        let level = snap.reading.water_level_cm;
        let rate = snap.reading.rise_rate_cm_per_min;
        match decision.rule {
            RuleId::CriticalLockdown => warn!(
                "CRITICAL: lockdown level reached ({:.2} cm), barrier closed, pumps on",
                level
            ),
            RuleId::PredictiveLockdown => warn!(
                "PREDICTIVE: fast rise ({:.2} cm/min at {:.2} cm), early lockdown",
                rate, level
            ),
            RuleId::AlertPumps => info!(
                "ALERT: level {:.2} cm, pumps on, traffic warning issued",
                level
            ),
            RuleId::HysteresisRecovery => info!(
                "NORMAL: level safe ({:.2} cm), underpass reopened, pumps off",
                level
            ),
            RuleId::Hold => {}
        }
    }
}
