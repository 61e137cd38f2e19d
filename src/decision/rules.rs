//! Concrete rule guards and the static rule table.
//!
//! Each rule is a plain `fn` guard plus the state it commands.  The table
//! is ordered by priority and evaluated top to bottom; the first guard
//! that holds decides the cycle.  Rules 2 and 3 overlap in level range, so
//! the order is load-bearing.
//!
//! ```text
//!  NORMAL ──[level >= alert]──────────────▶ ALERT
//!    │                                        │
//!    │ [level >= lockdown | fast rise]        │ [level >= lockdown | fast rise]
//!    ▼                                        ▼
//!  LOCKED ◀───────────────────────────────────┘
//!    │
//!    └──[level < normalization]──▶ NORMAL
//! ```

use super::state::{ActuatorState, Barrier, SensorReading};
use super::{RuleDescriptor, RuleId};
use crate::config::Thresholds;

/// Fraction of the alert level above which a fast rise triggers an early
/// lockdown.
pub const PREDICTIVE_LEVEL_FACTOR: f32 = 0.5;

// ═══════════════════════════════════════════════════════════════════════════
//  Table
// ═══════════════════════════════════════════════════════════════════════════

/// Priority-ordered rule table.  The final entry always matches.
pub static RULE_TABLE: [RuleDescriptor; RuleId::COUNT] = [
    RuleDescriptor {
        id: RuleId::CriticalLockdown,
        name: "critical lockdown",
        guard: critical_lockdown,
        outcome: lock_down,
    },
    RuleDescriptor {
        id: RuleId::PredictiveLockdown,
        name: "predictive lockdown",
        guard: predictive_lockdown,
        outcome: lock_down,
    },
    RuleDescriptor {
        id: RuleId::AlertPumps,
        name: "alert pumps",
        guard: alert_pumps,
        outcome: start_pumps,
    },
    RuleDescriptor {
        id: RuleId::HysteresisRecovery,
        name: "hysteresis recovery",
        guard: hysteresis_recovery,
        outcome: reopen,
    },
    RuleDescriptor {
        id: RuleId::Hold,
        name: "hold",
        guard: always,
        outcome: hold,
    },
];

// ═══════════════════════════════════════════════════════════════════════════
//  Guards
// ═══════════════════════════════════════════════════════════════════════════

fn critical_lockdown(t: &Thresholds, _prev: ActuatorState, r: &SensorReading) -> bool {
    r.water_level_cm >= t.lockdown_level
}

fn predictive_lockdown(t: &Thresholds, prev: ActuatorState, r: &SensorReading) -> bool {
    r.rise_rate_cm_per_min > t.predictive_rise_rate
        && r.water_level_cm > t.alert_level * PREDICTIVE_LEVEL_FACTOR
        && prev.barrier != Barrier::Closed
}

fn alert_pumps(t: &Thresholds, prev: ActuatorState, r: &SensorReading) -> bool {
    // The barrier guard never bites after rules 1–2, but it stays explicit.
    r.water_level_cm >= t.alert_level && prev.barrier == Barrier::Open
}

fn hysteresis_recovery(t: &Thresholds, prev: ActuatorState, r: &SensorReading) -> bool {
    r.water_level_cm < t.normalization_level && prev.barrier == Barrier::Closed
}

fn always(_t: &Thresholds, _prev: ActuatorState, _r: &SensorReading) -> bool {
    true
}

// ═══════════════════════════════════════════════════════════════════════════
//  Outcomes
// ═══════════════════════════════════════════════════════════════════════════

fn lock_down(_prev: ActuatorState) -> ActuatorState {
    ActuatorState::LOCKED
}

fn start_pumps(_prev: ActuatorState) -> ActuatorState {
    ActuatorState::ALERT
}

fn reopen(_prev: ActuatorState) -> ActuatorState {
    ActuatorState::NORMAL
}

// No rule turns the pumps off from ALERT; they run until a lockdown and
// its recovery bring the site back to NORMAL.
fn hold(prev: ActuatorState) -> ActuatorState {
    prev
}
