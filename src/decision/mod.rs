//! Barrier/pump decision engine.
//!
//! A priority-ordered rule table evaluated as a pure function:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  RULE_TABLE (first match wins)                               │
//! │  ┌─────┬─────────────────────┬──────────────┬─────────────┐  │
//! │  │ #   │ RuleId              │ guard        │ outcome     │  │
//! │  ├─────┼─────────────────────┼──────────────┼─────────────┤  │
//! │  │ 1   │ CriticalLockdown    │ fn(t,s,r)    │ LOCKED      │  │
//! │  │ 2   │ PredictiveLockdown  │ fn(t,s,r)    │ LOCKED      │  │
//! │  │ 3   │ AlertPumps          │ fn(t,s,r)    │ ALERT       │  │
//! │  │ 4   │ HysteresisRecovery  │ fn(t,s,r)    │ NORMAL      │  │
//! │  │ 5   │ Hold                │ always       │ previous    │  │
//! │  └─────┴─────────────────────┴──────────────┴─────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine owns nothing but its thresholds.  The caller threads the
//! returned [`ActuatorState`] into the next call.  No I/O, no logging, no
//! failure path: every input (after [`SensorReading::sanitized`]) maps to
//! exactly one output.

pub mod rules;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use rules::RULE_TABLE;
pub use state::{ActuatorState, Barrier, Mode, Pumps, SensorReading};

// ---------------------------------------------------------------------------
// Rule identity
// ---------------------------------------------------------------------------

/// Every rule in priority order.  Must stay in sync with [`RULE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RuleId {
    CriticalLockdown = 0,
    PredictiveLockdown = 1,
    AlertPumps = 2,
    HysteresisRecovery = 3,
    Hold = 4,
}

impl RuleId {
    /// Total number of rules; sizes the table array.
    pub const COUNT: usize = 5;

    /// Human-readable rule name from the table.
    pub fn name(self) -> &'static str {
        RULE_TABLE[self as usize].name
    }
}

// ---------------------------------------------------------------------------
// Table row
// ---------------------------------------------------------------------------

/// Guard: does this rule apply to `(thresholds, previous, reading)`?
pub type RuleGuardFn = fn(&Thresholds, ActuatorState, &SensorReading) -> bool;

/// Outcome: the state commanded when the guard holds.
pub type RuleOutcomeFn = fn(ActuatorState) -> ActuatorState;

/// Static descriptor for one rule.
pub struct RuleDescriptor {
    pub id: RuleId,
    pub name: &'static str,
    pub guard: RuleGuardFn,
    pub outcome: RuleOutcomeFn,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Result of one evaluation: the next state and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub state: ActuatorState,
    pub rule: RuleId,
}

/// Evaluate the rule table for one cycle.
pub fn evaluate(
    thresholds: &Thresholds,
    previous: ActuatorState,
    reading: SensorReading,
) -> Decision {
    let reading = reading.sanitized();
    RULE_TABLE
        .iter()
        .find(|rule| (rule.guard)(thresholds, previous, &reading))
        .map_or(
            Decision {
                state: previous,
                rule: RuleId::Hold,
            },
            |rule| Decision {
                state: (rule.outcome)(previous),
                rule: rule.id,
            },
        )
}

/// Next actuator state for `(previous, reading)`.
pub fn decide(
    thresholds: &Thresholds,
    previous: ActuatorState,
    reading: SensorReading,
) -> ActuatorState {
    evaluate(thresholds, previous, reading).state
}

/// Thresholds bound to the decision function.
///
/// Stateless and `Copy`; safe to share across threads or call from
/// anywhere, though the control loop only ever calls it sequentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionEngine {
    thresholds: Thresholds,
}

impl DecisionEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn decide(&self, previous: ActuatorState, reading: SensorReading) -> ActuatorState {
        decide(&self.thresholds, previous, reading)
    }

    pub fn evaluate(&self, previous: ActuatorState, reading: SensorReading) -> Decision {
        evaluate(&self.thresholds, previous, reading)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
