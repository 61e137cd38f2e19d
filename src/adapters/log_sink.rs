//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each cycle to the console through
//! the `log` facade: a sensor line, any decision, and an actuator line.
//! A telemetry uplink would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::decision::{Mode, RuleId};

const RULE_WIDTH: usize = 60;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_label(mode: Option<Mode>) -> String {
    mode.map_or_else(|| String::from("UNDEFINED"), |m| m.to_string())
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { site, state } => {
                info!("START | site={} | barrier={} pumps={}", site, state.barrier, state.pumps);
                info!("{}", "-".repeat(RULE_WIDTH));
            }
            AppEvent::SensorsRead { cycle, snapshot } => {
                info!("--- CYCLE {} ---", cycle);
                info!(
                    "SENSORS | level={:.2} cm | rate={:.2} cm/min | traffic={}",
                    snapshot.reading.water_level_cm,
                    snapshot.reading.rise_rate_cm_per_min,
                    if snapshot.traffic_detected { "YES" } else { "NO" },
                );
            }
            AppEvent::Decision { rule, from, to, reading } => {
                let line = format!(
                    "DECISION | {} | level={:.2} rate={:.2} | barrier {}->{} pumps {}->{}",
                    rule.name(),
                    reading.water_level_cm,
                    reading.rise_rate_cm_per_min,
                    from.barrier,
                    to.barrier,
                    from.pumps,
                    to.pumps,
                );
                if matches!(rule, RuleId::CriticalLockdown | RuleId::PredictiveLockdown) {
                    warn!("{line}");
                } else {
                    info!("{line}");
                }
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {} -> {}", mode_label(*from), mode_label(*to));
            }
            AppEvent::Actuated(t) => {
                info!(
                    "ACTUATORS | barrier={} | pumps={} | sign={}",
                    t.barrier, t.pumps, t.signage
                );
                info!("{}", "-".repeat(RULE_WIDTH));
            }
            AppEvent::Finished { cycles } => {
                info!("FINISHED | cycles={}", cycles);
            }
        }
    }
}
