//! Integration tests for the AppService → DecisionEngine → actuators pipeline.
//!
//! These run on the host and drive the full cycle (sense, decide,
//! actuate, report) against scripted readings.

use super::mock_hw::{MockConfig, MockHardware, RecordingSink};

use floodguard::adapters::time::NoPacer;
use floodguard::app::events::AppEvent;
use floodguard::app::ports::ConfigPort;
use floodguard::app::service::AppService;
use floodguard::config::SystemConfig;
use floodguard::decision::{ActuatorState, Mode, RuleId};
use std::time::Duration;

fn make_app(readings: &[(f32, f32)]) -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(&SystemConfig::default());
    let mut hw = MockHardware::scripted(readings);
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

#[test]
fn start_applies_normal_and_announces() {
    let (app, hw, sink) = make_app(&[(0.0, 0.0)]);
    assert_eq!(app.state(), ActuatorState::NORMAL);
    assert_eq!(hw.applied(), vec![ActuatorState::NORMAL]);
    assert!(matches!(
        &sink.events[0],
        AppEvent::Started { state, .. } if *state == ActuatorState::NORMAL
    ));
}

#[test]
fn full_flood_cycle_through_every_mode() {
    let (mut app, mut hw, mut sink) = make_app(&[
        (3.0, 0.5),   // hold NORMAL
        (6.0, 0.3),   // ALERT
        (4.0, 3.0),   // predictive LOCKED
        (16.0, -2.0), // critical, still LOCKED
        (4.0, -1.0),  // hysteresis gap, LOCKED
        (2.0, -1.0),  // NORMAL
    ]);
    let modes: Vec<_> = (0..6).map(|_| app.tick(&mut hw, &mut sink).decision.state.mode()).collect();
    assert_eq!(
        modes,
        vec![
            Some(Mode::Normal),
            Some(Mode::Alert),
            Some(Mode::Locked),
            Some(Mode::Locked),
            Some(Mode::Locked),
            Some(Mode::Normal),
        ]
    );
    assert_eq!(hw.last_applied(), Some(ActuatorState::NORMAL));
    // ALERT, predictive LOCKED, recovery NORMAL
    assert_eq!(sink.decisions(), 3);
}

#[test]
fn holding_cycles_emit_no_decision() {
    let (mut app, mut hw, mut sink) = make_app(&[(1.0, 0.1)]);
    for _ in 0..5 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(sink.decisions(), 0);
    assert!(!sink.events.iter().any(|e| matches!(e, AppEvent::ModeChanged { .. })));
}

#[test]
fn every_cycle_actuates_even_when_holding() {
    let (mut app, mut hw, mut sink) = make_app(&[(1.0, 0.1)]);
    for _ in 0..4 {
        app.tick(&mut hw, &mut sink);
    }
    // start + 4 cycles
    assert_eq!(hw.applied().len(), 5);
    let actuated = sink.events.iter().filter(|e| matches!(e, AppEvent::Actuated(_))).count();
    assert_eq!(actuated, 4);
}

#[test]
fn decision_event_names_the_rule() {
    let (mut app, mut hw, mut sink) = make_app(&[(15.0, 0.0)]);
    app.tick(&mut hw, &mut sink);
    let rule = sink.events.iter().find_map(|e| match e {
        AppEvent::Decision { rule, .. } => Some(*rule),
        _ => None,
    });
    assert_eq!(rule, Some(RuleId::CriticalLockdown));
    assert!(sink.events.iter().any(|e| matches!(
        e,
        AppEvent::ModeChanged { from: Some(Mode::Normal), to: Some(Mode::Locked) }
    )));
}

#[test]
fn alert_pumps_keep_running_as_water_recedes() {
    let (mut app, mut hw, mut sink) = make_app(&[(6.0, 0.5), (4.0, -2.0), (1.0, -3.0), (0.0, -1.0)]);
    for _ in 0..4 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(app.mode(), Some(Mode::Alert));
}

#[test]
fn run_paces_between_cycles_only() {
    let (mut app, mut hw, mut sink) = make_app(&[(1.0, 0.0)]);
    let mut pacer = NoPacer::new();
    let ran = app.run(12, Duration::from_millis(500), &mut hw, &mut sink, &mut pacer);
    assert_eq!(ran, 12);
    assert_eq!(app.cycle_count(), 12);
    assert_eq!(pacer.waits(), 11);
    assert_eq!(pacer.skipped(), Duration::from_millis(5500));
    assert!(matches!(sink.events.last(), Some(AppEvent::Finished { cycles: 12 })));
}

#[test]
fn zero_cycle_run_does_nothing() {
    let (mut app, mut hw, mut sink) = make_app(&[(20.0, 0.0)]);
    let mut pacer = NoPacer::new();
    app.run(0, Duration::from_millis(500), &mut hw, &mut sink, &mut pacer);
    assert_eq!(app.state(), ActuatorState::NORMAL);
    assert_eq!(pacer.waits(), 0);
}

#[test]
fn config_thresholds_reach_the_engine() {
    let mut cfg = SystemConfig::default();
    cfg.thresholds.alert_level = 8.0;
    let cfg = MockConfig(cfg).load().unwrap();
    let mut app = AppService::new(&cfg);
    let mut hw = MockHardware::scripted(&[(6.0, 0.3)]);
    let mut sink = RecordingSink::new();
    app.tick(&mut hw, &mut sink);
    assert_eq!(app.state(), ActuatorState::NORMAL);
    assert!((app.engine().thresholds().alert_level - 8.0).abs() < f32::EPSILON);
}

#[test]
fn invalid_config_never_loads() {
    let mut cfg = SystemConfig::default();
    cfg.thresholds.normalization_level = 6.0;
    assert!(MockConfig(cfg).load().is_err());
}
