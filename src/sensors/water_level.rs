//! Ultrasonic water-level gauge and the rise-rate tracker fed by it.
//!
//! The gauge is simulated: each sample moves the level by a random delta.
//! While the site is locked down and pumping the delta is drawn from the
//! drain range, otherwise from the rain range.  The level never drops
//! below the gauge floor and is quantised to 0.01 cm like the real unit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::decision::ActuatorState;

/// Round to the gauge resolution (0.01 cm).
pub fn quantise(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

pub struct WaterLevelGauge {
    rng: ChaCha8Rng,
    rain_delta_cm: (f32, f32),
    drain_delta_cm: (f32, f32),
    level_cm: f32,
    /// One-shot raw value returned by the next sample (fault injection).
    injected: Option<f32>,
}

impl WaterLevelGauge {
    pub fn new(sim: &SimulationConfig, rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            rain_delta_cm: sim.rain_delta_cm,
            drain_delta_cm: sim.drain_delta_cm,
            level_cm: 0.0,
            injected: None,
        }
    }

    pub fn seeded(sim: &SimulationConfig, seed: u64) -> Self {
        Self::new(sim, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Take one raw sample.  `actuators` is what the site is currently
    /// doing; it decides whether the water is draining or rising.
    pub fn sample(&mut self, actuators: ActuatorState) -> f32 {
        if let Some(raw) = self.injected.take() {
            return raw;
        }

        let (lo, hi) = if actuators.barrier_closed() && actuators.pumps_on() {
            self.drain_delta_cm
        } else {
            self.rain_delta_cm
        };
        let delta = self.rng.gen_range(lo..hi);
        self.level_cm = quantise((self.level_cm + delta).max(0.0));
        self.level_cm
    }

    /// Make the next sample return `raw` verbatim.
    pub fn inject_raw(&mut self, raw: f32) {
        self.injected = Some(raw);
    }

    /// Overwrite the simulated level (e.g. to start a run mid-flood).
    pub fn set_level(&mut self, level_cm: f32) {
        self.level_cm = quantise(level_cm.max(0.0));
    }

    pub fn level_cm(&self) -> f32 {
        self.level_cm
    }
}

/// Derives cm/min from consecutive levels.  Keeps only the previous level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiseRateTracker {
    previous_cm: f32,
}

impl RiseRateTracker {
    pub fn new(initial_cm: f32) -> Self {
        Self {
            previous_cm: initial_cm,
        }
    }

    /// Rate since the last update (one cycle = one minute of field time).
    pub fn update(&mut self, level_cm: f32) -> f32 {
        let rate = quantise(level_cm - self.previous_cm);
        self.previous_cm = level_cm;
        rate
    }

    pub fn previous_cm(&self) -> f32 {
        self.previous_cm
    }
}
