//! Sensor subsystem: individual sensors and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor and produces a [`SensorSnapshot`] each cycle.
//! It is also where raw gauge data is sanitised: the decision engine only
//! ever sees finite, non-negative levels.

pub mod traffic;
pub mod water_level;

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::decision::{ActuatorState, SensorReading};
use crate::error::SensorError;
use traffic::TrafficCamera;
use water_level::{RiseRateTracker, WaterLevelGauge};

/// A point-in-time snapshot of every sensor at the site.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSnapshot {
    /// Level and rise rate handed to the decision engine.
    pub reading: SensorReading,
    /// True if the camera saw vehicles in the approach.
    pub traffic_detected: bool,
}

/// Check a raw gauge value before it reaches the engine.
pub fn validate_level(raw_cm: f32) -> Result<f32, SensorError> {
    if !raw_cm.is_finite() {
        return Err(SensorError::NonFinite);
    }
    if raw_cm < 0.0 {
        return Err(SensorError::OutOfRange);
    }
    Ok(raw_cm)
}

/// Aggregates all sensors and produces a unified snapshot.
pub struct SensorHub {
    pub gauge: WaterLevelGauge,
    pub camera: TrafficCamera,
    rise: RiseRateTracker,
    /// Last level that passed validation.
    last_good_cm: f32,
}

impl SensorHub {
    pub fn new(gauge: WaterLevelGauge, camera: TrafficCamera) -> Self {
        Self {
            gauge,
            camera,
            rise: RiseRateTracker::default(),
            last_good_cm: 0.0,
        }
    }

    /// Build the simulated sensors from config.  A fixed seed gives a
    /// reproducible run; otherwise both RNGs come from OS entropy.
    pub fn from_config(sim: &SimulationConfig) -> Self {
        let (gauge_rng, camera_rng) = match sim.seed {
            Some(seed) => (
                ChaCha8Rng::seed_from_u64(seed),
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
        };
        Self::new(
            WaterLevelGauge::new(sim, gauge_rng),
            TrafficCamera::new(sim.traffic_probability, camera_rng),
        )
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// A bad gauge sample is logged and the previous good level is
    /// retained. One glitch must not crash or mislead the control loop.
    pub fn read_all(&mut self, actuators: ActuatorState) -> SensorSnapshot {
        let raw = self.gauge.sample(actuators);
        let level = match validate_level(raw) {
            Ok(level) => level,
            Err(e) => {
                warn!("Gauge sample {raw} rejected ({e}); holding {:.2} cm", self.last_good_cm);
                self.last_good_cm
            }
        };
        self.last_good_cm = level;
        let rate = self.rise.update(level);
        let traffic = self.camera.detect();

        SensorSnapshot {
            reading: SensorReading::new(level, rate),
            traffic_detected: traffic,
        }
    }

    /// Level of the last accepted sample.
    pub fn last_level_cm(&self) -> f32 {
        self.last_good_cm
    }
}
