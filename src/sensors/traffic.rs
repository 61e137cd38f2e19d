//! Traffic camera (simulated vision pipeline).
//!
//! Reports whether vehicles are in the underpass approach.  The decision
//! engine does not use it; it is carried in telemetry so operators can see
//! whether a closure actually stopped traffic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct TrafficCamera {
    rng: ChaCha8Rng,
    probability: f64,
    last: bool,
}

impl TrafficCamera {
    pub fn new(probability: f64, rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            probability: if probability.is_nan() {
                0.0
            } else {
                probability.clamp(0.0, 1.0)
            },
            last: false,
        }
    }

    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::new(probability, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn detect(&mut self) -> bool {
        self.last = self.rng.gen_bool(self.probability);
        self.last
    }

    pub fn last_detection(&self) -> bool {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_traffic() {
        let mut cam = TrafficCamera::seeded(1.0, 0);
        assert!((0..20).all(|_| cam.detect()));
        assert!(cam.last_detection());
    }

    #[test]
    fn empty_road() {
        let mut cam = TrafficCamera::seeded(0.0, 0);
        assert!((0..20).all(|_| !cam.detect()));
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let mut cam = TrafficCamera::seeded(3.0, 0);
        assert!(cam.detect());
    }
}
