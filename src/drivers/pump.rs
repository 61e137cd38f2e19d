//! Drainage pump bank driver.
//!
//! On/off control of the sump pumps at the underpass low point.  The
//! simulator tracks state in memory and logs every edge.
//!
//! ## Safety contract
//!
//! This driver is a dumb actuator.  When the pumps run is decided by the
//! decision engine; the driver never overrides a command.

use log::info;

use crate::decision::Pumps;

pub struct PumpDriver {
    state: Pumps,
    /// Number of off→on edges since construction.
    starts: u32,
}

impl PumpDriver {
    pub fn new() -> Self {
        Self {
            state: Pumps::Off,
            starts: 0,
        }
    }

    pub fn set(&mut self, pumps: Pumps) {
        if pumps == self.state {
            return;
        }
        match pumps {
            Pumps::On => {
                self.starts = self.starts.saturating_add(1);
                info!("PUMP: started (start #{})", self.starts);
            }
            Pumps::Off => info!("PUMP: stopped"),
        }
        self.state = pumps;
    }

    pub fn start(&mut self) {
        self.set(Pumps::On);
    }

    pub fn stop(&mut self) {
        self.set(Pumps::Off);
    }

    pub fn state(&self) -> Pumps {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Pumps::On
    }

    pub fn start_count(&self) -> u32 {
        self.starts
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let p = PumpDriver::new();
        assert!(!p.is_running());
        assert_eq!(p.start_count(), 0);
    }

    #[test]
    fn counts_only_edges() {
        let mut p = PumpDriver::new();
        p.start();
        p.start();
        p.stop();
        p.start();
        assert!(p.is_running());
        assert_eq!(p.start_count(), 2);
    }
}
