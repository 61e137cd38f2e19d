//! Traffic barrier driver.
//!
//! Raises and lowers the boom gate across the underpass entrance.
//! Tracks the commanded position and logs every movement.

use log::{info, warn};

use crate::decision::Barrier;

pub struct BarrierDriver {
    position: Barrier,
    closures: u32,
}

impl BarrierDriver {
    pub fn new() -> Self {
        Self {
            position: Barrier::Open,
            closures: 0,
        }
    }

    pub fn set(&mut self, position: Barrier) {
        if position == self.position {
            return;
        }
        match position {
            Barrier::Closed => {
                self.closures = self.closures.saturating_add(1);
                warn!("BARRIER: closing, underpass blocked");
            }
            Barrier::Open => info!("BARRIER: opening, underpass clear"),
        }
        self.position = position;
    }

    pub fn close(&mut self) {
        self.set(Barrier::Closed);
    }

    pub fn open(&mut self) {
        self.set(Barrier::Open);
    }

    pub fn position(&self) -> Barrier {
        self.position
    }

    pub fn is_closed(&self) -> bool {
        self.position == Barrier::Closed
    }

    /// Number of open→closed movements since construction.
    pub fn closure_count(&self) -> u32 {
        self.closures
    }
}

impl Default for BarrierDriver {
    fn default() -> Self {
        Self::new()
    }
}
