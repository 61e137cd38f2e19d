//! Variable message sign at the underpass approach.
//!
//! The sign follows the barrier: a closed barrier shows the flood-risk
//! message, an open one shows normal traffic.

use core::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::decision::Barrier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signage {
    Normal,
    FloodRisk,
}

impl Signage {
    pub fn for_barrier(barrier: Barrier) -> Self {
        match barrier {
            Barrier::Closed => Self::FloodRisk,
            Barrier::Open => Self::Normal,
        }
    }
}

impl fmt::Display for Signage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::FloodRisk => write!(f, "FLOOD RISK"),
        }
    }
}

pub struct SignageDriver {
    shown: Signage,
}

impl SignageDriver {
    pub fn new() -> Self {
        Self {
            shown: Signage::Normal,
        }
    }

    pub fn show(&mut self, message: Signage) {
        if message != self.shown {
            info!("SIGN: {message}");
            self.shown = message;
        }
    }

    pub fn shown(&self) -> Signage {
        self.shown
    }
}

impl Default for SignageDriver {
    fn default() -> Self {
        Self::new()
    }
}
