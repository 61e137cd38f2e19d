//! Hardware adapter: bridges the (simulated) site to the domain port traits.
//!
//! Owns the [`SensorHub`] and all actuator drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  The gauge's water model depends on
//! what the actuators are doing, so the adapter feeds the last applied
//! state back into every sample.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::config::SimulationConfig;
use crate::decision::{ActuatorState, Barrier, Pumps};
use crate::drivers::barrier::BarrierDriver;
use crate::drivers::pump::PumpDriver;
use crate::drivers::signage::{Signage, SignageDriver};
use crate::sensors::{SensorHub, SensorSnapshot};

/// Concrete adapter that combines the whole site behind port traits.
pub struct SimulatedUnderpass {
    sensor_hub: SensorHub,
    barrier: BarrierDriver,
    pumps: PumpDriver,
    signage: SignageDriver,
}

impl SimulatedUnderpass {
    pub fn new(
        sensor_hub: SensorHub,
        barrier: BarrierDriver,
        pumps: PumpDriver,
        signage: SignageDriver,
    ) -> Self {
        Self {
            sensor_hub,
            barrier,
            pumps,
            signage,
        }
    }

    pub fn from_config(sim: &SimulationConfig) -> Self {
        Self::new(
            SensorHub::from_config(sim),
            BarrierDriver::new(),
            PumpDriver::new(),
            SignageDriver::new(),
        )
    }

    fn current(&self) -> ActuatorState {
        ActuatorState::new(self.barrier.position(), self.pumps.state())
    }

    pub fn sensors(&mut self) -> &mut SensorHub {
        &mut self.sensor_hub
    }

    pub fn signage(&self) -> Signage {
        self.signage.shown()
    }

    pub fn barrier_closures(&self) -> u32 {
        self.barrier.closure_count()
    }

    pub fn pump_starts(&self) -> u32 {
        self.pumps.start_count()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for SimulatedUnderpass {
    fn read_all(&mut self) -> SensorSnapshot {
        let actuators = self.current();
        self.sensor_hub.read_all(actuators)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for SimulatedUnderpass {
    fn apply(&mut self, state: ActuatorState) {
        // Close before pumping, stop pumping before reopening.
        match state.barrier {
            Barrier::Closed => {
                self.barrier.set(state.barrier);
                self.pumps.set(state.pumps);
            }
            Barrier::Open => {
                self.pumps.set(state.pumps);
                self.barrier.set(state.barrier);
            }
        }
        self.signage.show(Signage::for_barrier(state.barrier));
    }

    fn barrier(&self) -> Barrier {
        self.barrier.position()
    }

    fn pumps(&self) -> Pumps {
        self.pumps.state()
    }
}
