//! Hardware adapter — bridges real peripherals to the domain port traits.
//!
//! Owns the motion sensor handle and the lamp driver, exposing them
//! through [`MotionPort`] and [`LampPort`].  This is the only module in
//! the system that hands hardware to the domain.  On non-espidf targets,
//! the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{LampError, LampPort, MotionPort};
use crate::drivers::lamp::LampDriver;
use crate::sensors::motion::MotionSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    motion: MotionSensor,
    lamp: LampDriver,
}

impl HardwareAdapter {
    pub fn new(motion: MotionSensor, lamp: LampDriver) -> Self {
        Self { motion, lamp }
    }
}

// ── MotionPort implementation ─────────────────────────────────

impl MotionPort for HardwareAdapter {
    fn take_motion_edges(&mut self) -> u32 {
        self.motion.take_edge_count()
    }
}

// ── LampPort implementation ───────────────────────────────────

impl LampPort for HardwareAdapter {
    fn set_lamp(&mut self, on: bool) -> Result<(), LampError> {
        self.lamp.set(on)
    }
}
