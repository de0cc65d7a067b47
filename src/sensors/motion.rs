//! PIR motion sensor (HC-SR501 class) — edge-interrupt driven.
//!
//! The sensor raises its output on detected movement; the GPIO fires on
//! the rising edge.  The ISR does two things and returns:
//!
//! 1. extend the shared keep-on deadline to `now + KEEP_ON_WINDOW_MS`
//! 2. bump a relaxed edge counter for telemetry
//!
//! Every reported edge extends the window — no filtering, no rate limit.
//! Debounce, if any, is the PIR module's own retriggering behaviour and
//! the hardware edge detector's concern, not this driver's.
//!
//! Both shared values live in `static`s because ESP-IDF ISR callbacks
//! cannot capture closures; the deadline cell is handed out by reference
//! so the actuation loop and tests consume it through the same type.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::app::deadline::DeadlineCell;

/// The one deadline instance the GPIO ISR writes.
static KEEP_ON: DeadlineCell = DeadlineCell::new();

/// Edges counted since the last loop-side drain.
static MOTION_EDGE_COUNT: AtomicU32 = AtomicU32::new(0);

/// Called from the GPIO ISR on each rising edge of the PIR output.
/// `now_ms` is the monotonic time read inside the ISR.
/// Lock-free — one atomic store plus one relaxed increment.
pub fn motion_isr_handler(now_ms: u64) {
    KEEP_ON.extend(now_ms);
    MOTION_EDGE_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// The deadline cell the ISR writes.  `main` passes this into the
/// [`PresenceService`](crate::app::service::PresenceService).
pub fn keep_on_deadline() -> &'static DeadlineCell {
    &KEEP_ON
}

/// Loop-side handle for the motion sensor.
pub struct MotionSensor {
    /// GPIO pin number (stored for diagnostics / re-init).
    _gpio: i32,
}

impl MotionSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// Atomically drain the edge counter accumulated since the previous
    /// call.  Single consumer: the actuation loop.
    pub fn take_edge_count(&mut self) -> u32 {
        MOTION_EDGE_COUNT.swap(0, Ordering::Relaxed)
    }
}
