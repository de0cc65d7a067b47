//! Port traits — the hexagonal boundary between the presence core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PresenceService (domain)
//! ```
//!
//! Driven adapters (the lamp GPIO, the motion sensor's ISR counter, the
//! event log) implement these traits.  The
//! [`PresenceService`](super::service::PresenceService) consumes them via
//! generics, so the domain core never touches hardware directly and the
//! whole actuation path runs on the host under test.

// ───────────────────────────────────────────────────────────────
// Lamp port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the lamp.
///
/// The service commands the lamp on **every** cycle, changed or not, so
/// implementations must tolerate redundant writes.  A failed write is
/// reported, not retried — the next cycle's re-assert covers it.
pub trait LampPort {
    fn set_lamp(&mut self, on: bool) -> Result<(), LampError>;
}

// ───────────────────────────────────────────────────────────────
// Motion port (driven adapter: hardware → domain, telemetry only)
// ───────────────────────────────────────────────────────────────

/// Read-side port: drains the count of motion edges seen since the
/// previous call.
///
/// This feeds telemetry and event logging only.  The activation decision
/// itself flows through the deadline cell, which the ISR writes directly.
pub trait MotionPort {
    fn take_motion_edges(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log in
/// production, a recording vector in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`LampPort`] operations.
///
/// The lamp is the system's only actuator and its failure mode is benign
/// (the light stays dark), so the policy is log-and-continue: the loop is
/// never torn down over a write failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampError {
    /// The GPIO level write returned a non-zero code from the HAL.
    GpioWriteFailed(i32),
}

impl core::fmt::Display for LampError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioWriteFailed(rc) => write!(f, "GPIO write failed (rc={})", rc),
        }
    }
}
