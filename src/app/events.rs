//! Outbound application events.
//!
//! The [`PresenceService`](super::service::PresenceService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — the production adapter
//! writes structured log lines.

use super::ports::LampError;

/// Structured events emitted by the presence core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started; the lamp is dark until the first edge.
    Started,

    /// One or more motion edges were observed since the previous tick.
    /// Carries the deadline in force after those edges.
    MotionObserved { deadline_ms: u64, edges: u32 },

    /// The commanded lamp state changed (emitted on transitions only;
    /// the command itself is re-issued every cycle).
    LampChanged { on: bool },

    /// A lamp write failed this cycle.  The loop continues; the next
    /// cycle re-asserts the state.
    LampWriteFailed(LampError),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    /// Last commanded lamp state.
    pub lamp_on: bool,
    /// Deadline currently in force (ms since boot; 0 = never triggered).
    pub deadline_ms: u64,
    /// Milliseconds of keep-on window remaining (0 when expired).
    pub remaining_ms: u64,
    /// Motion edges observed since boot.
    pub motion_edges_total: u32,
    /// Uptime at snapshot time (ms).
    pub uptime_ms: u64,
}
