//! Presence service — the hexagonal core.
//!
//! [`PresenceService`] owns the actuation decision: each tick it compares
//! the monotonic clock against the shared keep-on deadline and commands the
//! lamp accordingly.  All I/O flows through port traits injected at call
//! sites, so the whole path is testable with mock adapters.
//!
//! ```text
//!  MotionPort ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                 │     PresenceService      │
//!    LampPort ◀───│  now < deadline → lamp   │
//!                 └─────────────────────────┘
//! ```
//!
//! The lamp command is issued on **every** tick, whether or not the state
//! changed — continuous re-assertion means a glitched driver is corrected
//! within one cycle.  Events, by contrast, fire only on transitions.

use log::{info, warn};

use super::deadline::DeadlineCell;
use super::events::{AppEvent, TelemetryData};
use super::ports::{EventSink, LampPort, MotionPort};

/// The presence service orchestrates the per-tick actuation decision.
///
/// Holds a reference to the deadline cell the motion ISR writes; the cell
/// outlives the service (a `static` in production, a local in tests).
pub struct PresenceService<'a> {
    deadline: &'a DeadlineCell,
    /// Last commanded lamp state, tracked only to detect transitions for
    /// event emission.  `None` until the first tick.
    commanded: Option<bool>,
    tick_count: u64,
    motion_edges_total: u32,
}

impl<'a> PresenceService<'a> {
    pub fn new(deadline: &'a DeadlineCell) -> Self {
        Self {
            deadline,
            commanded: None,
            tick_count: 0,
            motion_edges_total: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup.  The deadline cell starts expired, so the lamp
    /// goes (or stays) dark on the first tick.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("PresenceService started (lamp dark until first motion edge)");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one actuation cycle.
    ///
    /// The `hw` parameter satisfies **both** [`MotionPort`] and
    /// [`LampPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl LampPort + MotionPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Drain motion edges seen since the last tick (telemetry only —
        //    the ISR already extended the deadline for each of them).
        let edges = hw.take_motion_edges();
        if edges > 0 {
            self.motion_edges_total = self.motion_edges_total.wrapping_add(edges);
            sink.emit(&AppEvent::MotionObserved {
                deadline_ms: self.deadline.get(),
                edges,
            });
        }

        // 2. The activation decision: lit while now is before the deadline.
        let lit = self.deadline.is_lit(now_ms);

        // 3. Command the lamp, changed or not.  A failed write is logged
        //    and the loop carries on; the next cycle re-asserts.
        if let Err(e) = hw.set_lamp(lit) {
            warn!("lamp write failed: {e} — continuing");
            sink.emit(&AppEvent::LampWriteFailed(e));
        }

        // 4. Emit a transition event if the commanded state moved.
        if self.commanded != Some(lit) {
            self.commanded = Some(lit);
            sink.emit(&AppEvent::LampChanged { on: lit });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot for the periodic report.
    pub fn build_telemetry(&self, now_ms: u64) -> TelemetryData {
        let deadline_ms = self.deadline.get();
        TelemetryData {
            lamp_on: self.commanded.unwrap_or(false),
            deadline_ms,
            remaining_ms: deadline_ms.saturating_sub(now_ms),
            motion_edges_total: self.motion_edges_total,
            uptime_ms: now_ms,
        }
    }

    /// Last commanded lamp state (`false` before the first tick).
    pub fn lamp_commanded(&self) -> bool {
        self.commanded.unwrap_or(false)
    }

    /// Total actuation ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
