//! Keep-on deadline shared between the motion ISR and the actuation loop.
//!
//! The entire activation decision of the system reduces to one scalar: the
//! monotonic timestamp until which the lamp must stay lit.  The motion ISR
//! is the only writer (one atomic store per edge); the actuation loop is the
//! only reader.  There is no other channel between the two — the ISR never
//! calls into the loop, the loop never blocks on the ISR.
//!
//! ```text
//! GPIO ISR ──extend(now)──▶ ┌──────────────┐ ──get()──▶ Actuation loop
//!                           │ DeadlineCell │
//!                           └──────────────┘
//! ```
//!
//! On hosts and 64-bit targets the cell is a plain `AtomicU64`.  On 32-bit
//! Xtensa, `portable-atomic` falls back to a single-writer seqlock: the
//! writer never spins (no competing writer exists), the reader retries a
//! bounded number of times.  Either way a `get()` observes the previous or
//! the latest deadline, never a torn value.

use core::sync::atomic::Ordering;

use portable_atomic::AtomicU64;

/// How long the lamp stays lit after the most recent motion edge.
pub const KEEP_ON_WINDOW_MS: u64 = 15_000;

/// Single-writer / single-reader cell holding the "stay lit until" instant,
/// in milliseconds since boot.
///
/// Constructed once in `sensors::motion` as the ISR-reachable static and
/// passed by reference to the [`PresenceService`](super::service::PresenceService);
/// tests build local cells and drive them directly.
pub struct DeadlineCell {
    lit_until_ms: AtomicU64,
}

impl DeadlineCell {
    /// A fresh cell starts already expired: the lamp is dark until the
    /// first motion edge.
    pub const fn new() -> Self {
        Self {
            lit_until_ms: AtomicU64::new(0),
        }
    }

    /// Move the deadline to `now_ms + KEEP_ON_WINDOW_MS`, unconditionally.
    ///
    /// Repeated motion always re-triggers: each call overwrites whatever
    /// was stored before, so an active window only ever extends.  Single
    /// atomic store — no allocation, no blocking, safe from ISR context.
    pub fn extend(&self, now_ms: u64) {
        self.lit_until_ms
            .store(now_ms + KEEP_ON_WINDOW_MS, Ordering::Release);
    }

    /// Snapshot of the current deadline.  Safe to call concurrently with
    /// [`extend`](Self::extend); an `extend` that completed before this
    /// load began is guaranteed visible.
    pub fn get(&self) -> u64 {
        self.lit_until_ms.load(Ordering::Acquire)
    }

    /// The activation condition: `true` while `now_ms` is strictly before
    /// the deadline.  At the deadline instant itself the lamp is dark.
    pub fn is_lit(&self, now_ms: u64) -> bool {
        now_ms < self.get()
    }
}

impl Default for DeadlineCell {
    fn default() -> Self {
        Self::new()
    }
}
