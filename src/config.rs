//! System configuration parameters
//!
//! Ambient timing for the Lumen controller.  Values are fixed at build
//! time via `Default` — the keep-on window itself is deliberately **not**
//! here: it is a compile-time constant
//! ([`KEEP_ON_WINDOW_MS`](crate::app::deadline::KEEP_ON_WINDOW_MS)) and is
//! never reconfigurable at runtime.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Actuation loop re-evaluation period (milliseconds).  Must stay
    /// short relative to the keep-on window so a deadline change reaches
    /// the lamp promptly.
    pub actuation_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            actuation_interval_ms: 20,  // 50 Hz re-evaluation
            telemetry_interval_secs: 60, // 1/min
        }
    }
}
