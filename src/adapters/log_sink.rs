//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | lamp={} | deadline={}ms | remaining={}ms | edges={} | up={}s",
                    if t.lamp_on { "ON" } else { "off" },
                    t.deadline_ms,
                    t.remaining_ms,
                    t.motion_edges_total,
                    t.uptime_ms / 1000,
                );
            }
            AppEvent::MotionObserved { deadline_ms, edges } => {
                info!("MOTION | {} edge(s), lit until {}ms", edges, deadline_ms);
            }
            AppEvent::LampChanged { on } => {
                info!("LAMP | {}", if *on { "ON" } else { "off" });
            }
            AppEvent::LampWriteFailed(e) => {
                warn!("LAMP | write failed: {}", e);
            }
            AppEvent::Started => {
                info!("START | presence control active");
            }
        }
    }
}
