//! Mock hardware adapter for integration tests.
//!
//! Records every lamp command so tests can assert on the full command
//! history (including redundant re-asserts) without touching real GPIO.

use lumen::app::events::AppEvent;
use lumen::app::ports::{EventSink, LampError, LampPort, MotionPort};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Every `set_lamp` call in order, including repeats.
    pub lamp_commands: Vec<bool>,
    /// Edges the next `take_motion_edges` call will report.
    pub pending_edges: u32,
    /// When set, every lamp write fails with a GPIO error.
    pub fail_lamp_writes: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            lamp_commands: Vec::new(),
            pending_edges: 0,
            fail_lamp_writes: false,
        }
    }

    /// Queue motion edges for the next tick to drain.
    pub fn feed_motion(&mut self, edges: u32) {
        self.pending_edges += edges;
    }

    /// Most recent commanded lamp state (`false` if never commanded).
    pub fn lamp_on(&self) -> bool {
        self.lamp_commands.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl LampPort for MockHardware {
    fn set_lamp(&mut self, on: bool) -> Result<(), LampError> {
        self.lamp_commands.push(on);
        if self.fail_lamp_writes {
            return Err(LampError::GpioWriteFailed(-1));
        }
        Ok(())
    }
}

impl MotionPort for MockHardware {
    fn take_motion_edges(&mut self) -> u32 {
        std::mem::take(&mut self.pending_edges)
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.contains(needle))
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
