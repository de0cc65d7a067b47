//! Lumen Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single shared deadline value.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter      LogEventSink       Esp32TimeAdapter    │
//! │  (Motion+Lamp)        (EventSink)        (monotonic clock)   │
//! │                                                              │
//! │  ────────────── Port Trait Boundary ──────────────────       │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │         PresenceService (pure logic)               │      │
//! │  │         now < deadline  →  lamp on                 │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                         ▲                                    │
//! │  GPIO ISR ──extend──▶ DeadlineCell (single shared scalar)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ISR and the loop never call each other; the deadline cell is the
//! only channel between them.
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod pins;

pub mod app;
mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{error, info};

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::events::AppEvent;
use app::ports::EventSink;
use app::service::PresenceService;
use config::SystemConfig;
use drivers::lamp::LampDriver;
use drivers::watchdog::Watchdog;
use sensors::motion::MotionSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Lumen v{} — presence-activated lighting", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        // Degraded but safe: without the motion ISR the lamp simply
        // never lights.
        error!("ISR service init failed: {} — continuing without motion", e);
    }
    let watchdog = Watchdog::new();

    // ── 3. Adapters ───────────────────────────────────────────
    let config = SystemConfig::default();
    let time = Esp32TimeAdapter::new();
    let mut hw = HardwareAdapter::new(
        MotionSensor::new(pins::PIR_SENSE_GPIO),
        LampDriver::new(),
    );
    let mut sink = LogEventSink::new();

    // ── 4. Presence service ───────────────────────────────────
    // The service reads the same cell the GPIO ISR extends.
    let mut app = PresenceService::new(sensors::motion::keep_on_deadline());
    app.start(&mut sink);

    info!("System ready. Entering actuation loop.");

    // ── 5. Actuation loop ─────────────────────────────────────
    // Re-evaluates at actuation_interval_ms (well below the keep-on
    // window) and never exits. The idle delay yields the CPU between
    // cycles; correctness does not depend on it.
    let telemetry_every =
        u64::from((config.telemetry_interval_secs * 1000 / config.actuation_interval_ms).max(1));
    let mut telemetry_counter: u64 = 0;

    loop {
        let now_ms = time.uptime_ms();
        app.tick(now_ms, &mut hw, &mut sink);

        telemetry_counter += 1;
        if telemetry_counter >= telemetry_every {
            sink.emit(&AppEvent::Telemetry(app.build_telemetry(now_ms)));
            telemetry_counter = 0;
        }

        watchdog.feed();

        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.actuation_interval_ms);

        // Host simulation: approximate the cycle period with a sleep.
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.actuation_interval_ms,
        )));
    }
}
