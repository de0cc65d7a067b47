//! Integration tests for the deadline → service → lamp pipeline.
//!
//! These run on the host (x86_64) with a local `DeadlineCell` standing in
//! for the ISR-written static: `cell.extend(t)` is exactly what the motion
//! ISR does on an edge at time `t`.

use super::mock_hw::{LogSink, MockHardware};

use lumen::app::deadline::{DeadlineCell, KEEP_ON_WINDOW_MS};
use lumen::app::service::PresenceService;

fn make_app(cell: &DeadlineCell) -> (PresenceService<'_>, MockHardware, LogSink) {
    let mut app = PresenceService::new(cell);
    let mut sink = LogSink::new();
    app.start(&mut sink);
    (app, MockHardware::new(), sink)
}

// ── No motion: the lamp stays dark ───────────────────────────

#[test]
fn lamp_stays_dark_without_motion() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    for now in [0, 100, 5_000, 60_000] {
        app.tick(now, &mut hw, &mut sink);
    }

    assert!(hw.lamp_commands.iter().all(|&on| !on));
    assert_eq!(hw.lamp_commands.len(), 4, "lamp commanded every tick");
}

// ── Reference scenario: edge at 0, re-trigger at 10000 ───────

#[test]
fn motion_lights_lamp_for_full_window() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    cell.extend(0); // motion edge at t=0
    app.tick(0, &mut hw, &mut sink);
    assert!(hw.lamp_on(), "lit immediately after the edge");

    app.tick(KEEP_ON_WINDOW_MS - 1, &mut hw, &mut sink);
    assert!(hw.lamp_on(), "still lit one ms before the deadline");

    app.tick(KEEP_ON_WINDOW_MS, &mut hw, &mut sink);
    assert!(!hw.lamp_on(), "dark at the deadline instant");
}

#[test]
fn retrigger_extends_the_lit_window() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    cell.extend(0);
    app.tick(0, &mut hw, &mut sink);

    cell.extend(10_000); // second edge while still lit
    app.tick(20_000, &mut hw, &mut sink);
    assert!(hw.lamp_on(), "past the first deadline but inside the second");

    app.tick(10_000 + KEEP_ON_WINDOW_MS - 1, &mut hw, &mut sink);
    assert!(hw.lamp_on());

    app.tick(10_000 + KEEP_ON_WINDOW_MS, &mut hw, &mut sink);
    assert!(!hw.lamp_on(), "dark at the extended deadline");
}

// ── Idempotent re-assertion ──────────────────────────────────

#[test]
fn command_reasserted_every_cycle_without_oscillation() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    cell.extend(0);
    for i in 0..5 {
        app.tick(i * 100, &mut hw, &mut sink);
    }

    assert_eq!(hw.lamp_commands, vec![true; 5]);

    // Exactly one LampChanged despite five commands.
    let changes = sink
        .events
        .iter()
        .filter(|e| e.contains("LampChanged"))
        .count();
    assert_eq!(changes, 1);
}

#[test]
fn lamp_changed_fires_once_per_transition() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    app.tick(0, &mut hw, &mut sink); // dark
    cell.extend(100);
    app.tick(100, &mut hw, &mut sink); // lit
    app.tick(200, &mut hw, &mut sink); // still lit
    app.tick(100 + KEEP_ON_WINDOW_MS, &mut hw, &mut sink); // dark again

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter(|e| e.contains("LampChanged"))
        .collect();
    assert_eq!(changes.len(), 3, "off → on → off");
}

// ── Motion telemetry ─────────────────────────────────────────

#[test]
fn motion_edges_surface_as_events() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);

    cell.extend(500);
    hw.feed_motion(2);
    app.tick(500, &mut hw, &mut sink);

    assert!(sink.contains("MotionObserved"));
    assert!(sink.contains("edges: 2"));

    let t = app.build_telemetry(600);
    assert_eq!(t.motion_edges_total, 2);
    assert!(t.lamp_on);
}

// ── Lamp failure: log, emit, carry on ────────────────────────

#[test]
fn lamp_write_failure_does_not_stop_the_loop() {
    let cell = DeadlineCell::new();
    let (mut app, mut hw, mut sink) = make_app(&cell);
    hw.fail_lamp_writes = true;

    cell.extend(0);
    app.tick(0, &mut hw, &mut sink);
    app.tick(100, &mut hw, &mut sink);

    assert!(sink.contains("LampWriteFailed"));
    assert_eq!(
        hw.lamp_commands.len(),
        2,
        "the loop keeps commanding after a failed write"
    );

    // Recovery: once writes succeed again, the state re-asserts.
    hw.fail_lamp_writes = false;
    app.tick(200, &mut hw, &mut sink);
    assert!(hw.lamp_on());
}
