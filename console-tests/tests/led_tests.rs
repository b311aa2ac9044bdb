//! Integration Tests für `setled` und `blink`
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedStrip

mod common;

use common::{MockDelay, MockGpioBank, MockLedStrip, MockSystem, STRIP_LEN, console};
use console_core::{CommandError, Console, ConsoleConfig, FaultOp, HardwareFault, LedMode, Reply};
use rgb::RGB8;

fn uniform(color: RGB8) -> Vec<RGB8> {
    vec![color; STRIP_LEN]
}

// ============================================================================
// Tests: Farb-Modi
// ============================================================================

#[test]
fn test_setled_off_fills_strip_with_black() {
    let mut console = console();
    let reply = console.execute("setled off").unwrap();
    assert_eq!(reply, Reply::LedSet(LedMode::Off));
    assert_eq!(reply.to_string(), "LED set to off");

    let frame = console.strip().last_frame().unwrap();
    assert_eq!(frame.len(), STRIP_LEN);
    assert!(frame.iter().all(|&pixel| pixel == RGB8 { r: 0, g: 0, b: 0 }));
}

#[test]
fn test_setled_channels_default_to_full_brightness() {
    let mut console = console();

    console.execute("setled red").unwrap();
    assert_eq!(
        console.strip().last_frame().unwrap(),
        uniform(RGB8 { r: 255, g: 0, b: 0 })
    );

    console.execute("setled green").unwrap();
    assert_eq!(
        console.strip().last_frame().unwrap(),
        uniform(RGB8 { r: 0, g: 255, b: 0 })
    );

    let reply = console.execute("setled blue 12").unwrap();
    assert_eq!(reply.to_string(), "LED set to blue");
    assert_eq!(
        console.strip().last_frame().unwrap(),
        uniform(RGB8 { r: 0, g: 0, b: 12 })
    );
}

#[test]
fn test_setled_on_is_grayscale() {
    let mut console = console();
    console.execute("setled on 80").unwrap();
    assert_eq!(
        console.strip().last_frame().unwrap(),
        uniform(RGB8 {
            r: 80,
            g: 80,
            b: 80
        })
    );
}

#[test]
fn test_setled_custom() {
    let mut console = console();
    let reply = console.execute("setled custom 10 20 30").unwrap();
    assert_eq!(reply.to_string(), "LED set to custom");
    assert_eq!(
        console.strip().last_frame().unwrap(),
        uniform(RGB8 {
            r: 10,
            g: 20,
            b: 30
        })
    );
    assert_eq!(console.strip().updates.len(), 1);
}

#[test]
fn test_strip_length_is_configurable() {
    let mut strip = MockLedStrip::new();
    let mut console = Console::new(
        MockGpioBank::new(),
        &mut strip,
        MockDelay::default(),
        MockSystem::default(),
        ConsoleConfig::new(30),
    );
    console.execute("setled green 1").unwrap();
    drop(console);
    assert_eq!(strip.last_frame().unwrap().len(), 30);
}

// ============================================================================
// Tests: ungültige Eingaben (kein Treiber-Aufruf)
// ============================================================================

#[test]
fn test_setled_custom_out_of_range() {
    let mut console = console();
    let result = console.execute("setled custom 10 20 300");
    assert_eq!(
        result,
        Err(CommandError::InvalidArgument("Invalid blue value. Use 0–255."))
    );
    assert_eq!(result.unwrap_err().code(), -22);
    assert!(console.strip().updates.is_empty());
}

#[test]
fn test_setled_rejects_malformed_values() {
    let mut console = console();
    for line in [
        "setled red 256",
        "setled red 200x",
        "setled on",
        "setled on -1",
        "setled off 5",
        "setled custom 1 2",
        "setled custom a 2 3",
        "setled purple",
        "setled",
        "setled custom 1 2 3 4",
    ] {
        assert!(
            matches!(console.execute(line), Err(CommandError::InvalidArgument(_))),
            "{line}"
        );
    }
    assert!(console.strip().updates.is_empty());
}

#[test]
fn test_setled_error_messages() {
    let mut console = console();
    let message = |console: &mut common::MockConsole, line: &str| {
        console.execute(line).unwrap_err().to_string()
    };
    assert_eq!(
        message(&mut console, "setled green x"),
        "Invalid brightness value. Use 0–255."
    );
    assert_eq!(message(&mut console, "setled on"), "Usage: setled on <0-255>");
    assert_eq!(
        message(&mut console, "setled custom 1 2"),
        "Usage: setled custom <R> <G> <B>"
    );
    assert_eq!(
        message(&mut console, "setled custom 1 999 3"),
        "Invalid green value. Use 0–255."
    );
    assert_eq!(
        message(&mut console, "setled yellow"),
        "Invalid color. Use red, green, blue, on, off, or custom."
    );
}

// ============================================================================
// Tests: Treiber-Zustand
// ============================================================================

#[test]
fn test_setled_device_not_ready() {
    let mut strip = MockLedStrip::new();
    strip.ready = false;
    let mut console = Console::new(
        MockGpioBank::new(),
        &mut strip,
        MockDelay::default(),
        MockSystem::default(),
        ConsoleConfig::new(STRIP_LEN),
    );

    let err = console.execute("setled red").unwrap_err();
    assert_eq!(err, CommandError::DeviceNotReady);
    assert_eq!(err.code(), -19);
    assert_eq!(err.to_string(), "LED strip device not ready");
    drop(console);
    assert!(strip.updates.is_empty());
}

#[test]
fn test_setled_update_failure_then_recovery() {
    let mut strip = MockLedStrip::new();
    strip.fail_next_update = Some(-5);
    let mut console = Console::new(
        MockGpioBank::new(),
        &mut strip,
        MockDelay::default(),
        MockSystem::default(),
        ConsoleConfig::new(STRIP_LEN),
    );

    let err = console.execute("setled on 10").unwrap_err();
    assert_eq!(
        err,
        CommandError::HardwareFault(HardwareFault {
            op: FaultOp::LedUpdate,
            code: -5
        })
    );
    assert_eq!(err.to_string(), "Failed to update LED strip: -5");

    // Ein Fehler blockiert keine folgenden Kommandos
    assert!(console.execute("setled on 10").is_ok());
    drop(console);
    assert_eq!(strip.updates.len(), 1);
}

// ============================================================================
// Tests: blink / bootsel
// ============================================================================

#[test]
fn test_blink_toggles_twice() {
    let mut console = console();
    assert_eq!(console.execute("blink"), Ok(Reply::Silent));

    let white = RGB8 {
        r: 255,
        g: 255,
        b: 255,
    };
    let black = RGB8::default();
    let frames: Vec<RGB8> = console
        .strip()
        .updates
        .iter()
        .map(|frame| frame[0])
        .collect();
    assert_eq!(frames, vec![white, black, white, black]);
    assert_eq!(console.delay().elapsed_ms(), 2000);
}

#[test]
fn test_bootsel_blinks_then_enters_bootloader() {
    let mut console = console();
    assert_eq!(console.execute("bootsel"), Ok(Reply::Silent));
    assert_eq!(console.strip().updates.len(), 4);
    assert_eq!(console.system().bootloader_requests, 1);
}

#[test]
fn test_bootsel_reboots_even_when_strip_not_ready() {
    let mut strip = MockLedStrip::new();
    strip.ready = false;
    let mut system = MockSystem::default();
    let mut console = Console::new(
        MockGpioBank::new(),
        &mut strip,
        MockDelay::default(),
        &mut system,
        ConsoleConfig::new(STRIP_LEN),
    );
    assert_eq!(console.execute("bootsel"), Ok(Reply::Silent));
    drop(console);
    assert!(strip.updates.is_empty());
    assert_eq!(system.bootloader_requests, 1);
}
