//! Mock-Treiber für die Host-Tests
//!
//! Alle Mocks zeichnen ihre Aufrufe auf, damit Tests prüfen können
//! ob (und wie) die Hardware angefasst wurde.

#![allow(dead_code)]

use console_core::{
    Console, ConsoleConfig, DriverError, GpioBank, LedStrip, LogicLevel, PIN_MAX, PinDirection,
    PinId, PixelBuffer, SystemControl,
};
use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_io_async::{ErrorKind, ErrorType, Read, Write};
use rgb::RGB8;

/// Anzahl LEDs auf dem Referenz-Board
pub const STRIP_LEN: usize = 7;

const PIN_COUNT: usize = PIN_MAX as usize + 1;

// ============================================================================
// Mock GPIO Bank
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioCall {
    Configure(u8, PinDirection),
    Set(u8, LogicLevel),
    Get(u8),
}

pub struct MockGpioBank {
    pub calls: Vec<GpioCall>,
    pub directions: [Option<PinDirection>; PIN_COUNT],
    /// Ausgangs-Latch pro Pin
    pub levels: [LogicLevel; PIN_COUNT],
    /// Von außen angelegter Pegel, gewinnt beim Lesen gegen den Latch
    pub external: [Option<LogicLevel>; PIN_COUNT],
    /// Wie Zephyr: gleiche Richtung nochmal konfigurieren liefert AlreadyConfigured
    pub report_already_configured: bool,
    pub fail_configure: Option<i32>,
    pub fail_set: Option<i32>,
    pub fail_get: Option<i32>,
}

impl MockGpioBank {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            directions: [None; PIN_COUNT],
            levels: [LogicLevel::Low; PIN_COUNT],
            external: [None; PIN_COUNT],
            report_already_configured: false,
            fail_configure: None,
            fail_set: None,
            fail_get: None,
        }
    }

    pub fn hardware_calls(&self, pin: u8) -> usize {
        self.calls
            .iter()
            .filter(|call| match call {
                GpioCall::Configure(p, _) | GpioCall::Set(p, _) | GpioCall::Get(p) => *p == pin,
            })
            .count()
    }
}

impl Default for MockGpioBank {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioBank for MockGpioBank {
    fn configure(&mut self, pin: PinId, direction: PinDirection) -> Result<(), DriverError> {
        let n = pin.number();
        self.calls.push(GpioCall::Configure(n, direction));
        if let Some(code) = self.fail_configure {
            return Err(DriverError::Status(code));
        }
        let previous = self.directions[n as usize].replace(direction);
        if self.report_already_configured && previous == Some(direction) {
            return Err(DriverError::AlreadyConfigured);
        }
        Ok(())
    }

    fn set(&mut self, pin: PinId, level: LogicLevel) -> Result<(), DriverError> {
        let n = pin.number();
        self.calls.push(GpioCall::Set(n, level));
        if let Some(code) = self.fail_set {
            return Err(DriverError::Status(code));
        }
        self.levels[n as usize] = level;
        Ok(())
    }

    fn get(&mut self, pin: PinId) -> Result<LogicLevel, DriverError> {
        let n = pin.number() as usize;
        self.calls.push(GpioCall::Get(pin.number()));
        if let Some(code) = self.fail_get {
            return Err(DriverError::Status(code));
        }
        Ok(self.external[n].unwrap_or(self.levels[n]))
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

pub struct MockLedStrip {
    pub ready: bool,
    /// Jeder update()-Aufruf als vollständige Pixel-Liste
    pub updates: Vec<Vec<RGB8>>,
    pub fail_next_update: Option<i32>,
}

impl MockLedStrip {
    pub fn new() -> Self {
        Self {
            ready: true,
            updates: Vec::new(),
            fail_next_update: None,
        }
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.updates.last().map(Vec::as_slice)
    }
}

impl Default for MockLedStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for MockLedStrip {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn update(&mut self, pixels: &PixelBuffer) -> Result<(), i32> {
        if let Some(status) = self.fail_next_update.take() {
            return Err(status);
        }
        self.updates.push(pixels.iter().collect());
        Ok(())
    }
}

// ============================================================================
// Mock Delay / System
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl MockDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

#[derive(Default)]
pub struct MockSystem {
    pub bootloader_requests: usize,
}

impl SystemControl for MockSystem {
    fn enter_bootloader(&mut self) {
        self.bootloader_requests += 1;
    }
}

// ============================================================================
// Mock UART / Pause
// ============================================================================

/// Terminal mit vorgegebenen Lese-Ergebnissen
///
/// Ist das Skript leer, meldet `read` das Ende (`Ok(0)`).
#[derive(Default)]
pub struct MockUart {
    pub script: VecDeque<Result<Vec<u8>, ErrorKind>>,
    pub output: Vec<u8>,
}

impl MockUart {
    pub fn typing(input: &[u8]) -> Self {
        let mut uart = Self::default();
        uart.script.push_back(Ok(input.to_vec()));
        uart
    }

    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl ErrorType for MockUart {
    type Error = ErrorKind;
}

impl Read for MockUart {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let Some(next) = self.script.pop_front() else {
            return Ok(0);
        };
        let mut bytes = next?;
        if bytes.len() > buf.len() {
            let rest = bytes.split_off(buf.len());
            self.script.push_front(Ok(rest));
        }
        buf[..bytes.len()].copy_from_slice(&bytes);
        Ok(bytes.len())
    }
}

impl Write for MockUart {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Async-Pause, zählt nur die Wartezeit
#[derive(Default)]
pub struct MockPause {
    pub elapsed_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for MockPause {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

pub type MockConsole = Console<MockGpioBank, MockLedStrip, MockDelay, MockSystem>;

pub fn console_with(config: ConsoleConfig) -> MockConsole {
    Console::new(
        MockGpioBank::new(),
        MockLedStrip::new(),
        MockDelay::default(),
        MockSystem::default(),
        config,
    )
}

pub fn console() -> MockConsole {
    console_with(ConsoleConfig::new(STRIP_LEN))
}

pub fn pin(n: u8) -> PinId {
    PinId::new(n).unwrap()
}
