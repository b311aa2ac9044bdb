//! Verbindung zur seriellen Konsole des Boards

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use console_core::LedMode;
use log::{info, warn};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

/// Baudrate der UART-Konsole auf dem Board
pub const DEFAULT_BAUD: u32 = 115_200;

/// USB-UART-Bridge des DevKits (UART0, nicht USB-Serial-JTAG)
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Serieller Port, der zwischen den Abfragen offen bleibt
///
/// Nach einem Schreibfehler wird der Port geschlossen und beim nächsten
/// Kommando neu geöffnet.
pub struct ConsoleLink {
    path: String,
    baud_rate: u32,
    port: Option<Box<dyn SerialPort>>,
}

impl ConsoleLink {
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
            port: None,
        }
    }

    pub fn send(&mut self, mode: LedMode) -> Result<()> {
        let port = match self.port.take() {
            Some(port) => port,
            None => self.open()?,
        };
        let port = self.port.insert(port);
        if let Err(e) = write_command(port, mode) {
            warn!("Closing {} after write error", self.path);
            self.port = None;
            return Err(e);
        }
        info!("Set LED to {}", mode.name());
        Ok(())
    }

    fn open(&self) -> Result<Box<dyn SerialPort>> {
        info!("Opening {} at {} baud", self.path, self.baud_rate);
        serialport::new(&self.path, self.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(500))
            .open()
            .with_context(|| format!("Failed to open serial port: {}", self.path))
    }
}

/// Schreibt `<kommando>\n` wie es die Konsole als Zeile erwartet
pub fn write_command<W: Write + ?Sized>(out: &mut W, mode: LedMode) -> Result<()> {
    writeln!(out, "{}", mode).context("Failed to write to serial port")?;
    out.flush().context("Failed to flush serial port")
}
