//! Battery Watcher
//!
//! Zeigt den Akku-Zustand eines Laptops auf dem LED-Strip der Konsole an.
//! Liest jede Sekunde `status` und `capacity` aus sysfs und schickt bei
//! Änderungen ein `setled` Kommando an die serielle Konsole.
//!
//! # Usage
//!
//! ```bash
//! # Volle Helligkeit, Konsole auf /dev/ttyUSB0 mit 115200 Baud
//! battery-watcher
//!
//! # Gedimmt, anderer Port
//! RUST_LOG=debug battery-watcher 40 --port /dev/ttyUSB1 --baud 115200
//! ```

mod link;
mod watcher;

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use console_core::BatteryStatus;
use log::{debug, info, warn};

use link::{ConsoleLink, DEFAULT_BAUD, DEFAULT_PORT};
use watcher::Watcher;

/// Mirrors the battery state on the console LED strip
#[derive(Parser)]
#[command(name = "battery-watcher")]
#[command(version)]
#[command(about = "Mirrors the laptop battery state on the console LED strip")]
struct Cli {
    /// LED intensity (1-255)
    #[arg(default_value_t = 255, value_parser = clap::value_parser!(u8).range(1..=255))]
    intensity: u8,

    /// Serial device of the console (USB-UART bridge)
    #[arg(short, long, default_value = DEFAULT_PORT)]
    port: String,

    /// Baud rate of the console UART
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    baud: u32,

    /// Power supply directory in sysfs
    #[arg(short, long, default_value = "/sys/class/power_supply/BAT0")]
    battery: PathBuf,

    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    info!(
        "Watching {} with intensity {}, console on {} at {} baud",
        cli.battery.display(),
        cli.intensity,
        cli.port,
        cli.baud
    );

    let mut link = ConsoleLink::new(cli.port, cli.baud);
    let mut watcher = Watcher::new(cli.intensity);
    loop {
        match read_battery(&cli.battery) {
            Ok((status, capacity)) => {
                debug!("Battery: {:?} at {}%", status, capacity);
                if let Some(mode) = watcher.observe(status, capacity) {
                    if let Err(e) = link.send(mode) {
                        warn!("Failed to send LED command: {:#}", e);
                    }
                }
            }
            Err(e) => warn!("Failed to read battery state: {:#}", e),
        }
        thread::sleep(Duration::from_millis(cli.interval_ms));
    }
}

/// Liest Status und Kapazität, unlesbare Kapazität zählt als 0
fn read_battery(dir: &Path) -> Result<(BatteryStatus, u8)> {
    let status_path = dir.join("status");
    let status = fs::read_to_string(&status_path)
        .with_context(|| format!("reading {}", status_path.display()))?;
    let capacity = fs::read_to_string(dir.join("capacity"))
        .ok()
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .unwrap_or(0);
    Ok((BatteryStatus::parse(&status), capacity))
}
