//! Console Core - Pin-Policy, Parser und Command-Dispatch
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Treiber werden über Traits angebunden (siehe [`traits`]).

#![no_std]

#[macro_use]
mod logging;

pub mod battery;
pub mod dispatch;
pub mod error;
pub mod gpio;
pub mod led;
pub mod line;
pub mod parse;
pub mod pins;
pub mod shell;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use battery::{BatteryStatus, battery_indicator};
pub use dispatch::{Console, ConsoleConfig, Reply};
pub use error::{CommandError, FaultOp, HardwareFault};
pub use gpio::ReadAccess;
pub use led::LedMode;
pub use line::{LineEditor, LineEvent};
pub use parse::{ParseError, parse_byte, parse_level, parse_pin};
pub use pins::{PIN_MAX, PinId, PinPolicy};
pub use shell::Shell;
pub use traits::{DriverError, GpioBank, LedStrip, SystemControl};
pub use types::{LogicLevel, PinDirection, PixelBuffer};
