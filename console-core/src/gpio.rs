//! GPIO Command Handler
//!
//! `gpio set` ist durch die Pin-Policy geschützt. Ob `gpio get` ebenfalls
//! geschützt ist, entscheidet [`ReadAccess`].

use crate::error::{CommandError, FaultOp};
use crate::parse::{parse_level, parse_pin};
use crate::pins::{PinId, PinPolicy};
use crate::traits::{DriverError, GpioBank};
use crate::types::{LogicLevel, PinDirection};

/// Zugriffsregel für `gpio get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadAccess {
    /// Jeder Pin 0..=28 darf gelesen (und dafür als Input konfiguriert) werden
    #[default]
    Unrestricted,
    /// Lesen nur für Pins aus der Allow-List
    AllowListed,
}

/// Setzt einen erlaubten Pin auf High oder Low
///
/// Gibt den geparsten Pin und Pegel zurück. Bei `Forbidden` wird der
/// Treiber nicht angefasst.
pub fn set_pin<G: GpioBank>(
    gpio: &mut G,
    policy: &PinPolicy,
    pin: &str,
    level: &str,
) -> Result<(PinId, LogicLevel), CommandError> {
    // Erst beide Argumente parsen, dann die Policy prüfen
    let pin = parse_pin(pin)?;
    let level = parse_level(level)?;
    if !policy.is_allowed(pin) {
        return Err(CommandError::Forbidden(pin));
    }

    configure(gpio, pin, PinDirection::Output)
        .map_err(|code| CommandError::fault(FaultOp::ConfigureOutput(pin), code))?;
    gpio.set(pin, level)
        .map_err(|err| CommandError::fault(FaultOp::Write(pin), status(err)))?;

    Ok((pin, level))
}

/// Konfiguriert einen Pin als Input und liest seinen Pegel
pub fn get_pin<G: GpioBank>(
    gpio: &mut G,
    policy: &PinPolicy,
    access: ReadAccess,
    pin: &str,
) -> Result<(PinId, LogicLevel), CommandError> {
    let pin = parse_pin(pin)?;
    if access == ReadAccess::AllowListed && !policy.is_allowed(pin) {
        return Err(CommandError::Forbidden(pin));
    }

    configure(gpio, pin, PinDirection::Input)
        .map_err(|code| CommandError::fault(FaultOp::ConfigureInput(pin), code))?;
    let level = gpio
        .get(pin)
        .map_err(|err| CommandError::fault(FaultOp::Read(pin), status(err)))?;

    Ok((pin, level))
}

/// Eine bereits passende Konfiguration gilt als Erfolg
fn configure<G: GpioBank>(gpio: &mut G, pin: PinId, direction: PinDirection) -> Result<(), i32> {
    match gpio.configure(pin, direction) {
        Ok(()) | Err(DriverError::AlreadyConfigured) => Ok(()),
        Err(DriverError::Status(code)) => Err(code),
    }
}

fn status(err: DriverError) -> i32 {
    match err {
        DriverError::AlreadyConfigured => -crate::error::errno::EALREADY,
        DriverError::Status(code) => code,
    }
}
