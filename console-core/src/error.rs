//! Fehler-Typen der Konsole
//!
//! Jeder Fehler wird an den Benutzer gemeldet und nie automatisch
//! wiederholt. Kein Fehler beendet die Konsole.

use core::fmt;

use crate::pins::PinId;

/// Errno-Werte, die als negative Exit-Codes an die Konsole gehen
pub mod errno {
    pub const EPERM: i32 = 1;
    pub const EIO: i32 = 5;
    pub const ENODEV: i32 = 19;
    pub const EINVAL: i32 = 22;
    pub const EALREADY: i32 = 120;
}

/// Welche Treiber-Operation fehlgeschlagen ist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOp {
    ConfigureOutput(PinId),
    ConfigureInput(PinId),
    Write(PinId),
    Read(PinId),
    LedUpdate,
}

/// Treiber-Fehler mit dem Status-Code des Treibers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareFault {
    pub op: FaultOp,
    pub code: i32,
}

/// Fehler eines Konsolen-Kommandos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Falsches Format, außerhalb des Bereichs oder falsche Argument-Anzahl
    InvalidArgument(&'static str),
    /// Pin steht nicht in der Allow-List
    Forbidden(PinId),
    /// LED-Strip meldet sich nicht bereit
    DeviceNotReady,
    HardwareFault(HardwareFault),
}

impl CommandError {
    pub(crate) const fn fault(op: FaultOp, code: i32) -> Self {
        Self::HardwareFault(HardwareFault { op, code })
    }

    /// Negativer Exit-Code wie ihn die Shell zurückgibt
    pub fn code(&self) -> i32 {
        match self {
            CommandError::InvalidArgument(_) => -errno::EINVAL,
            CommandError::Forbidden(_) => -errno::EPERM,
            CommandError::DeviceNotReady => -errno::ENODEV,
            // Treiber liefern bereits negative Codes, positive werden normalisiert
            CommandError::HardwareFault(fault) if fault.code > 0 => -fault.code,
            CommandError::HardwareFault(fault) => fault.code,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidArgument(msg) => f.write_str(msg),
            CommandError::Forbidden(pin) => write!(f, "Pin {} is not allowed to be controlled", pin),
            CommandError::DeviceNotReady => f.write_str("LED strip device not ready"),
            CommandError::HardwareFault(HardwareFault { op, code }) => match op {
                FaultOp::ConfigureOutput(pin) => {
                    write!(f, "Failed to configure pin {} as output: {}", pin, code)
                }
                FaultOp::ConfigureInput(pin) => {
                    write!(f, "Failed to configure pin {} as input: {}", pin, code)
                }
                FaultOp::Write(pin) => write!(f, "Failed to set pin {}: {}", pin, code),
                FaultOp::Read(pin) => write!(f, "Failed to read pin {}: {}", pin, code),
                FaultOp::LedUpdate => write!(f, "Failed to update LED strip: {}", code),
            },
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for CommandError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CommandError::InvalidArgument(msg) => defmt::write!(fmt, "InvalidArgument({})", msg),
            CommandError::Forbidden(pin) => defmt::write!(fmt, "Forbidden({})", pin),
            CommandError::DeviceNotReady => defmt::write!(fmt, "DeviceNotReady"),
            CommandError::HardwareFault(fault) => {
                defmt::write!(fmt, "HardwareFault(code: {})", fault.code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_error_codes() {
        let pin = PinId::new(3).unwrap();
        assert_eq!(CommandError::InvalidArgument("x").code(), -22);
        assert_eq!(CommandError::Forbidden(pin).code(), -1);
        assert_eq!(CommandError::DeviceNotReady.code(), -19);
        assert_eq!(CommandError::fault(FaultOp::Read(pin), -5).code(), -5);
        assert_eq!(CommandError::fault(FaultOp::LedUpdate, 5).code(), -5);
    }

    #[test]
    fn test_error_messages() {
        let pin = PinId::new(7).unwrap();
        assert_eq!(
            CommandError::Forbidden(pin).to_string(),
            "Pin 7 is not allowed to be controlled"
        );
        assert_eq!(
            CommandError::fault(FaultOp::ConfigureOutput(pin), -5).to_string(),
            "Failed to configure pin 7 as output: -5"
        );
        assert_eq!(
            CommandError::fault(FaultOp::LedUpdate, -19).to_string(),
            "Failed to update LED strip: -19"
        );
    }
}
