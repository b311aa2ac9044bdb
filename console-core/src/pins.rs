//! Pin-Policy: welche GPIO-Leitungen darf die Konsole anfassen?
//!
//! Die Allow-List ist eine explizite Aufzählung (keine berechnete
//! Ausschlussliste), damit Änderungen im Review sichtbar bleiben.

use core::fmt;

/// Höchste Pin-Nummer, die die Konsole akzeptiert
pub const PIN_MAX: u8 = 28;

/// Standard-Allow-List des Referenz-Boards
///
/// Ausgeschlossen: UART (0, 1), I2C0 (4, 5), I2C1 (6, 7), SPI0 (20-23),
/// PWM (25), ADC (26-28) und die LED-Strip-Datenleitung (16).
pub const DEFAULT_ALLOWED_PINS: &[u8] = &[2, 3, 8, 9, 10, 11, 12, 13, 14, 15, 17, 18, 19, 24];

/// Logische Pin-Nummer im Bereich 0..=PIN_MAX
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(u8);

impl PinId {
    /// Gibt `None` zurück wenn `number > PIN_MAX`
    pub const fn new(number: u8) -> Option<Self> {
        if number <= PIN_MAX {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "GPIO{}", self.0)
    }
}

/// Statische Menge erlaubter Pins, zur Build-Zeit festgelegt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPolicy {
    allowed: &'static [u8],
}

impl PinPolicy {
    /// Policy mit der Allow-List des Referenz-Boards
    pub const DEFAULT: Self = Self::new(DEFAULT_ALLOWED_PINS);

    pub const fn new(allowed: &'static [u8]) -> Self {
        Self { allowed }
    }

    /// Prüft ob ein Pin vom Benutzer gesteuert werden darf
    pub fn is_allowed(&self, pin: PinId) -> bool {
        self.allowed.contains(&pin.number())
    }

    /// Alle erlaubten Pins in Tabellen-Reihenfolge
    pub fn allowed_pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.allowed.iter().filter_map(|&n| PinId::new(n))
    }
}

impl Default for PinPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
