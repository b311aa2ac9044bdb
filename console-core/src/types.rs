//! Core Types für Pin- und LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;
use core::iter::RepeatN;

use rgb::RGB8;

/// Logischer Pegel eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicLevel {
    Low,
    High,
}

impl LogicLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicLevel::Low => "low",
            LogicLevel::High => "high",
        }
    }

    pub fn is_high(self) -> bool {
        self == LogicLevel::High
    }
}

impl From<bool> for LogicLevel {
    fn from(high: bool) -> Self {
        if high { LogicLevel::High } else { LogicLevel::Low }
    }
}

impl fmt::Display for LogicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Richtung eines Pins, wird vor jeder Operation neu gesetzt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
}

/// Pixel-Buffer mit einheitlicher Farbe
///
/// Der Strip dient als Status-Anzeige, daher gibt es nur Flächenfarben:
/// alle `len` Einträge sind identisch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer {
    color: RGB8,
    len: usize,
}

impl PixelBuffer {
    pub fn uniform(color: RGB8, len: usize) -> Self {
        Self { color, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pixel in Strip-Reihenfolge
    pub fn iter(&self) -> RepeatN<RGB8> {
        core::iter::repeat_n(self.color, self.len)
    }
}

impl IntoIterator for &PixelBuffer {
    type Item = RGB8;
    type IntoIter = RepeatN<RGB8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LogicLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PixelBuffer {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PixelBuffer {{ len: {}, rgb: ({}, {}, {}) }}",
            self.len,
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}
