//! LED Command Handler
//!
//! Ein Farb-Kommando wird genau einmal in einen [`LedMode`] geparst und
//! danach nur noch per `match` ausgewertet.

use core::fmt;

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::error::{CommandError, FaultOp};
use crate::parse::parse_byte;
use crate::traits::LedStrip;
use crate::types::PixelBuffer;

/// Standard-Helligkeit für red/green/blue ohne Wert
pub const FULL_BRIGHTNESS: u8 = 255;

/// Halbe Periode des `blink`-Kommandos in Millisekunden
pub const BLINK_HALF_PERIOD_MS: u32 = 500;

/// Anzahl der An/Aus-Zyklen von `blink`
pub const BLINK_CYCLES: usize = 2;

const USAGE: &str = "Usage: setled <red|green|blue|off|on|custom> [value(s)]";
const USAGE_CHANNEL: &str = "Usage: setled <red|green|blue> [0-255]";
const USAGE_OFF: &str = "Usage: setled off";
const USAGE_ON: &str = "Usage: setled on <0-255>";
const USAGE_CUSTOM: &str = "Usage: setled custom <R> <G> <B>";

/// Farb-Modus eines `setled`-Kommandos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    Red(u8),
    Green(u8),
    Blue(u8),
    Off,
    /// Graustufe: alle drei Kanäle gleich
    On(u8),
    Custom(RGB8),
}

impl LedMode {
    /// Parst `<mode> [args...]` (ohne den Kommando-Namen)
    pub fn parse(args: &[&str]) -> Result<Self, CommandError> {
        let Some((&mode, values)) = args.split_first() else {
            return Err(CommandError::InvalidArgument(USAGE));
        };

        match mode {
            "red" | "green" | "blue" => {
                let brightness = match values {
                    [] => FULL_BRIGHTNESS,
                    [value] => parse_byte(value).map_err(|_| {
                        CommandError::InvalidArgument("Invalid brightness value. Use 0–255.")
                    })?,
                    _ => return Err(CommandError::InvalidArgument(USAGE_CHANNEL)),
                };
                Ok(match mode {
                    "red" => LedMode::Red(brightness),
                    "green" => LedMode::Green(brightness),
                    _ => LedMode::Blue(brightness),
                })
            }
            "off" => match values {
                [] => Ok(LedMode::Off),
                _ => Err(CommandError::InvalidArgument(USAGE_OFF)),
            },
            "on" => match values {
                [value] => Ok(LedMode::On(parse_byte(value)?)),
                _ => Err(CommandError::InvalidArgument(USAGE_ON)),
            },
            "custom" => match values {
                [r, g, b] => {
                    let r = parse_byte(r)
                        .map_err(|_| CommandError::InvalidArgument("Invalid red value. Use 0–255."))?;
                    let g = parse_byte(g).map_err(|_| {
                        CommandError::InvalidArgument("Invalid green value. Use 0–255.")
                    })?;
                    let b = parse_byte(b).map_err(|_| {
                        CommandError::InvalidArgument("Invalid blue value. Use 0–255.")
                    })?;
                    Ok(LedMode::Custom(RGB8 { r, g, b }))
                }
                _ => Err(CommandError::InvalidArgument(USAGE_CUSTOM)),
            },
            _ => Err(CommandError::InvalidArgument(
                "Invalid color. Use red, green, blue, on, off, or custom.",
            )),
        }
    }

    /// Name wie er im Kommando steht
    pub fn name(&self) -> &'static str {
        match self {
            LedMode::Red(_) => "red",
            LedMode::Green(_) => "green",
            LedMode::Blue(_) => "blue",
            LedMode::Off => "off",
            LedMode::On(_) => "on",
            LedMode::Custom(_) => "custom",
        }
    }

    pub fn color(&self) -> RGB8 {
        match *self {
            LedMode::Red(r) => RGB8 { r, g: 0, b: 0 },
            LedMode::Green(g) => RGB8 { r: 0, g, b: 0 },
            LedMode::Blue(b) => RGB8 { r: 0, g: 0, b },
            LedMode::Off => RGB8::default(),
            LedMode::On(level) => RGB8 {
                r: level,
                g: level,
                b: level,
            },
            LedMode::Custom(color) => color,
        }
    }
}

/// Formatiert den Modus als Konsolen-Kommando, z.B. `setled blue 255`
impl fmt::Display for LedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LedMode::Red(v) | LedMode::Green(v) | LedMode::Blue(v) | LedMode::On(v) => {
                write!(f, "setled {} {}", self.name(), v)
            }
            LedMode::Off => f.write_str("setled off"),
            LedMode::Custom(RGB8 { r, g, b }) => write!(f, "setled custom {} {} {}", r, g, b),
        }
    }
}

/// Füllt den ganzen Strip mit einer Farbe
pub fn fill<L: LedStrip>(strip: &mut L, color: RGB8, strip_len: usize) -> Result<(), CommandError> {
    if !strip.is_ready() {
        return Err(CommandError::DeviceNotReady);
    }
    let pixels = PixelBuffer::uniform(color, strip_len);
    strip
        .update(&pixels)
        .map_err(|status| CommandError::fault(FaultOp::LedUpdate, status))
}

/// `setled`: parst den Modus und schreibt die Farbe auf den Strip
///
/// Bei Parse-Fehlern wird der Strip nicht angefasst.
pub fn set_color<L: LedStrip>(
    strip: &mut L,
    strip_len: usize,
    args: &[&str],
) -> Result<LedMode, CommandError> {
    let mode = LedMode::parse(args)?;
    fill(strip, mode.color(), strip_len)?;
    Ok(mode)
}

/// `blink`: Strip zweimal weiß aufleuchten lassen
pub fn blink<L: LedStrip, D: DelayNs>(
    strip: &mut L,
    delay: &mut D,
    strip_len: usize,
) -> Result<(), CommandError> {
    let white = LedMode::On(FULL_BRIGHTNESS).color();
    for _ in 0..BLINK_CYCLES {
        fill(strip, white, strip_len)?;
        delay.delay_ms(BLINK_HALF_PERIOD_MS);
        fill(strip, RGB8::default(), strip_len)?;
        delay.delay_ms(BLINK_HALF_PERIOD_MS);
    }
    Ok(())
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedMode {
    fn format(&self, fmt: defmt::Formatter) {
        let color = self.color();
        defmt::write!(
            fmt,
            "LedMode {{ name: {}, rgb: ({}, {}, {}) }}",
            self.name(),
            color.r,
            color.g,
            color.b
        )
    }
}
