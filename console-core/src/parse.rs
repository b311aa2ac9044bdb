//! Parser für Konsolen-Argumente
//!
//! Alle Zahlen-Parser lehnen Teil-Treffer ab ("200x" ist ungültig),
//! stilles Abschneiden wäre an einer Pin-Schnittstelle gefährlich.

use crate::error::CommandError;
use crate::pins::PinId;
use crate::types::LogicLevel;

/// Fehler beim Parsen eines einzelnen Tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Keine Zahl oder außerhalb 0..=PIN_MAX
    Pin,
    /// Weder "high" noch "low"
    Level,
    /// Keine Zahl oder außerhalb 0..=255
    Byte,
}

impl ParseError {
    pub fn message(self) -> &'static str {
        match self {
            ParseError::Pin => "Pin number must be between 0 and 28",
            ParseError::Level => "Value must be 'high' or 'low'",
            ParseError::Byte => "Invalid value. Use 0–255.",
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::InvalidArgument(err.message())
    }
}

/// Parst eine Pin-Nummer im Bereich 0..=28
///
/// Nicht-numerische und zu große Werte liefern denselben Fehler.
pub fn parse_pin(token: &str) -> Result<PinId, ParseError> {
    token
        .parse::<u8>()
        .ok()
        .and_then(PinId::new)
        .ok_or(ParseError::Pin)
}

/// Akzeptiert genau "high" oder "low" (Groß-/Kleinschreibung zählt)
pub fn parse_level(token: &str) -> Result<LogicLevel, ParseError> {
    match token {
        "high" => Ok(LogicLevel::High),
        "low" => Ok(LogicLevel::Low),
        _ => Err(ParseError::Level),
    }
}

/// Parst einen Farbkanal-Wert 0..=255, das ganze Token muss eine Zahl sein
pub fn parse_byte(token: &str) -> Result<u8, ParseError> {
    token.parse::<u8>().map_err(|_| ParseError::Byte)
}
