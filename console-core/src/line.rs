//! Zeilen-Editor für die serielle Konsole
//!
//! Sammelt eingehende Bytes zu einer Zeile, mit Echo und Backspace.
//! Zu lange Zeilen werden komplett verworfen statt abgeschnitten.

use heapless::String;

/// Was der Aufrufer nach einem Byte tun soll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Nichts ausgeben
    Pending,
    /// Zeichen zurück an das Terminal schicken
    Echo(u8),
    /// Letztes Zeichen auf dem Terminal löschen
    Erase,
    /// Zeile ist fertig, abholen mit [`LineEditor::line`]
    Submit,
}

pub struct LineEditor<const N: usize> {
    buffer: String<N>,
    overflow: bool,
    last_was_cr: bool,
}

impl<const N: usize> LineEditor<N> {
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            overflow: false,
            last_was_cr: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> LineEvent {
        let last_was_cr = core::mem::replace(&mut self.last_was_cr, byte == b'\r');
        match byte {
            // "\r\n" zählt als ein Zeilenende
            b'\n' if last_was_cr => LineEvent::Pending,
            b'\r' | b'\n' => LineEvent::Submit,
            0x08 | 0x7f => {
                if self.buffer.pop().is_some() {
                    LineEvent::Erase
                } else {
                    LineEvent::Pending
                }
            }
            b' '..=b'~' => {
                if self.buffer.push(byte as char).is_err() {
                    self.overflow = true;
                    LineEvent::Pending
                } else {
                    LineEvent::Echo(byte)
                }
            }
            _ => LineEvent::Pending,
        }
    }

    /// Aktuelle Zeile, `None` wenn sie den Buffer gesprengt hat
    pub fn line(&self) -> Option<&str> {
        if self.overflow {
            None
        } else {
            Some(self.buffer.as_str())
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.overflow = false;
    }
}

impl<const N: usize> Default for LineEditor<N> {
    fn default() -> Self {
        Self::new()
    }
}
