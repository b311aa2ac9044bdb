//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu den Treibern,
//! die der Konsolen-Kern aufruft aber nicht selbst implementiert.
//!
//! # Implementierungen
//! - **Production:** `EspGpioBank`, `RmtLedStrip`, `EspSystem` (console-firmware)
//! - **Testing:** Mock-Implementierungen (console-tests)

use crate::pins::PinId;
use crate::types::{LogicLevel, PinDirection, PixelBuffer};

/// Fehler-Typ der Treiber-Schicht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// Pin ist bereits in der gewünschten Richtung konfiguriert
    AlreadyConfigured,
    /// Treiber-spezifischer Status-Code (negativ)
    Status(i32),
}

/// GPIO-Controller mit Zugriff über Pin-Nummern
pub trait GpioBank {
    /// Konfiguriert die Richtung eines Pins
    ///
    /// Darf `DriverError::AlreadyConfigured` liefern, der Aufrufer
    /// behandelt das als Erfolg.
    fn configure(&mut self, pin: PinId, direction: PinDirection) -> Result<(), DriverError>;

    /// Setzt den Ausgangspegel eines als Output konfigurierten Pins
    fn set(&mut self, pin: PinId, level: LogicLevel) -> Result<(), DriverError>;

    /// Liest den Pegel eines Pins
    fn get(&mut self, pin: PinId) -> Result<LogicLevel, DriverError>;
}

/// Adressierbarer RGB LED-Strip (WS2812/Neopixel)
pub trait LedStrip {
    /// Meldet ob der Strip-Treiber initialisiert ist
    fn is_ready(&self) -> bool;

    /// Schreibt alle Pixel in einem Aufruf
    ///
    /// Gibt `Err(status)` mit einem Status-Code ungleich 0 zurück
    /// wenn der Hardware-Zugriff fehlschlägt.
    fn update(&mut self, pixels: &PixelBuffer) -> Result<(), i32>;
}

/// System-Steuerung (Neustart in den Bootloader)
pub trait SystemControl {
    /// Auf echter Hardware kehrt dieser Aufruf nicht zurück
    fn enter_bootloader(&mut self);
}

// Geliehene Treiber: Tests behalten so den Zugriff auf ihre Mocks

impl<T: GpioBank + ?Sized> GpioBank for &mut T {
    fn configure(&mut self, pin: PinId, direction: PinDirection) -> Result<(), DriverError> {
        T::configure(self, pin, direction)
    }

    fn set(&mut self, pin: PinId, level: LogicLevel) -> Result<(), DriverError> {
        T::set(self, pin, level)
    }

    fn get(&mut self, pin: PinId) -> Result<LogicLevel, DriverError> {
        T::get(self, pin)
    }
}

impl<T: LedStrip + ?Sized> LedStrip for &mut T {
    fn is_ready(&self) -> bool {
        T::is_ready(self)
    }

    fn update(&mut self, pixels: &PixelBuffer) -> Result<(), i32> {
        T::update(self, pixels)
    }
}

impl<T: SystemControl + ?Sized> SystemControl for &mut T {
    fn enter_bootloader(&mut self) {
        T::enter_bootloader(self)
    }
}
