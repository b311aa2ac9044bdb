// GPIO-Bank: Zugriff auf ESP32-C6 Pins über ihre Nummer
//
// esp-hal vergibt Pins als eigene Typen (GPIO2, GPIO3, ...). Die Konsole
// adressiert Pins aber zur Laufzeit per Nummer, deshalb werden die Pins
// beim Start als `Flex` in eine Tabelle gelegt.

use console_core::error::errno::{EINVAL, ENODEV};
use console_core::{DriverError, GpioBank, LogicLevel, PinDirection, PinId};
use esp_hal::gpio::{Flex, InputConfig, Level, OutputConfig, Pull};
use heapless::Vec;

use crate::config::GPIO_BANK_SIZE;

struct BankPin {
    id: PinId,
    flex: Flex<'static>,
    direction: Option<PinDirection>,
}

/// Tabelle aller Pins, die die Konsole anfassen kann
pub struct EspGpioBank {
    pins: Vec<BankPin, GPIO_BANK_SIZE>,
}

impl EspGpioBank {
    pub const fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Nimmt einen Pin in die Bank auf
    ///
    /// Der Pin bleibt unkonfiguriert (hochohmig) bis zum ersten Kommando.
    pub fn add(&mut self, number: u8, flex: Flex<'static>) -> Result<(), DriverError> {
        let id = PinId::new(number).ok_or(DriverError::Status(-EINVAL))?;
        if self.pins.iter().any(|pin| pin.id == id) {
            return Err(DriverError::Status(-EINVAL));
        }
        self.pins
            .push(BankPin {
                id,
                flex,
                direction: None,
            })
            .map_err(|_| DriverError::Status(-EINVAL))
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    fn slot(&mut self, pin: PinId) -> Result<&mut BankPin, DriverError> {
        self.pins
            .iter_mut()
            .find(|slot| slot.id == pin)
            .ok_or(DriverError::Status(-ENODEV))
    }
}

impl Default for EspGpioBank {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioBank for EspGpioBank {
    fn configure(&mut self, pin: PinId, direction: PinDirection) -> Result<(), DriverError> {
        let slot = self.slot(pin)?;
        if slot.direction == Some(direction) {
            return Err(DriverError::AlreadyConfigured);
        }

        match direction {
            PinDirection::Output => {
                slot.flex.set_input_enable(false);
                slot.flex.apply_output_config(&OutputConfig::default());
                slot.flex.set_output_enable(true);
            }
            PinDirection::Input => {
                slot.flex.set_output_enable(false);
                slot.flex
                    .apply_input_config(&InputConfig::default().with_pull(Pull::None));
                slot.flex.set_input_enable(true);
            }
        }
        slot.direction = Some(direction);
        Ok(())
    }

    fn set(&mut self, pin: PinId, level: LogicLevel) -> Result<(), DriverError> {
        let slot = self.slot(pin)?;
        let level = if level.is_high() {
            Level::High
        } else {
            Level::Low
        };
        slot.flex.set_level(level);
        Ok(())
    }

    fn get(&mut self, pin: PinId) -> Result<LogicLevel, DriverError> {
        let slot = self.slot(pin)?;
        Ok(LogicLevel::from(slot.flex.is_high()))
    }
}
