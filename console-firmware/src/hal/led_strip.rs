// LED-Strip Treiber: WS2812 über das RMT Peripheral

use console_core::error::errno::EIO;
use console_core::{LedStrip, PixelBuffer};
use defmt::{error, info};
use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_BUFFER_SIZE;

/// WS2812 Strip am RMT Kanal 0
///
/// Schlägt die RMT-Initialisierung fehl, bleibt der Strip "nicht bereit"
/// und jedes LED-Kommando meldet `DeviceNotReady`.
///
/// Hinweis: Der Puls-Buffer wird im Task erstellt (`smart_led_buffer!`)
/// und als Parameter übergeben.
pub struct RmtLedStrip<'a> {
    led: Option<SmartLedsAdapter<'a, LED_BUFFER_SIZE>>,
}

impl<'a> RmtLedStrip<'a> {
    /// Erstellt den Strip-Treiber
    ///
    /// # Parameter
    /// - `data_pin`: Datenleitung des Strips
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Puls-Buffer für alle LEDs
    pub fn new(
        data_pin: impl PeripheralOutput<'a>,
        rmt_peripheral: RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Self {
        let led = match Rmt::<'a, Blocking>::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)) {
            Ok(rmt) => {
                info!("LED strip ready on RMT channel 0");
                Some(SmartLedsAdapter::new(rmt.channel0, data_pin, buffer))
            }
            Err(e) => {
                error!("RMT init failed: {}", e);
                None
            }
        };
        Self { led }
    }
}

impl LedStrip for RmtLedStrip<'_> {
    fn is_ready(&self) -> bool {
        self.led.is_some()
    }

    fn update(&mut self, pixels: &PixelBuffer) -> Result<(), i32> {
        let led = self.led.as_mut().ok_or(-EIO)?;
        led.write(pixels.iter()).map_err(|_| -EIO)
    }
}
