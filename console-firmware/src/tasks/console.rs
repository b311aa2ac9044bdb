// Console Task - Zeilen-Shell auf UART0
use console_core::{Console, Shell};
use defmt::{info, warn};
use embassy_time::Delay as Pause;
use esp_hal::Async;
use esp_hal::delay::Delay;
use esp_hal::peripherals::{GPIO8, RMT};
use esp_hal::uart::Uart;
use esp_hal_smartled::smart_led_buffer;

use crate::board_config;
use crate::config::{
    LED_COUNT, LINE_BUFFER_SIZE, PROMPT, READ_RETRY_MS, RESPONSE_BUFFER_SIZE, RMT_CLOCK_MHZ,
};
use crate::hal::{EspGpioBank, EspSystem, RmtLedStrip};

/// Console Task - Embassy Task für parallele Ausführung
///
/// Initialisiert LED-Strip und Dispatcher und übergibt dann an die
/// `Shell` aus console-core (dort auf dem Host getestet).
///
/// # Parameter
/// - `uart`: UART0 im Async-Modus (Terminal)
/// - `gpio`: Bank der schaltbaren Pins
/// - `led_pin`: GPIO8 Datenleitung des LED-Strips
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `system`: Neustart in den Bootloader
#[embassy_executor::task]
pub async fn console_task(
    mut uart: Uart<'static, Async>,
    gpio: EspGpioBank,
    led_pin: GPIO8<'static>,
    rmt_peripheral: RMT<'static>,
    system: EspSystem,
) {
    // Puls-Buffer für alle LEDs des Strips
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);
    let strip = RmtLedStrip::new(led_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    let mut console = Console::new(gpio, strip, Delay::new(), system, board_config());
    info!(
        "Console ready: {} LEDs, {} switchable pins",
        LED_COUNT,
        console.gpio().len()
    );

    let mut shell = Shell::<LINE_BUFFER_SIZE, RESPONSE_BUFFER_SIZE>::new(PROMPT, READ_RETRY_MS);
    loop {
        shell.run(&mut uart, &mut Pause, &mut console).await;
        warn!("Shell stopped, restarting");
    }
}
