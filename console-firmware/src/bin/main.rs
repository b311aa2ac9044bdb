// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Flex;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und defmt-Ausgabe
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use mcu_console::config::{ALLOWED_PINS, CONSOLE_BAUDRATE, LED_COUNT, LED_GPIO_PIN};
use mcu_console::hal::{EspGpioBank, EspSystem};
use mcu_console::tasks::console_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt den
/// Console-Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // UART0 für die Konsole (TX=GPIO16, RX=GPIO17)
    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(CONSOLE_BAUDRATE),
    )
    .expect("Failed to initialize UART0")
    .with_tx(peripherals.GPIO16)
    .with_rx(peripherals.GPIO17)
    .into_async();

    // GPIO-Bank: nur Pins, die frei auf der Stiftleiste liegen
    let mut gpio = EspGpioBank::new();
    for (number, flex) in [
        (0, Flex::new(peripherals.GPIO0)),
        (1, Flex::new(peripherals.GPIO1)),
        (2, Flex::new(peripherals.GPIO2)),
        (3, Flex::new(peripherals.GPIO3)),
        (10, Flex::new(peripherals.GPIO10)),
        (11, Flex::new(peripherals.GPIO11)),
        (18, Flex::new(peripherals.GPIO18)),
        (19, Flex::new(peripherals.GPIO19)),
        (20, Flex::new(peripherals.GPIO20)),
        (21, Flex::new(peripherals.GPIO21)),
        (22, Flex::new(peripherals.GPIO22)),
        (23, Flex::new(peripherals.GPIO23)),
    ] {
        gpio.add(number, flex).expect("Failed to add pin to GPIO bank");
    }
    if gpio.len() != ALLOWED_PINS.len() {
        warn!(
            "GPIO bank has {} pins, allow-list has {}",
            gpio.len(),
            ALLOWED_PINS.len()
        );
    }

    let system = EspSystem::new(peripherals.LP_AON);

    info!(
        "Starting console at {} baud, LED strip ({} LEDs) on GPIO{}",
        CONSOLE_BAUDRATE, LED_COUNT, LED_GPIO_PIN
    );

    // Spawn Console Task (besitzt UART, GPIO-Bank, LED-Strip und System)
    spawner
        .spawn(console_task(
            uart,
            gpio,
            peripherals.GPIO8,
            peripherals.RMT,
            system,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
