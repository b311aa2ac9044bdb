// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den LED-Strip (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 7;

/// RMT Puls-Buffer: 24 Bits pro LED + 1 Reset-Puls
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// Pins, die die Konsole schalten darf (ESP32-C6 DevKitC-1)
///
/// Nicht enthalten:
/// - 4-7: JTAG (MTMS/MTDI/MTCK/MTDO), 4 und 5 sind außerdem Strapping-Pins
/// - 8: LED-Strip Datenleitung (und Strapping-Pin)
/// - 9, 15: Strapping-Pins (Boot-Modus)
/// - 12, 13: USB-Serial-JTAG (defmt-Ausgabe)
/// - 16, 17: UART0 (diese Konsole)
/// - 24-30: SPI-Flash
pub const ALLOWED_PINS: &[u8] = &[0, 1, 2, 3, 10, 11, 18, 19, 20, 21, 22, 23];

/// Maximale Anzahl Pins in der GPIO-Bank
pub const GPIO_BANK_SIZE: usize = 16;

// ============================================================================
// Konsolen-Konfiguration
// ============================================================================

/// Baudrate der UART-Konsole
pub const CONSOLE_BAUDRATE: u32 = 115_200;

/// Maximale Zeilenlänge in Bytes
pub const LINE_BUFFER_SIZE: usize = 128;

/// Puffer für eine formatierte Antwort (help ist die längste)
pub const RESPONSE_BUFFER_SIZE: usize = 512;

/// Eingabe-Prompt
pub const PROMPT: &str = "uart:~$ ";

/// Pause nach einem UART-Lesefehler in Millisekunden
pub const READ_RETRY_MS: u32 = 100;
