// Library-Root: Treiber und Tasks der Konsolen-Firmware
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von console-core
pub use console_core::{Console, ConsoleConfig, PinPolicy, ReadAccess};

use crate::config::{ALLOWED_PINS, LED_COUNT};

/// Konsolen-Konfiguration des Boards
///
/// Lesezugriffe sind ebenfalls auf die Allow-List beschränkt: auf dem
/// ESP32-C6 würde `gpio get` den Pin auf Input umschalten und damit
/// USB, UART oder den SPI-Flash lahmlegen.
pub const fn board_config() -> ConsoleConfig {
    ConsoleConfig {
        strip_len: LED_COUNT,
        policy: PinPolicy::new(ALLOWED_PINS),
        read_access: ReadAccess::AllowListed,
    }
}
