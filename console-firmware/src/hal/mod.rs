// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Treiber-Traits aus console-core für den ESP32-C6.

pub mod gpio_bank;
pub mod led_strip;
pub mod system;

pub use gpio_bank::EspGpioBank;
pub use led_strip::RmtLedStrip;
pub use system::EspSystem;
