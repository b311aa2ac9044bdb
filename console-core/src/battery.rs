//! Akku-Anzeige: bildet den Ladezustand eines Laptops auf eine LED-Farbe ab
//!
//! Wird vom Host-Tool `battery-watcher` benutzt, das die Kommandos über die
//! serielle Konsole an das Board schickt.

use crate::led::LedMode;

/// Ladezustand wie ihn `/sys/class/power_supply/*/status` meldet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Charging,
    Discharging,
    Full,
    NotCharging,
    Unknown,
}

impl BatteryStatus {
    pub fn parse(status: &str) -> Self {
        match status.trim() {
            "Charging" => BatteryStatus::Charging,
            "Discharging" => BatteryStatus::Discharging,
            "Full" => BatteryStatus::Full,
            "Not charging" => BatteryStatus::NotCharging,
            _ => BatteryStatus::Unknown,
        }
    }
}

/// Farbe für einen Akku-Zustand, `None` heißt: nichts senden
///
/// Manche Controller melden kurzzeitig 0 % Kapazität, das wird ignoriert.
/// "Not charging" gilt als voll und ändert die Anzeige nicht.
pub fn battery_indicator(status: BatteryStatus, capacity: u8, intensity: u8) -> Option<LedMode> {
    if capacity == 0 {
        return None;
    }
    match status {
        BatteryStatus::Charging if capacity < 100 => Some(LedMode::Blue(intensity)),
        BatteryStatus::Charging | BatteryStatus::Full => Some(LedMode::Green(intensity)),
        BatteryStatus::Discharging => Some(LedMode::Red(intensity)),
        BatteryStatus::NotCharging | BatteryStatus::Unknown => None,
    }
}
