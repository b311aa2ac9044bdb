//! Zustandsverfolgung zwischen zwei Abfragen

use console_core::{BatteryStatus, LedMode, battery_indicator};

/// Merkt sich den zuletzt angezeigten Zustand
///
/// Ein Kommando wird nur erzeugt, wenn sich Status oder Kapazität seit der
/// letzten angezeigten Messung geändert haben.
#[derive(Debug)]
pub struct Watcher {
    intensity: u8,
    last: Option<(BatteryStatus, u8)>,
}

impl Watcher {
    pub fn new(intensity: u8) -> Self {
        Self {
            intensity,
            last: None,
        }
    }

    /// Verarbeitet eine Messung und liefert ggf. den neuen LED-Modus
    ///
    /// 0 % und "Not charging" werden komplett ignoriert. Ein unbekannter
    /// Status wird gemerkt, zeigt aber nichts an, danach wird der nächste
    /// bekannte Zustand wieder gesendet.
    pub fn observe(&mut self, status: BatteryStatus, capacity: u8) -> Option<LedMode> {
        if capacity == 0 || status == BatteryStatus::NotCharging {
            return None;
        }
        if self.last == Some((status, capacity)) {
            return None;
        }
        self.last = Some((status, capacity));
        battery_indicator(status, capacity, self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reading_is_sent() {
        let mut watcher = Watcher::new(255);
        assert_eq!(
            watcher.observe(BatteryStatus::Discharging, 80),
            Some(LedMode::Red(255))
        );
    }

    #[test]
    fn test_unchanged_reading_is_suppressed() {
        let mut watcher = Watcher::new(40);
        assert!(watcher.observe(BatteryStatus::Charging, 50).is_some());
        assert_eq!(watcher.observe(BatteryStatus::Charging, 50), None);
        assert_eq!(
            watcher.observe(BatteryStatus::Charging, 51),
            Some(LedMode::Blue(40))
        );
    }

    #[test]
    fn test_quirk_readings_do_not_reset_state() {
        let mut watcher = Watcher::new(255);
        assert!(watcher.observe(BatteryStatus::Full, 100).is_some());
        assert_eq!(watcher.observe(BatteryStatus::Full, 0), None);
        assert_eq!(watcher.observe(BatteryStatus::NotCharging, 100), None);
        // zurück zum alten Zustand: nichts Neues anzuzeigen
        assert_eq!(watcher.observe(BatteryStatus::Full, 100), None);
    }

    #[test]
    fn test_unknown_status_resends_previous_color() {
        let mut watcher = Watcher::new(255);
        assert!(watcher.observe(BatteryStatus::Full, 100).is_some());
        assert_eq!(watcher.observe(BatteryStatus::Unknown, 100), None);
        assert_eq!(watcher.observe(BatteryStatus::Unknown, 100), None);
        assert_eq!(
            watcher.observe(BatteryStatus::Full, 100),
            Some(LedMode::Green(255))
        );
    }

    #[test]
    fn test_command_line_format() {
        let mut watcher = Watcher::new(12);
        let mode = watcher.observe(BatteryStatus::Full, 100).unwrap();
        assert_eq!(mode.to_string(), "setled green 12");
    }
}
