// System-Steuerung: Neustart in den ROM-Download-Modus

use console_core::SystemControl;
use defmt::info;
use esp_hal::peripherals::LP_AON;

/// Neustart in den Bootloader
///
/// Setzt `FORCE_DOWNLOAD_BOOT` im LP_AON Block und löst einen Software-Reset
/// aus. Der ROM-Bootloader startet danach im Download-Modus, genau wie mit
/// gehaltenem BOOT-Taster (GPIO9), und wartet auf espflash.
pub struct EspSystem {
    _lp_aon: LP_AON<'static>,
}

impl EspSystem {
    pub fn new(lp_aon: LP_AON<'static>) -> Self {
        Self { _lp_aon: lp_aon }
    }
}

impl SystemControl for EspSystem {
    fn enter_bootloader(&mut self) {
        info!("Rebooting into download mode");
        LP_AON::regs()
            .sys_cfg()
            .modify(|_, w| w.force_download_boot().set_bit());
        esp_hal::system::software_reset()
    }
}
