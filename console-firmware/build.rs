// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Vom Linker aufgerufen: <kind> <symbol>
    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start` runs before spawning the console task."
                    );
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => println!("cargo:warning=linker error script unavailable: {}", e),
    }
}
