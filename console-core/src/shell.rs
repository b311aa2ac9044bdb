//! Terminal-Sitzung über eine serielle Schnittstelle
//!
//! Liest Bytes, editiert die Zeile mit Echo und Backspace und führt sie bei
//! Enter über [`Console::respond`] aus. Fehler landen als `error: <text>`
//! auf dem Terminal, die Sitzung läuft danach weiter.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as Pause;
use embedded_io_async::{Read, Write};
use heapless::String;

use crate::dispatch::{Console, NEWLINE};
use crate::line::{LineEditor, LineEvent};
use crate::traits::{GpioBank, LedStrip, SystemControl};

/// Begrüßung beim Start der Sitzung
pub const BANNER: &str = "Type help for available commands";

/// Löscht das letzte Zeichen auf dem Terminal
pub const ERASE: &[u8] = b"\x08 \x08";

/// Bytes pro Lesezugriff
const READ_CHUNK: usize = 16;

/// Shell mit Zeilen-Buffer (`LINE`) und Antwort-Buffer (`RESPONSE`)
pub struct Shell<const LINE: usize, const RESPONSE: usize> {
    editor: LineEditor<LINE>,
    prompt: &'static str,
    retry_ms: u32,
}

impl<const LINE: usize, const RESPONSE: usize> Shell<LINE, RESPONSE> {
    /// `retry_ms`: Pause nach einem Lesefehler
    pub const fn new(prompt: &'static str, retry_ms: u32) -> Self {
        Self {
            editor: LineEditor::new(),
            prompt,
            retry_ms,
        }
    }

    /// Bedient das Terminal bis `read` das Ende meldet (`Ok(0)`)
    ///
    /// Lesefehler werden nach einer Pause wiederholt, Schreibfehler nur
    /// geloggt.
    pub async fn run<U, P, G, L, D, S>(
        &mut self,
        uart: &mut U,
        pause: &mut P,
        console: &mut Console<G, L, D, S>,
    ) where
        U: Read + Write,
        P: Pause,
        G: GpioBank,
        L: LedStrip,
        D: DelayNs,
        S: SystemControl,
    {
        let mut chunk = [0u8; READ_CHUNK];

        send(uart, BANNER.as_bytes()).await;
        send(uart, NEWLINE.as_bytes()).await;
        send(uart, self.prompt.as_bytes()).await;

        loop {
            let n = match uart.read(&mut chunk).await {
                Ok(0) => {
                    info!("Terminal closed");
                    return;
                }
                Ok(n) => n,
                Err(_) => {
                    warn!("UART read failed, retrying in {} ms", self.retry_ms);
                    pause.delay_ms(self.retry_ms).await;
                    continue;
                }
            };

            for &byte in &chunk[..n] {
                self.feed(byte, uart, console).await;
            }
        }
    }

    async fn feed<U, G, L, D, S>(&mut self, byte: u8, uart: &mut U, console: &mut Console<G, L, D, S>)
    where
        U: Write,
        G: GpioBank,
        L: LedStrip,
        D: DelayNs,
        S: SystemControl,
    {
        match self.editor.feed(byte) {
            LineEvent::Pending => {}
            LineEvent::Echo(c) => send(uart, &[c]).await,
            LineEvent::Erase => send(uart, ERASE).await,
            LineEvent::Submit => {
                send(uart, NEWLINE.as_bytes()).await;
                let response = self.render(console);
                if !response.is_empty() {
                    send(uart, response.as_bytes()).await;
                    send(uart, NEWLINE.as_bytes()).await;
                }
                self.editor.clear();
                send(uart, self.prompt.as_bytes()).await;
            }
        }
    }

    fn render<G, L, D, S>(&self, console: &mut Console<G, L, D, S>) -> String<RESPONSE>
    where
        G: GpioBank,
        L: LedStrip,
        D: DelayNs,
        S: SystemControl,
    {
        let line = self.editor.line();
        let mut out = String::new();
        let written = console.respond(line, &mut out);
        match line {
            Some(line) => info!("> {} => {}", line, out.as_str()),
            None => warn!("Line longer than {} bytes dropped", LINE),
        }
        if written.is_err() {
            warn!("Response truncated");
        }
        out
    }
}

async fn send<U: Write>(uart: &mut U, data: &[u8]) {
    if uart.write_all(data).await.is_err() {
        warn!("UART write failed");
    }
}
