//! Command Dispatcher
//!
//! Statische Kommando-Tabelle mit festen Argument-Anzahlen. Die Anzahl wird
//! geprüft bevor ein Handler auch nur ein Argument parst.

use core::fmt;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::error::CommandError;
use crate::gpio::{self, ReadAccess};
use crate::led::{self, LedMode};
use crate::pins::{PinId, PinPolicy};
use crate::traits::{GpioBank, LedStrip, SystemControl};
use crate::types::LogicLevel;

/// Maximale Anzahl Tokens pro Zeile (Kommando + Unterkommando + Argumente)
pub const MAX_TOKENS: usize = 8;

/// Zeilenende auf der seriellen Konsole
pub const NEWLINE: &str = "\r\n";

/// Antwort auf eine Zeile, die den Zeilen-Buffer gesprengt hat
pub const LINE_TOO_LONG: &str = "error: line too long";

/// Handler hinter einem Tabellen-Eintrag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    GpioSet,
    GpioGet,
    SetLed,
    Blink,
    Bootsel,
    Help,
}

/// Entweder ein Handler oder eine Gruppe von Unterkommandos
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Run(Handler),
    Group(&'static [Command]),
}

/// Eintrag der Kommando-Tabelle
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub help: &'static str,
    pub usage: &'static str,
    /// Pflicht-Argumente (ohne Kommando-Namen)
    pub mandatory: usize,
    pub optional: usize,
    pub action: Action,
}

impl Command {
    const fn run(
        name: &'static str,
        help: &'static str,
        usage: &'static str,
        mandatory: usize,
        optional: usize,
        handler: Handler,
    ) -> Self {
        Self {
            name,
            help,
            usage,
            mandatory,
            optional,
            action: Action::Run(handler),
        }
    }

    fn accepts(&self, argc: usize) -> bool {
        argc >= self.mandatory && argc <= self.mandatory + self.optional
    }
}

pub const GPIO_COMMANDS: &[Command] = &[
    Command::run(
        "set",
        "Set GPIO pin high or low",
        "Usage: gpio set <pin> <high|low>",
        2,
        0,
        Handler::GpioSet,
    ),
    Command::run(
        "get",
        "Get GPIO pin state",
        "Usage: gpio get <pin>",
        1,
        0,
        Handler::GpioGet,
    ),
];

pub const COMMANDS: &[Command] = &[
    Command {
        name: "gpio",
        help: "GPIO control commands",
        usage: "Usage: gpio <set|get> <pin> [high|low]",
        mandatory: 0,
        optional: 0,
        action: Action::Group(GPIO_COMMANDS),
    },
    Command::run(
        "setled",
        "Set LED color: red, green, blue, on, off, or custom",
        "Usage: setled <red|green|blue|off|on|custom> [value(s)]",
        1,
        3,
        Handler::SetLed,
    ),
    Command::run("blink", "Blink the LED strip twice", "Usage: blink", 0, 0, Handler::Blink),
    Command::run("bootsel", "Reboot into the bootloader", "Usage: bootsel", 0, 0, Handler::Bootsel),
    Command::run("help", "List available commands", "Usage: help", 0, 0, Handler::Help),
];

/// Sucht Handler und Argumente zu einer tokenisierten Zeile
///
/// `tokens` darf nicht leer sein.
pub fn resolve<'t>(tokens: &'t [&'t str]) -> Result<(Handler, &'t [&'t str]), CommandError> {
    let Some((&name, mut args)) = tokens.split_first() else {
        return Err(CommandError::InvalidArgument("Empty command"));
    };
    let mut command = find(COMMANDS, name)
        .ok_or(CommandError::InvalidArgument("Unknown command. Type help for available commands"))?;

    loop {
        match command.action {
            Action::Group(subcommands) => {
                let (&sub, rest) = args
                    .split_first()
                    .ok_or(CommandError::InvalidArgument(command.usage))?;
                command = find(subcommands, sub).ok_or(CommandError::InvalidArgument(command.usage))?;
                args = rest;
            }
            Action::Run(handler) => {
                if !command.accepts(args.len()) {
                    return Err(CommandError::InvalidArgument(command.usage));
                }
                return Ok((handler, args));
            }
        }
    }
}

fn find(table: &'static [Command], name: &str) -> Option<&'static Command> {
    table.iter().find(|command| command.name == name)
}

/// Ergebnis eines erfolgreichen Kommandos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Keine Ausgabe (leere Zeile, `blink`, `bootsel`)
    Silent,
    PinSet { pin: PinId, level: LogicLevel },
    PinRead { pin: PinId, level: LogicLevel },
    LedSet(LedMode),
    Help,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Silent => Ok(()),
            Reply::PinSet { pin, level } => write!(f, "Set pin {} to {}", pin, level),
            Reply::PinRead { pin, level } => write!(f, "Pin {} is {}", pin, level),
            Reply::LedSet(mode) => write!(f, "LED set to {}", mode.name()),
            Reply::Help => {
                f.write_str("Available commands:")?;
                for command in COMMANDS {
                    write!(f, "{}  {:<8}: {}", NEWLINE, command.name, command.help)?;
                    if let Action::Group(subcommands) = command.action {
                        for sub in subcommands {
                            write!(f, "{}    {:<6}: {}", NEWLINE, sub.name, sub.help)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Laufzeit-Konfiguration der Konsole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Anzahl der LEDs im Strip
    pub strip_len: usize,
    pub policy: PinPolicy,
    pub read_access: ReadAccess,
}

impl ConsoleConfig {
    pub const fn new(strip_len: usize) -> Self {
        Self {
            strip_len,
            policy: PinPolicy::DEFAULT,
            read_access: ReadAccess::Unrestricted,
        }
    }
}

/// Die Konsole besitzt alle Hardware-Handles
///
/// Jedes Kommando leiht sie sich exklusiv (`&mut self`), damit läuft
/// immer nur eine Hardware-Operation gleichzeitig.
pub struct Console<G, L, D, S> {
    gpio: G,
    strip: L,
    delay: D,
    system: S,
    config: ConsoleConfig,
}

impl<G, L, D, S> Console<G, L, D, S>
where
    G: GpioBank,
    L: LedStrip,
    D: DelayNs,
    S: SystemControl,
{
    pub fn new(gpio: G, strip: L, delay: D, system: S, config: ConsoleConfig) -> Self {
        Self {
            gpio,
            strip,
            delay,
            system,
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Führt eine Eingabezeile aus
    ///
    /// Leere Zeilen liefern `Reply::Silent`.
    pub fn execute(&mut self, line: &str) -> Result<Reply, CommandError> {
        let mut tokens: Vec<&str, MAX_TOKENS> = Vec::new();
        for token in line.split_ascii_whitespace() {
            tokens
                .push(token)
                .map_err(|_| CommandError::InvalidArgument("Too many arguments"))?;
        }
        if tokens.is_empty() {
            return Ok(Reply::Silent);
        }

        let (handler, args) = resolve(&tokens)?;
        self.run(handler, args)
    }

    /// Führt eine Zeile aus und schreibt die Antwort-Zeile (ohne Zeilenende)
    ///
    /// `None` steht für eine zu lange Zeile. Fehler werden als
    /// `error: <text>` ausgegeben, `Reply::Silent` schreibt nichts.
    /// `Err` heißt nur, dass `out` die Antwort nicht ganz aufnehmen konnte.
    pub fn respond<W: fmt::Write>(&mut self, line: Option<&str>, out: &mut W) -> fmt::Result {
        let Some(line) = line else {
            return out.write_str(LINE_TOO_LONG);
        };
        match self.execute(line) {
            Ok(reply) => write!(out, "{}", reply),
            Err(err) => write!(out, "error: {}", err),
        }
    }

    fn run(&mut self, handler: Handler, args: &[&str]) -> Result<Reply, CommandError> {
        let strip_len = self.config.strip_len;
        match (handler, args) {
            (Handler::GpioSet, [pin, level]) => {
                let (pin, level) = gpio::set_pin(&mut self.gpio, &self.config.policy, pin, level)?;
                Ok(Reply::PinSet { pin, level })
            }
            (Handler::GpioGet, [pin]) => {
                let (pin, level) = gpio::get_pin(
                    &mut self.gpio,
                    &self.config.policy,
                    self.config.read_access,
                    pin,
                )?;
                Ok(Reply::PinRead { pin, level })
            }
            (Handler::SetLed, args) => {
                let mode = led::set_color(&mut self.strip, strip_len, args)?;
                Ok(Reply::LedSet(mode))
            }
            (Handler::Blink, _) => {
                led::blink(&mut self.strip, &mut self.delay, strip_len)?;
                Ok(Reply::Silent)
            }
            (Handler::Bootsel, _) => {
                // Blinken ist nur ein optischer Hinweis, der Neustart passiert immer
                led::blink(&mut self.strip, &mut self.delay, strip_len).ok();
                self.system.enter_bootloader();
                Ok(Reply::Silent)
            }
            (Handler::Help, _) => Ok(Reply::Help),
            // resolve() hat die Argument-Anzahl bereits geprüft
            (Handler::GpioSet | Handler::GpioGet, _) => {
                Err(CommandError::InvalidArgument("Wrong number of arguments"))
            }
        }
    }
}
