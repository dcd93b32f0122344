//! User-facing message channel.
//!
//! The engine and emitter talk to a [`Console`] with `(level, message)` pairs;
//! how levels map to streams and colors is decided by the implementation.

use std::cell::RefCell;
use std::io::Write;

use super::ColorMode;
use super::ansi::{self, paint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

pub trait Console {
    fn emit(&self, level: Level, message: &str);
}

/// Writes `Info` and `Warn` to stdout and `Error` to stderr.
pub struct TerminalConsole {
    use_colors: bool,
}

impl TerminalConsole {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.should_use_colors(),
        }
    }
}

impl Console for TerminalConsole {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Info => {
                let mut stdout = std::io::stdout().lock();
                let _ = writeln!(stdout, "{message}");
            }
            Level::Warn => {
                let prefix = paint(self.use_colors, ansi::YELLOW, "Warning:");
                let mut stdout = std::io::stdout().lock();
                let _ = writeln!(stdout, "{prefix} {message}");
            }
            Level::Error => {
                let prefix = paint(self.use_colors, ansi::RED, "Error:");
                let mut stderr = std::io::stderr().lock();
                let _ = writeln!(stderr, "{prefix} {message}");
            }
        }
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Console for MemoryConsole {
    fn emit(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
