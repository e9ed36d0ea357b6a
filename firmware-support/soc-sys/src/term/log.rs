// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use crate::global::{SingleCore, TERMINAL};
use crate::term::{CharacterDisplay, DisplaySurface, Terminal};

// The logger utilizes core::fmt to format the log messages because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use [`init`] to point it at the global terminal and install it.
pub static LOGGER: SingleCore<TermLogger<CharacterDisplay>> = SingleCore::new(TermLogger::new());

/// Logger printing records to a [`Terminal`].
///
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `TermLogger` is `Send` and `Sync`, the terminal it writes to is not.
pub struct TermLogger<D: 'static> {
    terminal: Option<&'static SingleCore<Terminal<D>>>,
    /// Most verbose level that gets printed at all.
    pub max_level: LevelFilter,
    /// Most verbose level that gets a `LEVEL | ` prefix.
    pub display_level: LevelFilter,
    /// Most verbose level that gets a `file:line - ` prefix.
    pub display_source: LevelFilter,
}

impl<D: 'static> TermLogger<D> {
    pub const fn new() -> Self {
        TermLogger {
            terminal: None,
            max_level: LevelFilter::Info,
            display_level: LevelFilter::Trace,
            display_source: LevelFilter::Off,
        }
    }

    /// Print records to `terminal`.
    pub fn set_terminal(&mut self, terminal: &'static SingleCore<Terminal<D>>) {
        self.terminal = Some(terminal);
    }
}

impl<D: 'static> Default for TermLogger<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySurface + 'static> log::Log for TermLogger<D> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(terminal) = self.terminal else {
            return;
        };
        // SAFETY: single hart, and nothing in this crate logs while it holds
        // a reference to a terminal.
        let term = unsafe { &mut *terminal.get() };
        if record.level() <= self.display_level {
            let _ = write!(term, "{} | ", record.level());
        }
        if record.level() <= self.display_source {
            if let (Some(file), Some(line)) = (record.file(), record.line()) {
                let _ = write!(term, "{}:{} - ", file, line);
            }
        }
        let _ = writeln!(term, "{}", record.args());
    }

    fn flush(&self) {}
}

unsafe impl<D: 'static> core::marker::Send for TermLogger<D> {}
unsafe impl<D: 'static> core::marker::Sync for TermLogger<D> {}

/// Point [`LOGGER`] at the global terminal and install it as the `log`
/// logger, printing records up to `max_level`.
///
/// # Safety
/// Only call this once, before anything logs, while there is a single thread
/// of execution.
pub unsafe fn init(max_level: LevelFilter) {
    let logger = &mut *LOGGER.get();
    logger.set_terminal(&TERMINAL);
    logger.max_level = max_level;
    log::set_logger_racy(logger).ok();
    log::set_max_level_racy(max_level);
}
