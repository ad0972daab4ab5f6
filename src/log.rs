// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Diagnostics for the file-reading helpers.
//!
//! There is no global verbosity setting.  Whoever calls a helper
//! that reports diagnostics hands it a [`Log`] saying how much to
//! report and where to write it.
//!
//! ## Example
//! ```
//! use netbits::{Level, Log};
//!
//! let mut output = Vec::new();
//! {
//!     let mut log = Log::new(Level::Warn, &mut output);
//!     log.warn(format_args!("unknown key {:?}", "mask"));
//!     log.debug(format_args!("not shown"));
//! }
//! assert_eq!(output, b"warning: unknown key \"mask\"\n");
//! ```

use std::fmt;
use std::io::{self, Write};

/// Severity of a diagnostic, least verbose first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub enum Level {
    /// Problems that stop an operation.
    Error,
    /// Input that was skipped.
    Warn,
    /// Summaries of completed work.
    Info,
    /// Every decision made along the way.
    Debug,
}

impl Level {
    /// Maps a numeric verbosity (0 = errors only) to a level.
    /// 3 or more is `Debug`.
    pub fn from_verbosity(verbosity: u8) -> Level {
        match verbosity {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        })
    }
}

/// A diagnostic destination with a verbosity threshold.
pub struct Log<'a> {
    level: Level,
    sink: Option<Box<dyn io::Write + 'a>>,
}

impl<'a> Log<'a> {
    /// Writes messages at `level` or more severe to `sink`.
    pub fn new<W: io::Write + 'a>(level: Level, sink: W) -> Log<'a> {
        Log {level, sink: Some(Box::new(sink))}
    }

    /// Writes messages at `level` or more severe to standard error.
    pub fn stderr(level: Level) -> Log<'static> {
        Log::new(level, io::stderr())
    }

    /// Discards every message.
    pub fn silent() -> Log<'static> {
        Log {level: Level::Error, sink: None}
    }

    /// Returns true if a message at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.sink.is_some() && level <= self.level
    }

    /// Writes one line `"<level>: <message>"` if `level` is enabled.
    ///
    /// A failing sink does not interrupt the caller;
    /// the message is dropped.
    pub fn log(&mut self, level: Level, message: fmt::Arguments) {
        if level > self.level {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            let _ = writeln!(sink, "{}: {}", level, message);
        }
    }

    /// Logs at `Level::Error`.
    #[inline]
    pub fn error(&mut self, message: fmt::Arguments) {
        self.log(Level::Error, message)
    }

    /// Logs at `Level::Warn`.
    #[inline]
    pub fn warn(&mut self, message: fmt::Arguments) {
        self.log(Level::Warn, message)
    }

    /// Logs at `Level::Info`.
    #[inline]
    pub fn info(&mut self, message: fmt::Arguments) {
        self.log(Level::Info, message)
    }

    /// Logs at `Level::Debug`.
    #[inline]
    pub fn debug(&mut self, message: fmt::Arguments) {
        self.log(Level::Debug, message)
    }
}

impl<'a> fmt::Debug for Log<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Log")
         .field("level", &self.level)
         .field("silent", &self.sink.is_none())
         .finish()
    }
}
