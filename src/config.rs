// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loading `key = value` option files into a typed record.
//!
//! The caller describes its record with a static table of
//! [`OptionSpec`] entries, one per recognized key, each naming the
//! field the key sets.  Lines that cannot be applied are reported
//! to the [`Log`] and skipped; only I/O failures stop loading.
//!
//! ## Example
//! ```
//! use std::io::Cursor;
//! use netbits::{config, Log, OptionSpec};
//!
//! #[derive(Default)]
//! struct Options {
//!     family: String,
//!     prefix: i64,
//! }
//!
//! fn family(o: &mut Options) -> &mut String {&mut o.family}
//! fn prefix(o: &mut Options) -> &mut i64 {&mut o.prefix}
//!
//! static OPTIONS: &[OptionSpec<Options>] = &[
//!     OptionSpec::string("family", family),
//!     OptionSpec::int("prefix", prefix),
//! ];
//!
//! let file = "# subnet options\nfamily = ipv6\nprefix = 64\ncolor = blue\n";
//! let mut options = Options::default();
//! let report = config::load(Cursor::new(file), OPTIONS, &mut options,
//!                           &mut Log::silent()).unwrap();
//! assert_eq!(options.family, "ipv6");
//! assert_eq!(options.prefix, 64);
//! assert_eq!(report.applied, 2);
//! assert_eq!(report.skipped.len(), 1);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::line::{Line, LineReader};
use super::log::Log;

/// Longest line, in bytes, that the loader will interpret.
pub const MAX_LINE_LEN: usize = 1024;

/// The typed field of record `T` that an option sets.
pub enum Field<T> {
    /// A text field; the trimmed value is stored as-is.
    Str(fn(&mut T) -> &mut String),
    /// A signed decimal integer field.
    Int(fn(&mut T) -> &mut i64),
}

/// One recognized option: its key and the field it sets.
pub struct OptionSpec<T> {
    /// The key, matched case-sensitively.
    pub name: &'static str,
    /// Where the value goes.
    pub field: Field<T>,
}

impl<T> OptionSpec<T> {
    /// An option stored in a `String` field.
    pub const fn string(name: &'static str, field: fn(&mut T) -> &mut String) -> OptionSpec<T> {
        OptionSpec {name, field: Field::Str(field)}
    }

    /// An option stored in an `i64` field.
    pub const fn int(name: &'static str, field: fn(&mut T) -> &mut i64) -> OptionSpec<T> {
        OptionSpec {name, field: Field::Int(field)}
    }
}

/// Why a line was not applied.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SkipReason {
    /// The line exceeded [`MAX_LINE_LEN`].
    Truncated,
    /// The line was not valid UTF-8.
    InvalidEncoding,
    /// The line had no `=`.
    MissingSeparator,
    /// The key is not in the option table.
    UnknownKey(String),
    /// An integer option's value did not parse.
    BadInteger {
        /// The option's key.
        key: String,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::Truncated => {
                write!(f, "line longer than {} bytes", MAX_LINE_LEN)
            }
            SkipReason::InvalidEncoding => {
                write!(f, "line is not valid UTF-8")
            }
            SkipReason::MissingSeparator => {
                write!(f, "expected \"key = value\"")
            }
            SkipReason::UnknownKey(key) => {
                write!(f, "unknown option {:?}", key)
            }
            SkipReason::BadInteger {key, value} => {
                write!(f, "option {:?} expects an integer, got {:?}", key, value)
            }
        }
    }
}

/// A line that was read but not applied.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Skipped {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub reason: SkipReason,
}

/// What a load did.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct LoadReport {
    /// Assignments stored into the record.
    pub applied: usize,
    /// Lines ignored because of a problem, in file order.
    pub skipped: Vec<Skipped>,
}

/// A failure that stopped loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the input failed.
    Io(io::Error),
    /// Opening or reading the named file failed.
    File {
        /// The file's path.
        path: PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => {
                write!(f, "error reading options: {}", err)
            }
            ConfigError::File {path, source} => {
                write!(f, "error reading options from {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::File {source, ..} => Some(source),
        }
    }
}

impl From<io::Error> for ConfigError {
    #[inline]
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

/// Reads option lines from `reader` into `record`.
///
/// Blank lines and lines starting with `#` are ignored.
/// Every other line must be `key = value` with a key from `table`;
/// whitespace around key and value is trimmed.  A key given more
/// than once keeps its last value.
///
/// # Errors
///
/// Only a failure of `reader` is an error.  Malformed lines are
/// logged at `Level::Warn`, listed in the returned report, and
/// otherwise ignored.
pub fn load<R, T>(reader: R,
                  table: &[OptionSpec<T>],
                  record: &mut T,
                  log: &mut Log) -> Result<LoadReport, ConfigError>
    where R: io::BufRead {
    let mut lines = LineReader::new(reader, MAX_LINE_LEN);
    let mut line = String::new();
    let mut report = LoadReport::default();

    loop {
        let outcome = lines.read_line(&mut line)?;
        let number = lines.line_number();
        let result = match outcome {
            Line::Eof => break,
            Line::Truncated(_) => Err(SkipReason::Truncated),
            Line::Invalid(_) => Err(SkipReason::InvalidEncoding),
            Line::Complete(_) => match parse_line(&line) {
                None => continue,
                Some(Err(reason)) => Err(reason),
                Some(Ok((key, value))) => apply(table, record, key, value),
            },
        };

        match result {
            Ok(()) => {
                report.applied += 1;
                log.debug(format_args!("line {}: {}", number, line.trim()));
            }
            Err(reason) => {
                log.warn(format_args!("line {}: {}, skipped", number, reason));
                report.skipped.push(Skipped {line: number, reason});
            }
        }
    }

    log.info(format_args!("{} options applied, {} lines skipped",
                          report.applied, report.skipped.len()));
    Ok(report)
}

/// Opens the file at `path` and loads it as with [`load`].
///
/// # Errors
///
/// `ConfigError::File` if the file cannot be opened or read.
pub fn load_file<P, T>(path: P,
                       table: &[OptionSpec<T>],
                       record: &mut T,
                       log: &mut Log) -> Result<LoadReport, ConfigError>
    where P: AsRef<Path> {
    let path = path.as_ref();
    let with_path = |source: io::Error| ConfigError::File {path: path.to_path_buf(), source};

    let file = File::open(path).map_err(with_path)?;
    log.debug(format_args!("reading options from {}", path.display()));
    load(BufReader::new(file), table, record, log).map_err(|err| match err {
        ConfigError::Io(source) => with_path(source),
        other => other,
    })
}

/// Splits a line into key and value.
/// Returns `None` for lines that carry nothing.
fn parse_line(line: &str) -> Option<Result<(&str, &str), SkipReason>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(match line.split_once('=') {
        Some((key, value)) => Ok((key.trim(), value.trim())),
        None => Err(SkipReason::MissingSeparator),
    })
}

fn apply<T>(table: &[OptionSpec<T>],
            record: &mut T,
            key: &str,
            value: &str) -> Result<(), SkipReason> {
    let spec = table.iter()
                    .find(|spec| spec.name == key)
                    .ok_or_else(|| SkipReason::UnknownKey(key.to_owned()))?;

    match spec.field {
        Field::Str(field) => {
            let field = field(record);
            field.clear();
            field.push_str(value);
        }
        Field::Int(field) => {
            let parsed = value.parse::<i64>().map_err(|_| SkipReason::BadInteger {
                key: key.to_owned(),
                value: value.to_owned(),
            })?;
            *field(record) = parsed;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, SkipReason};

    #[test]
    fn line_shapes() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("  # note = 1"), None);
        assert_eq!(parse_line(" prefix=24 "), Some(Ok(("prefix", "24"))));
        assert_eq!(parse_line("name = a = b"), Some(Ok(("name", "a = b"))));
        assert_eq!(parse_line("key = "), Some(Ok(("key", ""))));
        assert_eq!(parse_line("prefix 24"), Some(Err(SkipReason::MissingSeparator)));
    }
}
