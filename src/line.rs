// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading newline-terminated records of bounded length.
//!
//! ## Example
//! ```
//! use std::io::Cursor;
//! use netbits::{Line, LineReader};
//!
//! let mut reader = LineReader::new(Cursor::new("prefix = 24\r\nlonger line\n"), 8);
//! let mut line = String::new();
//! assert_eq!(reader.read_line(&mut line).unwrap(), Line::Truncated(8));
//! assert_eq!(line, "prefix =");
//! assert_eq!(reader.read_line(&mut line).unwrap(), Line::Truncated(8));
//! assert_eq!(line, "longer l");
//! assert_eq!(reader.read_line(&mut line).unwrap(), Line::Eof);
//! assert_eq!(reader.line_number(), 2);
//! ```

use std::io;

/// The outcome of reading one record.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Line {
    /// A whole record of the given length in bytes was read.
    Complete(usize),
    /// The record was longer than the limit.  Its first bytes,
    /// of the given length, were kept and the remainder discarded.
    Truncated(usize),
    /// A record of the given length in bytes was read but is not
    /// valid UTF-8.  It still counts toward the line number.
    Invalid(usize),
    /// The input is exhausted.
    Eof,
}

/// Wraps a `BufRead` and yields one record per call,
/// never holding more than a fixed number of bytes.
///
/// A record ends at `\n`, which is not included, and a `\r`
/// directly before it is also dropped.  A final record
/// without a newline is still a complete record.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
    line_number: usize,
    scratch: Vec<u8>,
}

impl<R: io::BufRead> LineReader<R> {
    /// Reads records of up to `max_len` bytes from `reader`.
    pub fn new(reader: R, max_len: usize) -> LineReader<R> {
        LineReader {
            reader,
            max_len,
            line_number: 0,
            scratch: Vec::with_capacity(max_len.saturating_add(1)),
        }
    }

    /// The 1-based number of the record most recently returned,
    /// or 0 before the first one.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consumes the wrapper, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Replaces the contents of `line` with the next record.
    ///
    /// A record that is not UTF-8 leaves `line` empty and is
    /// reported as [`Line::Invalid`], so reading can carry on
    /// with the record after it.
    ///
    /// # Errors
    ///
    /// Errors from the underlying reader are passed through.
    pub fn read_line(&mut self, line: &mut String) -> io::Result<Line> {
        line.clear();
        self.scratch.clear();

        /*one byte past the limit is kept so a "\r\n" ending
          on the boundary can be told apart from an overflow*/
        let cap = self.max_len.saturating_add(1);
        let mut overflow = false;
        let mut terminated = false;
        let mut read_any = false;

        while !terminated {
            let consumed = {
                let buf = self.reader.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                read_any = true;
                let (record, consumed) = match buf.iter().position(|b| *b == b'\n') {
                    Some(end) => {
                        terminated = true;
                        (&buf[..end], end + 1)
                    }
                    None => (buf, buf.len()),
                };
                let room = cap - self.scratch.len();
                if record.len() > room {
                    self.scratch.extend_from_slice(&record[..room]);
                    overflow = true;
                } else {
                    self.scratch.extend_from_slice(record);
                }
                consumed
            };
            self.reader.consume(consumed);
        }

        if !read_any {
            return Ok(Line::Eof);
        }
        self.line_number += 1;

        if !overflow && self.scratch.last() == Some(&b'\r') {
            self.scratch.pop();
        }
        let truncated = self.scratch.len() > self.max_len;
        if truncated {
            self.scratch.truncate(self.max_len);
        }

        let text = match std::str::from_utf8(&self.scratch) {
            Ok(text) => text,
            /*a cut through a multi-byte character is not an encoding error*/
            Err(err) if truncated && err.error_len().is_none() => {
                let valid = err.valid_up_to();
                match std::str::from_utf8(&self.scratch[..valid]) {
                    Ok(text) => text,
                    Err(_) => return Ok(Line::Invalid(self.scratch.len())),
                }
            }
            Err(_) => return Ok(Line::Invalid(self.scratch.len())),
        };
        line.push_str(text);

        Ok(if truncated {Line::Truncated(line.len())} else {Line::Complete(line.len())})
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, LineReader};
    use std::io::{BufReader, Cursor};

    #[test]
    fn records_split_across_fills() {
        /*a one-byte buffer forces every record through many fill_buf calls*/
        let data = "first\nsecond line\nx";
        let mut reader = LineReader::new(BufReader::with_capacity(1, Cursor::new(data)), 6);
        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Complete(5));
        assert_eq!(line, "first");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Truncated(6));
        assert_eq!(line, "second");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Complete(1));
        assert_eq!(line, "x");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Eof);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn crlf_on_the_boundary() {
        let mut reader = LineReader::new(Cursor::new("abcd\r\nabcde\r\n"), 4);
        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Complete(4));
        assert_eq!(line, "abcd");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Truncated(4));
        assert_eq!(line, "abcd");
    }

    #[test]
    fn invalid_record_between_valid_ones() {
        let data: &[u8] = b"one\n\xC3\x28two\r\nthree";
        let mut reader = LineReader::new(BufReader::with_capacity(2, data), 16);
        let mut line = String::from("stale");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Complete(3));
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Invalid(5));
        assert_eq!(line, "");
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Complete(5));
        assert_eq!(line, "three");
        assert_eq!(reader.read_line(&mut line).unwrap(), Line::Eof);
    }
}
