// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering a buffer as binary digits and reading it back.
//!
//! Each presentation emits one `'0'` or `'1'` per bit,
//! most significant bit of the first word first.
//!
//! ## Example
//! ```
//! use netbits::{format_bits, parse_bits};
//!
//! let addr: [u8; 2] = [0x00, 0x01];
//! let mut text = [0u8; 17];
//! assert_eq!(format_bits(&addr, 2, &mut text).unwrap(), 16);
//! assert_eq!(&text[..16], b"0000000000000001");
//! assert_eq!(text[16], 0);
//!
//! let mut parsed: [u8; 2] = [0xFF, 0xFF];
//! parse_bits("0000000000000001", &mut parsed, 2).unwrap();
//! assert_eq!(parsed, addr);
//! ```

use core::fmt::{self, Write as _};

use super::error::{words_mut, words_ref, Error};
use super::word::{bit_len, Word};

#[cfg(feature = "std")]
use std::io;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use core2::io;

/// Iterates over every bit of `buf`, most significant first.
fn bits<T: Word>(buf: &[T]) -> impl Iterator<Item = bool> + '_ {
    buf.iter()
       .flat_map(|word| (0..T::BITS).rev().map(move |offset| word.bit(offset)))
}

#[inline(always)]
fn digit(bit: bool) -> u8 {
    if bit {b'1'} else {b'0'}
}

/// Writes the bits of the first `words` words of `buf` into `out`
/// as ASCII digits followed by a NUL terminator.
///
/// Returns the number of digits written, not counting the terminator,
/// which is always `words * T::BITS`.
///
/// # Errors
///
/// `InvalidLength` if `words` is zero or exceeds `buf.len()`.
/// `BufferTooSmall` if `out` is shorter than `words * T::BITS + 1`;
/// nothing is written in that case.
pub fn format_bits<T: Word>(buf: &[T], words: usize, out: &mut [u8]) -> Result<usize, Error> {
    let buf = words_ref(buf, words)?;
    let digits = bit_len::<T>(words)
        .ok_or(Error::InvalidLength {words, available: buf.len()})?;
    let needed = digits.saturating_add(1);
    if out.len() < needed {
        return Err(Error::BufferTooSmall {needed, available: out.len()});
    }

    for (slot, bit) in out.iter_mut().zip(bits(buf)) {
        *slot = digit(bit);
    }
    out[digits] = 0;
    Ok(digits)
}

/// Writes the bits of the first `words` words of `buf` to `writer`
/// as ASCII digits followed by a single newline.
///
/// The digits are identical to those produced by [`format_bits`].
///
/// # Errors
///
/// An invalid `words` is reported as an error of kind
/// `InvalidInput` before anything is written.
/// Errors from the underlying writer are passed through.
///
/// ## Example
/// ```
/// use netbits::write_bits;
///
/// let mask: [u16; 2] = [0xFFFF, 0xFF00];
/// let mut output = Vec::new();
/// write_bits(&mask, 2, &mut output).unwrap();
/// assert_eq!(output, b"11111111111111111111111100000000\n");
/// ```
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn write_bits<T, W>(buf: &[T], words: usize, writer: &mut W) -> io::Result<()>
    where T: Word, W: io::Write + ?Sized {
    let buf = words_ref(buf, words).map_err(invalid_input)?;

    /*batch digits so the writer sees a few large writes*/
    let mut chunk = [0u8; 64];
    let mut filled = 0;
    for bit in bits(buf) {
        chunk[filled] = digit(bit);
        filled += 1;
        if filled == chunk.len() {
            writer.write_all(&chunk)?;
            filled = 0;
        }
    }
    writer.write_all(&chunk[..filled])?;
    writer.write_all(b"\n")
}

#[cfg(feature = "std")]
fn invalid_input(err: Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn invalid_input(err: Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.summary())
}

/// Displays every bit of a slice of words as binary digits.
///
/// ## Example
/// ```
/// use netbits::BitString;
///
/// let addr: [u8; 2] = [0xA0, 0x05];
/// assert_eq!(format!("{}", BitString(&addr[..])), "1010000000000101");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BitString<'a, T: Word>(pub &'a [T]);

impl<'a, T: Word> fmt::Display for BitString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in bits(self.0) {
            f.write_char(if bit {'1'} else {'0'})?;
        }
        Ok(())
    }
}

/// Reads binary digits back into the first `words` words of `buf`,
/// the inverse of [`format_bits`].
///
/// `text` must hold exactly `words * T::BITS` digits.
///
/// # Errors
///
/// `InvalidLength` if `words` is zero or exceeds `buf.len()`.
/// `DigitCount` if `text` does not hold exactly `words * T::BITS`
/// characters.  `InvalidDigit` at the first
/// character that is neither `'0'` nor `'1'`.
/// The buffer is only written once the whole text is validated.
pub fn parse_bits<T: Word>(text: &str, buf: &mut [T], words: usize) -> Result<(), Error> {
    let buf = words_mut(buf, words)?;
    let digits = text.as_bytes();
    let expected = bit_len::<T>(words)
        .ok_or(Error::InvalidLength {words, available: buf.len()})?;
    if digits.len() != expected {
        return Err(Error::DigitCount {expected, actual: digits.len()});
    }
    if let Some(index) = digits.iter().position(|d| *d != b'0' && *d != b'1') {
        return Err(Error::InvalidDigit {index});
    }

    for (word, chunk) in buf.iter_mut().zip(digits.chunks(T::BITS as usize)) {
        *word = chunk.iter()
                     .fold(T::ZERO, |acc, d| (acc << 1) | T::from_bit(*d == b'1'));
    }
    Ok(())
}
