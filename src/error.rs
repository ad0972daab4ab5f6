// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors reported by the bit buffer operations.

use core::fmt;

/// A rejected call.  No operation modifies its buffer
/// before deciding whether to return one of these.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Error {
    /// The word count was zero or exceeded the words available.
    InvalidLength {
        /// Word count requested by the caller.
        words: usize,
        /// Words actually present in the slice.
        available: usize,
    },
    /// A shift by a negative number of bits was requested.
    InvalidShiftAmount(i64),
    /// A text destination could not hold the rendered bits
    /// plus their terminator.
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        available: usize,
    },
    /// Binary text held a different number of digits than the
    /// words being read back can hold.
    DigitCount {
        /// Digits required.
        expected: usize,
        /// Digits present.
        actual: usize,
    },
    /// A character other than `0` or `1` appeared in binary text.
    InvalidDigit {
        /// Byte index of the offending character.
        index: usize,
    },
}

impl Error {
    /// A fixed description of the error's kind, without its details.
    pub fn summary(&self) -> &'static str {
        match *self {
            Error::InvalidLength {..} => "invalid buffer length",
            Error::InvalidShiftAmount(_) => "invalid shift amount",
            Error::BufferTooSmall {..} => "destination buffer too small",
            Error::DigitCount {..} => "wrong number of binary digits",
            Error::InvalidDigit {..} => "invalid binary digit",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidLength {words, available} => {
                write!(f, "invalid buffer length of {} words ({} available)",
                       words, available)
            }
            Error::InvalidShiftAmount(shift) => {
                write!(f, "invalid shift amount {}", shift)
            }
            Error::BufferTooSmall {needed, available} => {
                write!(f, "destination buffer too small ({} bytes needed, {} available)",
                       needed, available)
            }
            Error::DigitCount {expected, actual} => {
                write!(f, "wrong number of binary digits ({} expected, {} present)",
                       expected, actual)
            }
            Error::InvalidDigit {index} => {
                write!(f, "invalid binary digit at index {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Checks that `words` is a usable word count for a slice of `len` words.
#[inline]
pub(crate) fn check_len(len: usize, words: usize) -> Result<(), Error> {
    if words == 0 || words > len {
        Err(Error::InvalidLength {words, available: len})
    } else {
        Ok(())
    }
}

/// The first `words` words of `buf`, for operations that modify it.
pub(crate) fn words_mut<T>(buf: &mut [T], words: usize) -> Result<&mut [T], Error> {
    check_len(buf.len(), words)?;
    Ok(&mut buf[..words])
}

/// The first `words` words of `buf`, for operations that only read it.
pub(crate) fn words_ref<T>(buf: &[T], words: usize) -> Result<&[T], Error> {
    check_len(buf.len(), words)?;
    Ok(&buf[..words])
}
