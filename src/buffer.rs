// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A checked view over a caller-owned word buffer.
//!
//! ## Example
//! ```
//! use netbits::BitBuffer;
//!
//! let mut storage: [u16; 8] = [0xFFFF; 8];
//! let mut mask = BitBuffer::new(&mut storage).unwrap();
//! mask.shift_left(128 - 64).unwrap();
//! assert_eq!(mask.bit_len(), 128);
//! assert_eq!(mask.as_slice(), &[0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0, 0, 0, 0]);
//! ```

use core::fmt;

use super::error::{words_mut, Error};
use super::format::{format_bits, BitString};
use super::shift::{shift_left, shift_right};
use super::step::{borrow_one, carry_one};
use super::word::Word;

/// A non-empty run of words treated as one big-endian unsigned integer.
///
/// The length is validated once on construction; the methods then
/// forward to the free functions of this crate for the whole view.
#[derive(Debug)]
pub struct BitBuffer<'a, T: Word> {
    words: &'a mut [T],
}

impl<'a, T: Word> BitBuffer<'a, T> {
    /// Views all of `words`.
    ///
    /// Fails with `InvalidLength` if `words` is empty.
    pub fn new(words: &'a mut [T]) -> Result<BitBuffer<'a, T>, Error> {
        let len = words.len();
        BitBuffer::with_len(words, len)
    }

    /// Views the first `len` words of `words`.
    ///
    /// Fails with `InvalidLength` if `len` is zero or larger
    /// than `words.len()`.
    pub fn with_len(words: &'a mut [T], len: usize) -> Result<BitBuffer<'a, T>, Error> {
        words_mut(words, len).map(|words| BitBuffer {words})
    }

    /// Number of words in the view.
    #[inline]
    pub fn words(&self) -> usize {
        self.words.len()
    }

    /// Number of bits in the view.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.words.len() * T::BITS as usize
    }

    /// The viewed words.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.words
    }

    /// See [`shift_left`](crate::shift_left).
    pub fn shift_left(&mut self, shift: i64) -> Result<(), Error> {
        let len = self.words();
        shift_left(self.words, len, shift)
    }

    /// See [`shift_right`](crate::shift_right).
    pub fn shift_right(&mut self, shift: i64) -> Result<(), Error> {
        let len = self.words();
        shift_right(self.words, len, shift)
    }

    /// Adds one, returning `true` if the value wrapped to zero.
    pub fn increase(&mut self) -> bool {
        carry_one(self.words)
    }

    /// Subtracts one, returning `true` if the value wrapped to all ones.
    pub fn decrease(&mut self) -> bool {
        borrow_one(self.words)
    }

    /// Returns true if every bit is clear.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == T::ZERO)
    }

    /// Returns true if every bit is set.
    pub fn is_max(&self) -> bool {
        self.words.iter().all(|w| *w == T::MAX)
    }

    /// Renders the view into `out`; see [`format_bits`](crate::format_bits).
    pub fn format_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        format_bits(self.words, self.words(), out)
    }
}

impl<'a, T: Word> fmt::Display for BitBuffer<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&BitString(&*self.words), f)
    }
}
