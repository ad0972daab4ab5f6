// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stepping a big-endian buffer up or down by one.
//!
//! Both operations wrap at the ends of the range, so incrementing
//! all ones gives all zeroes and decrementing all zeroes gives all
//! ones.  Like `u32::overflowing_add`, they return whether that
//! happened alongside the wrapped result.

use super::error::{words_mut, words_ref, Error};
use super::word::Word;

/// Adds one to the unsigned value held in the first `words` words
/// of `buf`, carrying from the last word toward the first.
///
/// Returns `true` if the value was all ones and wrapped to zero.
///
/// ## Example
/// ```
/// use netbits::increase;
///
/// let mut addr: [u8; 4] = [10, 0, 0, 255];
/// assert_eq!(increase(&mut addr, 4), Ok(false));
/// assert_eq!(addr, [10, 0, 1, 0]);
///
/// let mut max: [u8; 2] = [0xFF, 0xFF];
/// assert_eq!(increase(&mut max, 2), Ok(true));
/// assert_eq!(max, [0x00, 0x00]);
/// ```
pub fn increase<T: Word>(buf: &mut [T], words: usize) -> Result<bool, Error> {
    words_mut(buf, words).map(carry_one)
}

/// Subtracts one from the unsigned value held in the first `words`
/// words of `buf`, borrowing from the last word toward the first.
///
/// Returns `true` if the value was zero and wrapped to all ones.
pub fn decrease<T: Word>(buf: &mut [T], words: usize) -> Result<bool, Error> {
    words_mut(buf, words).map(borrow_one)
}

/// Adds one to all of `buf`, returning `true` on wrap.
pub(crate) fn carry_one<T: Word>(buf: &mut [T]) -> bool {
    for word in buf.iter_mut().rev() {
        if *word != T::MAX {
            *word = word.increment();
            return false;
        }
        *word = T::ZERO;
    }
    true
}

/// Subtracts one from all of `buf`, returning `true` on wrap.
pub(crate) fn borrow_one<T: Word>(buf: &mut [T]) -> bool {
    for word in buf.iter_mut().rev() {
        if *word != T::ZERO {
            *word = word.decrement();
            return false;
        }
        *word = T::MAX;
    }
    true
}

/// Returns true if the first `words` words of `buf` are all zero.
pub fn is_zero<T: Word>(buf: &[T], words: usize) -> Result<bool, Error> {
    words_ref(buf, words).map(|buf| buf.iter().all(|w| *w == T::ZERO))
}

/// Returns true if the first `words` words of `buf` are all ones.
pub fn is_max<T: Word>(buf: &[T], words: usize) -> Result<bool, Error> {
    words_ref(buf, words).map(|buf| buf.iter().all(|w| *w == T::MAX))
}
