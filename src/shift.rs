// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logical shifts of a big-endian buffer.
//!
//! A shift is performed in two passes: whole words are relocated
//! first, then the remaining sub-word distance is applied to every
//! word while carrying bits in from its neighbor.
//!
//! ## Example
//! ```
//! use netbits::{shift_left, shift_right};
//!
//! let mut addr: [u16; 4] = [0x0000, 0x0000, 0x0000, 0x8001];
//! shift_left(&mut addr, 4, 20).unwrap();
//! assert_eq!(addr, [0x0000, 0x0008, 0x0010, 0x0000]);
//! shift_right(&mut addr, 4, 20).unwrap();
//! assert_eq!(addr, [0x0000, 0x0000, 0x0000, 0x8001]);
//! ```

use super::error::{words_mut, Error};
use super::word::Word;

/// Shifts the first `words` words of `buf` toward the least
/// significant end by `shift` bits, filling the vacated most
/// significant bits with zero.
///
/// Bits shifted past the end are discarded.
/// A shift of the buffer's whole width or more clears it.
///
/// # Errors
///
/// `InvalidLength` if `words` is zero or exceeds `buf.len()`,
/// `InvalidShiftAmount` if `shift` is negative.
/// The buffer is untouched in either case.
pub fn shift_right<T: Word>(buf: &mut [T], words: usize, shift: i64) -> Result<(), Error> {
    let buf = words_mut(buf, words)?;
    let (whole, part) = split::<T>(shift)?;

    let whole = match whole {
        Some(whole) if whole < words => whole,
        _ => {
            buf.fill(T::ZERO);
            return Ok(());
        }
    };

    if whole > 0 {
        buf.copy_within(0..words - whole, whole);
        buf[..whole].fill(T::ZERO);
    }

    if part > 0 {
        for i in (1..words).rev() {
            buf[i] = (buf[i] >> part) | (buf[i - 1] << (T::BITS - part));
        }
        buf[0] = buf[0] >> part;
    }

    Ok(())
}

/// Shifts the first `words` words of `buf` toward the most
/// significant end by `shift` bits, filling the vacated least
/// significant bits with zero.
///
/// Bits shifted past the front are discarded.
/// A shift of the buffer's whole width or more clears it.
///
/// # Errors
///
/// `InvalidLength` if `words` is zero or exceeds `buf.len()`,
/// `InvalidShiftAmount` if `shift` is negative.
/// The buffer is untouched in either case.
pub fn shift_left<T: Word>(buf: &mut [T], words: usize, shift: i64) -> Result<(), Error> {
    let buf = words_mut(buf, words)?;
    let (whole, part) = split::<T>(shift)?;

    let whole = match whole {
        Some(whole) if whole < words => whole,
        _ => {
            buf.fill(T::ZERO);
            return Ok(());
        }
    };

    if whole > 0 {
        buf.copy_within(whole..words, 0);
        buf[words - whole..].fill(T::ZERO);
    }

    if part > 0 {
        for i in 0..words - 1 {
            buf[i] = (buf[i] << part) | (buf[i + 1] >> (T::BITS - part));
        }
        buf[words - 1] = buf[words - 1] << part;
    }

    Ok(())
}

/// Splits a shift into whole words and leftover bits.
///
/// The word count is `None` when it does not fit in a `usize`,
/// which can only mean it exceeds any buffer.
fn split<T: Word>(shift: i64) -> Result<(Option<usize>, u32), Error> {
    if shift < 0 {
        return Err(Error::InvalidShiftAmount(shift));
    }
    let shift = shift as u64;
    let bits = u64::from(T::BITS);
    let whole = usize::try_from(shift / bits).ok();
    Ok((whole, (shift % bits) as u32))
}
