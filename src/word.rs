// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The storage word of a bit buffer.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Shl, Shr};

/// An unsigned integer type usable as one word of a big-endian buffer.
///
/// The word width and maximum value are carried by the type,
/// so the same engine serves 8-bit, 16-bit or wider granularities.
pub trait Word: Sized + Copy + Default + Debug + PartialEq +
    Shl<u32, Output = Self> + Shr<u32, Output = Self> +
    BitOr<Self, Output = Self> + BitAnd<Self, Output = Self> {
    /// Number of bits in one word.
    const BITS: u32;

    /// The all-zero word.
    const ZERO: Self;

    /// The all-ones word.
    const MAX: Self;

    /// Adds one, wrapping at `MAX`.
    fn increment(self) -> Self;

    /// Subtracts one, wrapping at zero.
    fn decrement(self) -> Self;

    /// Converts a single bit to a word holding 0 or 1.
    fn from_bit(bit: bool) -> Self;

    /// Returns the bit `offset` places above the least significant one.
    #[inline(always)]
    fn bit(self, offset: u32) -> bool {
        (self >> offset) & Self::from_bit(true) != Self::ZERO
    }
}

macro_rules! define_word {
    ($t:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn increment(self) -> Self {self.wrapping_add(1)}
            #[inline(always)]
            fn decrement(self) -> Self {self.wrapping_sub(1)}
            #[inline(always)]
            fn from_bit(bit: bool) -> Self {if bit {1} else {0}}
        }
    };
}

define_word!(u8);
define_word!(u16);
define_word!(u32);
define_word!(u64);
define_word!(u128);

/// Total number of bits held by `words` words of type `T`,
/// or `None` if that count does not fit in a `usize`.
#[inline]
pub(crate) fn bit_len<T: Word>(words: usize) -> Option<usize> {
    words.checked_mul(T::BITS as usize)
}

#[cfg(test)]
mod tests {
    use super::Word;

    #[test]
    fn bit_offsets() {
        assert!(0b1000_0000u8.bit(7));
        assert!(!0b1000_0000u8.bit(6));
        assert!(0x0001u16.bit(0));
        assert!(!0x0001u16.bit(15));
    }

    #[test]
    fn wrapping_steps() {
        assert_eq!(u8::MAX.increment(), 0);
        assert_eq!(0u16.decrement(), u16::MAX);
        assert_eq!(<u128 as Word>::BITS, 128);
    }
}
