// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arithmetic on big-endian bit buffers of any width.
//!
//! A buffer is a slice of fixed-size unsigned words interpreted as a
//! single unsigned integer, most significant word first.  This is the
//! shape of an IPv4 address held as `[u8; 4]` or an IPv6 address
//! held as `[u16; 8]`, and the operations here are the ones needed
//! to derive masks and step through address ranges:
//! logical shifts, increment and decrement with carry propagation,
//! and rendering as a string of binary digits.
//!
//! Every operation takes the number of words to operate on
//! explicitly and rejects a count that is zero or larger than the
//! slice before touching anything.
//!
//! ## Example
//! ```
//! use netbits::{shift_left, increase, format_bits, BitString};
//!
//! let mut mask: [u8; 4] = [0xFF; 4];
//! shift_left(&mut mask, 4, 32 - 24).unwrap();
//! assert_eq!(mask, [0xFF, 0xFF, 0xFF, 0x00]);
//!
//! let mut addr: [u8; 4] = [192, 168, 0, 255];
//! let wrapped = increase(&mut addr, 4).unwrap();
//! assert!(!wrapped);
//! assert_eq!(addr, [192, 168, 1, 0]);
//!
//! let mut text = [0u8; 33];
//! assert_eq!(format_bits(&mask, 4, &mut text).unwrap(), 32);
//! assert_eq!(&text[..32], b"11111111111111111111111100000000");
//! assert_eq!(BitString(&mask[..]).to_string(),
//!            "11111111111111111111111100000000");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod buffer;
pub mod error;
pub mod format;
pub mod shift;
pub mod step;
pub mod word;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod line;
#[cfg(feature = "std")]
pub mod log;

pub use buffer::BitBuffer;
pub use error::Error;
pub use format::{format_bits, parse_bits, BitString};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use format::write_bits;
pub use shift::{shift_left, shift_right};
pub use step::{decrease, increase, is_max, is_zero};
pub use word::Word;

#[cfg(feature = "std")]
pub use config::{ConfigError, Field, LoadReport, OptionSpec, SkipReason, Skipped};
#[cfg(feature = "std")]
pub use line::{Line, LineReader};
#[cfg(feature = "std")]
pub use log::{Level, Log};
