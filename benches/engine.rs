// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use netbits::{decrease, format_bits, increase, shift_left, shift_right, Word};

fn main() {
    divan::main();
}

const ROUNDS: usize = 10_000;

#[divan::bench]
fn shift_u8_words() {
    shifts::<u8, 16>();
}

#[divan::bench]
fn shift_u16_words() {
    shifts::<u16, 8>();
}

#[divan::bench]
fn shift_u64_words() {
    shifts::<u64, 2>();
}

#[divan::bench]
fn step_u8_words() {
    steps::<u8, 16>();
}

#[divan::bench]
fn step_u16_words() {
    steps::<u16, 8>();
}

#[divan::bench]
fn format_u16_words() {
    let addr: [u16; 8] = [0x2001, 0x0db8, 0, 0, 0, 0, 0x1234, 0x5678];
    let mut text = [0u8; 129];
    for _ in 0..ROUNDS {
        let _ = format_bits(divan::black_box(&addr), 8, &mut text);
    }
}

fn shifts<T: Word, const N: usize>() {
    let mut buf = [T::MAX; N];
    for round in 0..ROUNDS {
        let shift = (round % (N * T::BITS as usize)) as i64;
        let _ = shift_right(divan::black_box(&mut buf), N, shift);
        let _ = shift_left(divan::black_box(&mut buf), N, shift);
        buf = [T::MAX; N];
    }
}

fn steps<T: Word, const N: usize>() {
    /*stepping across all-ones low words forces full carry chains*/
    let mut buf = [T::MAX; N];
    buf[0] = T::ZERO;
    for _ in 0..ROUNDS {
        let _ = increase(divan::black_box(&mut buf), N);
        let _ = decrease(divan::black_box(&mut buf), N);
    }
}
