// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the mask, network and first addresses of a subnet
//! described by an options file.
//!
//! ```text
//! $ cat subnet.conf
//! address = 2001:db8::1234
//! prefix = 120
//! count = 3
//! verbosity = 2
//! $ cargo run --example mask_walk -- subnet.conf
//! ```

use std::net::IpAddr;
use std::process::ExitCode;

use netbits::{config, increase, shift_left, write_bits, BitString, Level, Log, OptionSpec, Word};

struct Options {
    address: String,
    prefix: i64,
    count: i64,
    verbosity: i64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            address: "192.168.10.77".to_owned(),
            prefix: 24,
            count: 4,
            verbosity: 1,
        }
    }
}

fn address(o: &mut Options) -> &mut String {&mut o.address}
fn prefix(o: &mut Options) -> &mut i64 {&mut o.prefix}
fn count(o: &mut Options) -> &mut i64 {&mut o.count}
fn verbosity(o: &mut Options) -> &mut i64 {&mut o.verbosity}

static OPTIONS: &[OptionSpec<Options>] = &[
    OptionSpec::string("address", address),
    OptionSpec::int("prefix", prefix),
    OptionSpec::int("count", count),
    OptionSpec::int("verbosity", verbosity),
];

fn main() -> ExitCode {
    let mut options = Options::default();

    if let Some(path) = std::env::args_os().nth(1) {
        /*the verbosity for reading the file can only come from its default*/
        let level = Level::from_verbosity(options.verbosity as u8);
        if let Err(err) = config::load_file(&path, OPTIONS, &mut options,
                                            &mut Log::stderr(level)) {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    }

    let level = Level::from_verbosity(options.verbosity.clamp(0, 3) as u8);
    let mut log = Log::stderr(level);

    let result = match options.address.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => walk(addr.octets(), &options, &mut log),
        Ok(IpAddr::V6(addr)) => walk(addr.segments(), &options, &mut log),
        Err(err) => {
            log.error(format_args!("address {:?}: {}", options.address, err));
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log.error(format_args!("{}", err));
            ExitCode::FAILURE
        }
    }
}

fn walk<T: Word, const N: usize>(addr: [T; N],
                                 options: &Options,
                                 log: &mut Log) -> Result<(), Box<dyn std::error::Error>> {
    let width = (N as i64) * i64::from(T::BITS);
    if options.prefix < 0 || options.prefix > width {
        return Err(format!("prefix {} outside 0..={}", options.prefix, width).into());
    }

    let mut mask = [T::MAX; N];
    shift_left(&mut mask, N, width - options.prefix)?;
    log.debug(format_args!("mask {}", BitString(&mask[..])));

    let mut network = addr;
    for (word, mask) in network.iter_mut().zip(&mask) {
        *word = *word & *mask;
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    write_bits(&mask, N, &mut stdout)?;
    write_bits(&network, N, &mut stdout)?;

    let mut current = network;
    for _ in 0..options.count.max(0) {
        if increase(&mut current, N)? {
            log.info(format_args!("address range exhausted"));
            break;
        }
        write_bits(&current, N, &mut stdout)?;
    }
    Ok(())
}
