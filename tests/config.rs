// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate netbits;

use std::io::{Cursor, Write};

use netbits::config::{self, MAX_LINE_LEN};
use netbits::{shift_left, ConfigError, Level, Log, OptionSpec, SkipReason, Skipped};

#[derive(Debug, Default, PartialEq)]
struct Options {
    family: String,
    prefix: i64,
    count: i64,
}

fn family(o: &mut Options) -> &mut String {&mut o.family}
fn prefix(o: &mut Options) -> &mut i64 {&mut o.prefix}
fn count(o: &mut Options) -> &mut i64 {&mut o.count}

static OPTIONS: &[OptionSpec<Options>] = &[
    OptionSpec::string("family", family),
    OptionSpec::int("prefix", prefix),
    OptionSpec::int("count", count),
];

#[test]
fn test_load_options() {
    let file = "\
# subnet walk
family = ipv6
prefix=64

  count   =   -3
";
    let mut options = Options::default();
    let report = config::load(Cursor::new(file), OPTIONS, &mut options,
                              &mut Log::silent()).unwrap();
    assert_eq!(options, Options {family: "ipv6".to_owned(), prefix: 64, count: -3});
    assert_eq!(report.applied, 3);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_skipped_lines() {
    let file = "\
prefix = 24
mask = 255.255.255.0
prefix = twenty
just some words
Family = ipv4
prefix = 20
";
    let mut options = Options::default();
    let mut output = Vec::new();
    let report = {
        let mut log = Log::new(Level::Warn, &mut output);
        config::load(Cursor::new(file), OPTIONS, &mut options, &mut log).unwrap()
    };

    /*later assignments win and bad ones leave the field alone*/
    assert_eq!(options.prefix, 20);
    assert_eq!(options.family, "");
    assert_eq!(report.applied, 2);
    assert_eq!(report.skipped, vec![
        Skipped {line: 2, reason: SkipReason::UnknownKey("mask".to_owned())},
        Skipped {line: 3, reason: SkipReason::BadInteger {
            key: "prefix".to_owned(),
            value: "twenty".to_owned(),
        }},
        Skipped {line: 4, reason: SkipReason::MissingSeparator},
        Skipped {line: 5, reason: SkipReason::UnknownKey("Family".to_owned())},
    ]);

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.lines().count(), 4);
    assert!(output.lines().all(|l| l.starts_with("warning: line ")));
    assert!(output.contains("line 2: unknown option \"mask\", skipped"));
}

#[test]
fn test_truncated_line_skipped() {
    let mut file = format!("family = {}\n", "x".repeat(MAX_LINE_LEN));
    file.push_str("prefix = 8\n");

    let mut options = Options::default();
    let report = config::load(Cursor::new(file), OPTIONS, &mut options,
                              &mut Log::silent()).unwrap();
    assert_eq!(options.family, "");
    assert_eq!(options.prefix, 8);
    assert_eq!(report.skipped, vec![Skipped {line: 1, reason: SkipReason::Truncated}]);
}

#[test]
fn test_undecodable_lines_skipped() {
    /*a Latin-1 comment and value sit between valid options*/
    let file: &[u8] = b"# r\xE9seau\nprefix = 24\nfamily = ipv\xE94\nfamily = ipv4\n";
    let mut options = Options::default();
    let mut output = Vec::new();
    let report = {
        let mut log = Log::new(Level::Warn, &mut output);
        config::load(Cursor::new(file), OPTIONS, &mut options, &mut log).unwrap()
    };
    assert_eq!(options.prefix, 24);
    assert_eq!(options.family, "ipv4");
    assert_eq!(report.applied, 2);
    assert_eq!(report.skipped, vec![
        Skipped {line: 1, reason: SkipReason::InvalidEncoding},
        Skipped {line: 3, reason: SkipReason::InvalidEncoding},
    ]);
    assert_eq!(String::from_utf8(output).unwrap(),
               "warning: line 1: line is not valid UTF-8, skipped\n\
                warning: line 3: line is not valid UTF-8, skipped\n");
}

#[test]
fn test_debug_logging() {
    let mut output = Vec::new();
    {
        let mut log = Log::new(Level::Debug, &mut output);
        let mut options = Options::default();
        config::load(Cursor::new("prefix = 16\n"), OPTIONS, &mut options, &mut log).unwrap();
    }
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "debug: line 1: prefix = 16\ninfo: 1 options applied, 0 lines skipped\n");
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "family = ipv4").unwrap();
    writeln!(file, "prefix = 26").unwrap();
    file.flush().unwrap();

    let mut options = Options::default();
    let report = config::load_file(file.path(), OPTIONS, &mut options,
                                   &mut Log::silent()).unwrap();
    assert_eq!(report.applied, 2);

    /*the loaded prefix drives a mask*/
    let mut mask: [u8; 4] = [0xFF; 4];
    shift_left(&mut mask, 4, 32 - options.prefix).unwrap();
    assert_eq!(mask, [0xFF, 0xFF, 0xFF, 0xC0]);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");

    let mut options = Options::default();
    match config::load_file(&path, OPTIONS, &mut options, &mut Log::silent()) {
        Err(ConfigError::File {path: reported, source}) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(options, Options::default());
}
