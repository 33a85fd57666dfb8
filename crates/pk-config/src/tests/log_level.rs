use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_strings_when_parsed_then_matching_filters() {
    for (input, expected) in [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
        ("DEBUG", LevelFilter::Debug),
    ] {
        let level = LogLevel::from_str(input).unwrap();
        assert_that!(level.0, eq(expected));
    }
}

#[test]
fn given_unknown_level_string_when_parsed_then_falls_back_to_info() {
    let level = LogLevel::from_str("verbose").unwrap();

    assert_that!(level.0, eq(LevelFilter::Info));
}
