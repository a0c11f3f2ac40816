// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use condopay::config::{self, Settings};
use condopay::error::ConfigError;
use condopay::utils::{format_amount, format_date, parse_amount, parse_optional_date};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

#[test]
fn amounts_use_single_currency_and_grouping() {
    let s = Settings::default();
    assert_eq!(format_amount(&Decimal::from(24_000), &s), "$24.000");
    assert_eq!(format_amount(&Decimal::from(179_500), &s), "$179.500");
    assert_eq!(format_amount(&Decimal::from(950), &s), "$950");
    assert_eq!(
        format_amount(&Decimal::from_str_exact("1250.5").unwrap(), &s),
        "$1.250,50"
    );
    assert_eq!(
        format_amount(&Decimal::from_str_exact("1000000.00").unwrap(), &s),
        "$1.000.000"
    );

    let us = Settings {
        currency_label: "USD ".into(),
        thousands_separator: ',',
        decimal_separator: '.',
        ..Settings::default()
    };
    assert_eq!(
        format_amount(&Decimal::from_str_exact("22000.05").unwrap(), &us),
        "USD 22,000.05"
    );
}

#[test]
fn dates_render_in_configured_style() {
    let d = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    assert_eq!(format_date(&d, &Settings::default()), "03/05/2024");
    let iso = Settings {
        date_format: "%Y-%m-%d".into(),
        ..Settings::default()
    };
    assert_eq!(format_date(&d, &iso), "2024-05-03");
}

#[test]
fn input_parsers() {
    assert!(parse_amount("0").is_err());
    assert!(parse_amount("abc").is_err());
    assert_eq!(parse_amount(" 18000 ").unwrap(), Decimal::from(18_000));
    assert_eq!(parse_optional_date("none").unwrap(), None);
    assert_eq!(parse_optional_date("").unwrap(), None);
    assert_eq!(
        parse_optional_date("2025-01-31").unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31)
    );
    assert!(parse_optional_date("31/01/2025").is_err());
}

#[test]
fn partial_config_keeps_defaults() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"{ "currency_label": "ARS ", "remote_url": "http://localhost:9000" }"#,
    )
    .unwrap();
    let s = config::load(Some(file.path())).unwrap();
    assert_eq!(s.currency_label, "ARS ");
    assert_eq!(s.thousands_separator, '.');
    assert_eq!(s.date_format, "%d/%m/%Y");
    assert_eq!(s.remote_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(s.fixture_path, None);
}

#[test]
fn bad_config_is_reported() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();
    assert!(matches!(
        config::load(Some(file.path())),
        Err(ConfigError::Parse { .. })
    ));

    std::fs::write(file.path(), r#"{ "date_format": "%Q" }"#).unwrap();
    assert!(matches!(
        config::load(Some(file.path())),
        Err(ConfigError::DateFormat(_))
    ));

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        config::load(Some(&missing)),
        Err(ConfigError::Read { .. })
    ));
}
