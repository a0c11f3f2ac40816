// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::config::Settings;

const UA: &str = concat!("condopay/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
}

/// `""` and `none` clear the date.
pub fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_date(s).map(Some)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s.trim()))
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        return Err(anyhow!("Amount must be positive, got {}", d));
    }
    Ok(d)
}

/// Trimmed text, `None` when blank.
pub fn optional_text(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// `$24.000`, `$1.250,50` with the default settings. Cents are shown only when
/// non-zero.
pub fn format_amount(amount: &Decimal, settings: &Settings) -> String {
    let rounded = amount.round_dp(2);
    let abs = rounded.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * Decimal::ONE_HUNDRED).round();

    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&settings.currency_label);
    out.push_str(&group_thousands(&whole.to_string(), settings.thousands_separator));
    if !cents.is_zero() {
        out.push(settings.decimal_separator);
        out.push_str(&format!("{:0>2}", cents.to_string()));
    }
    out
}

pub fn format_date(date: &NaiveDate, settings: &Settings) -> String {
    date.format(&settings.date_format).to_string()
}

pub fn format_optional_date(date: Option<&NaiveDate>, settings: &Settings) -> String {
    date.map(|d| format_date(d, settings)).unwrap_or_default()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("999", '.'), "999");
        assert_eq!(group_thousands("1000", '.'), "1.000");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }

    #[test]
    fn optional_text_trims() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" hi "), Some("hi".to_string()));
    }
}
