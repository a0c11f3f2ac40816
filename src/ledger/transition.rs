// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The pending → paid transition shared by the quick action and the edit form.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::models::{PaymentRecord, PaymentStatus};

pub const REFERENCE_PREFIX: &str = "TXN";

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^TXN-\d{4}-\d{6}$").expect("reference pattern"));
static PAYMENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PAG-\d{3,}$").expect("payment id pattern"));

pub fn is_valid_reference(s: &str) -> bool {
    REFERENCE_RE.is_match(s)
}

pub fn is_valid_payment_id(s: &str) -> bool {
    PAYMENT_ID_RE.is_match(s)
}

/// Supplies candidate reference numbers. Candidates are not required to be
/// unique; the ledger rejects collisions and asks again.
pub trait ReferenceSource {
    fn next_reference(&self, year: i32) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomReferences;

impl ReferenceSource for RandomReferences {
    fn next_reference(&self, year: i32) -> String {
        let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        format_reference(year, n)
    }
}

pub fn format_reference(year: i32, n: u32) -> String {
    format!("{}-{:04}-{:06}", REFERENCE_PREFIX, year, n % 1_000_000)
}

/// Payment date and reference applied together when a record becomes paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidStamp {
    pub payment_date: NaiveDate,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampPolicy {
    /// Quick action: the stamp overwrites whatever the record carried.
    Replace,
    /// Edit form: only missing values are filled in.
    KeepExisting,
}

pub fn transition_to_paid(
    mut record: PaymentRecord,
    stamp: PaidStamp,
    policy: StampPolicy,
) -> PaymentRecord {
    record.status = PaymentStatus::Paid;
    match policy {
        StampPolicy::Replace => {
            record.payment_date = Some(stamp.payment_date);
            record.reference = Some(stamp.reference);
        }
        StampPolicy::KeepExisting => {
            if record.payment_date.is_none() {
                record.payment_date = Some(stamp.payment_date);
            }
            if !record.has_reference() {
                record.reference = Some(stamp.reference);
            }
        }
    }
    record
}
