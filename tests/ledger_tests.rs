// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local, NaiveDate};
use condopay::error::LedgerError;
use condopay::ledger::transition::{ReferenceSource, format_reference, is_valid_reference};
use condopay::ledger::{Ledger, MarkPaid};
use condopay::models::{PaymentRecord, PaymentStatus};
use condopay::store::fixture::seed_payments;
use regex::Regex;
use rust_decimal::Decimal;
use std::cell::Cell;

fn seeded() -> Ledger {
    Ledger::from_records(seed_payments().unwrap()).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixed(&'static str);

impl ReferenceSource for Fixed {
    fn next_reference(&self, _year: i32) -> String {
        self.0.to_string()
    }
}

struct Counting(Cell<u32>);

impl ReferenceSource for Counting {
    fn next_reference(&self, year: i32) -> String {
        let n = self.0.get();
        self.0.set(n + 1);
        format_reference(year, n)
    }
}

#[test]
fn seed_matches_dashboard_counts() {
    let ledger = seeded();
    let stats = ledger.stats();
    assert_eq!(ledger.len(), 6);
    assert_eq!(stats.pending_count, 2);
    assert_eq!(stats.paid_count, 4);
    assert_eq!(stats.total_pending, Decimal::from(46_000));
    assert_eq!(stats.total_paid, Decimal::from(133_500));
    assert_eq!(stats.total_all, Decimal::from(179_500));
    assert_eq!(stats.total_paid + stats.total_pending, stats.total_all);
}

#[test]
fn list_preserves_insertion_order() {
    let ledger = seeded();
    let ids: Vec<&str> = ledger.list().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        ["PAG-001", "PAG-002", "PAG-003", "PAG-004", "PAG-005", "PAG-006"]
    );
}

#[test]
fn mark_paid_moves_amount_and_stamps_record() {
    let mut ledger = seeded();
    let today = day(2025, 3, 14);
    let before = ledger.get("PAG-002").unwrap().clone();

    let outcome = ledger.mark_paid_on("PAG-002", today).unwrap();
    assert!(outcome.changed());
    let after = outcome.record().clone();

    assert_eq!(after.status, PaymentStatus::Paid);
    assert_eq!(after.payment_date, Some(today));
    let reference = after.reference.clone().unwrap();
    assert!(Regex::new(r"^TXN-\d{4}-\d{6}$").unwrap().is_match(&reference));
    assert!(reference.starts_with("TXN-2025-"));

    // nothing else moves
    let mut expected = before.clone();
    expected.status = PaymentStatus::Paid;
    expected.payment_date = Some(today);
    expected.reference = Some(reference);
    assert_eq!(after, expected);
    assert_eq!(ledger.get("PAG-002"), Some(&after));

    let stats = ledger.stats();
    assert_eq!(stats.pending_count, 1);
    assert_eq!(stats.total_pending, Decimal::from(22_000));
    assert_eq!(stats.total_paid, Decimal::from(133_500 + 24_000));
    assert_eq!(stats.total_all, Decimal::from(179_500));
}

#[test]
fn mark_paid_uses_local_today() {
    let mut ledger = seeded();
    let outcome = ledger.mark_paid("PAG-004").unwrap();
    let today = Local::now().date_naive();
    let r = outcome.record();
    assert_eq!(r.payment_date, Some(today));
    assert!(
        r.reference
            .as_deref()
            .unwrap()
            .starts_with(&format!("TXN-{}-", today.year()))
    );
}

#[test]
fn mark_paid_twice_is_a_no_op() {
    let mut ledger = seeded();
    let first = ledger.mark_paid_on("PAG-002", day(2025, 3, 14)).unwrap();
    let snapshot = ledger.list().to_vec();

    let second = ledger.mark_paid_on("PAG-002", day(2025, 3, 20)).unwrap();
    assert!(!second.changed());
    assert_eq!(second, MarkPaid::AlreadyPaid(first.record().clone()));
    assert_eq!(ledger.list(), snapshot.as_slice());
}

#[test]
fn mark_paid_on_seeded_paid_record_changes_nothing() {
    let mut ledger = seeded();
    let snapshot = ledger.list().to_vec();
    let outcome = ledger.mark_paid("PAG-001").unwrap();
    assert!(matches!(outcome, MarkPaid::AlreadyPaid(_)));
    assert_eq!(ledger.list(), snapshot.as_slice());
}

#[test]
fn mark_paid_unknown_id_leaves_collection_untouched() {
    let mut ledger = seeded();
    let snapshot = ledger.list().to_vec();
    let err = ledger.mark_paid("PAG-999").unwrap_err();
    assert_eq!(err, LedgerError::not_found("PAG-999"));
    assert!(err.is_not_found());
    assert_eq!(ledger.list(), snapshot.as_slice());
}

#[test]
fn update_replaces_record_verbatim() {
    let mut ledger = seeded();
    let mut edited = ledger.get("PAG-004").unwrap().clone();
    edited.amount = Decimal::from(23_500);
    edited.note = None;
    edited.client_phone = "+54 11 4444-0000".into();

    ledger.update(edited.clone()).unwrap();
    assert_eq!(ledger.get("PAG-004"), Some(&edited));
    assert_eq!(ledger.list()[3], edited);
    assert_eq!(ledger.stats().total_pending, Decimal::from(24_000 + 23_500));
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut ledger = seeded();
    let snapshot = ledger.list().to_vec();
    let mut ghost = ledger.get("PAG-002").unwrap().clone();
    ghost.id = "PAG-777".into();
    assert_eq!(
        ledger.update(ghost).unwrap_err(),
        LedgerError::not_found("PAG-777")
    );
    assert_eq!(ledger.list(), snapshot.as_slice());
}

#[test]
fn update_rejects_paid_without_stamp() {
    let mut ledger = seeded();
    let snapshot = ledger.list().to_vec();

    let mut no_ref: PaymentRecord = ledger.get("PAG-002").unwrap().clone();
    no_ref.status = PaymentStatus::Paid;
    no_ref.payment_date = Some(day(2025, 1, 1));
    let err = ledger.update(no_ref).unwrap_err();
    assert!(matches!(err, LedgerError::Inconsistent { .. }));

    let mut no_date = ledger.get("PAG-001").unwrap().clone();
    no_date.payment_date = None;
    assert!(matches!(
        ledger.update(no_date).unwrap_err(),
        LedgerError::Inconsistent { .. }
    ));

    let mut zero = ledger.get("PAG-003").unwrap().clone();
    zero.amount = Decimal::ZERO;
    assert!(ledger.update(zero).is_err());

    assert_eq!(ledger.list(), snapshot.as_slice());
}

#[test]
fn update_rejects_reference_held_by_another_payment() {
    let mut ledger = seeded();
    let snapshot = ledger.list().to_vec();

    let mut taken = ledger.get("PAG-002").unwrap().clone();
    taken.status = PaymentStatus::Paid;
    taken.payment_date = Some(day(2025, 1, 1));
    taken.reference = Some(" TXN-2024-173605 ".into());
    assert_eq!(
        ledger.update(taken).unwrap_err(),
        LedgerError::DuplicateReference {
            id: "PAG-002".into(),
            reference: " TXN-2024-173605 ".into(),
            holder: "PAG-003".into(),
        }
    );
    assert_eq!(ledger.list(), snapshot.as_slice());

    // a record keeping its own reference is not a collision
    let mut own = ledger.get("PAG-003").unwrap().clone();
    own.note = Some("Receipt sent".into());
    ledger.update(own.clone()).unwrap();
    assert_eq!(ledger.get("PAG-003"), Some(&own));
}

#[test]
fn restore_puts_back_the_previous_record() {
    let mut ledger = seeded();
    let before = ledger.get("PAG-004").unwrap().clone();
    ledger.mark_paid_on("PAG-004", day(2025, 3, 1)).unwrap();
    assert_eq!(ledger.stats().pending_count, 1);

    ledger.restore(before).unwrap();
    assert_eq!(ledger.list(), seed_payments().unwrap().as_slice());

    let mut ghost = ledger.get("PAG-004").unwrap().clone();
    ghost.id = "PAG-404".into();
    assert!(ledger.restore(ghost).unwrap_err().is_not_found());
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let mut records = seed_payments().unwrap();
    let mut dup = records[0].clone();
    dup.client_name = "Someone Else".into();
    records.push(dup);
    assert_eq!(
        Ledger::from_records(records).unwrap_err(),
        LedgerError::DuplicateId {
            id: "PAG-001".into()
        }
    );
}

#[test]
fn colliding_reference_is_regenerated() {
    let mut records = seed_payments().unwrap();
    // seed PAG-001 already holds TXN-2025-000000 after this
    records[0].reference = Some(format_reference(2025, 0));
    let mut ledger =
        Ledger::with_references(records, Box::new(Counting(Cell::new(0)))).unwrap();

    let outcome = ledger.mark_paid_on("PAG-002", day(2025, 6, 1)).unwrap();
    assert_eq!(
        outcome.record().reference.as_deref(),
        Some("TXN-2025-000001")
    );
    assert!(is_valid_reference("TXN-2025-000001"));
}

#[test]
fn exhausted_reference_source_fails_without_mutation() {
    let records = seed_payments().unwrap();
    let mut ledger =
        Ledger::with_references(records, Box::new(Fixed("TXN-2024-482913"))).unwrap();
    let snapshot = ledger.list().to_vec();

    let err = ledger.mark_paid_on("PAG-002", day(2024, 6, 1)).unwrap_err();
    assert!(matches!(err, LedgerError::ReferenceExhausted { .. }));
    assert_eq!(ledger.list(), snapshot.as_slice());
}
