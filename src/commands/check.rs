// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::ledger::transition::{is_valid_payment_id, is_valid_reference};
use crate::models::PaymentRecord;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub fn handle(ctx: &AppContext) -> Result<()> {
    let issues = find_issues(ctx.ledger.list());
    if issues.is_empty() {
        println!("check: no issues found in {} payments", ctx.ledger.len());
    } else {
        let rows = issues
            .into_iter()
            .map(|(id, kind)| vec![id, kind.to_string()])
            .collect();
        println!("{}", pretty_table(&["Payment", "Issue"], rows));
    }
    Ok(())
}

/// `(payment id, issue)` pairs in collection order.
pub fn find_issues(records: &[PaymentRecord]) -> Vec<(String, &'static str)> {
    let mut out = Vec::new();
    let mut refs: HashMap<&str, usize> = HashMap::new();
    for r in records {
        if let Some(reference) = r.reference.as_deref() {
            *refs.entry(reference).or_default() += 1;
        }
    }

    for r in records {
        let mut push = |kind| out.push((r.id.clone(), kind));
        if !is_valid_payment_id(&r.id) {
            push("malformed_id");
        }
        if r.amount <= Decimal::ZERO {
            push("non_positive_amount");
        }
        if r.is_paid() {
            if r.payment_date.is_none() {
                push("paid_without_date");
            }
            if !r.has_reference() {
                push("paid_without_reference");
            }
        } else {
            if r.payment_date.is_some() {
                push("pending_with_date");
            }
            if r.has_reference() {
                push("pending_with_reference");
            }
        }
        if let Some(reference) = r.reference.as_deref().filter(|s| !s.trim().is_empty()) {
            if !is_valid_reference(reference) {
                push("malformed_reference");
            }
            if refs.get(reference).copied().unwrap_or(0) > 1 {
                push("duplicate_reference");
            }
        }
    }
    out
}
