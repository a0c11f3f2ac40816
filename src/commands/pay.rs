// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::ledger::MarkPaid;
use crate::utils::{format_amount, maybe_print_json};
use anyhow::{Context, Result};

pub fn handle(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("--id is required")?.trim();
    let outcome = mark_paid(ctx, id)?;
    if maybe_print_json(sub.get_flag("json"), false, outcome.record())? {
        return Ok(());
    }
    let r = outcome.record();
    match &outcome {
        MarkPaid::Transitioned(_) => println!(
            "Marked {} as paid: {} from {} (ref {})",
            r.id,
            format_amount(&r.amount, &ctx.settings),
            r.client_name,
            r.reference.as_deref().unwrap_or_default()
        ),
        MarkPaid::AlreadyPaid(_) => println!("{} is already paid, nothing to do", r.id),
    }
    Ok(())
}

/// Quick transition, then hands the new record to the store. If the store
/// call fails the ledger is put back to the record it held before.
pub fn mark_paid(ctx: &mut AppContext, id: &str) -> Result<MarkPaid> {
    let previous = ctx.ledger.get(id).cloned();
    let outcome = ctx
        .ledger
        .mark_paid(id)
        .with_context(|| format!("Cannot mark '{}' as paid", id))?;
    if let MarkPaid::Transitioned(record) = &outcome {
        match ctx.store.persist_mark_paid(record) {
            Ok(persisted) => ctx.report_persist(id, persisted),
            Err(err) => {
                if let Some(previous) = previous {
                    ctx.restore(previous)?;
                }
                return Err(err.context(format!("Cannot mark '{}' as paid", id)));
            }
        }
    }
    Ok(outcome)
}
