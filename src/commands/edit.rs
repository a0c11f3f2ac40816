// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::ledger::session::{EditSession, FieldChange};
use crate::models::{PaymentMethod, PaymentRecord, PaymentStatus};
use crate::utils::{
    maybe_print_json, optional_text, parse_amount, parse_date, parse_optional_date, pretty_table,
};
use anyhow::{Context, Result, anyhow};

pub fn handle(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("--id is required")?.trim();
    let changes = changes_from(sub)?;
    let saved = apply_edit(ctx, id, changes)?;
    if !maybe_print_json(sub.get_flag("json"), false, &saved)? {
        println!(
            "{}",
            pretty_table(
                &["Field", "Value"],
                crate::commands::show::detail_rows(&saved, &ctx.settings)
            )
        );
    }
    Ok(())
}

fn text(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).map(|s| s.trim().to_string())
}

/// Field changes in form order. Status goes last so a reference or payment
/// date typed alongside it is kept rather than synthesized.
pub fn changes_from(sub: &clap::ArgMatches) -> Result<Vec<FieldChange>> {
    let mut changes = Vec::new();
    if let Some(v) = text(sub, "reservation") {
        changes.push(FieldChange::ReservationId(v));
    }
    if let Some(v) = text(sub, "unit") {
        changes.push(FieldChange::UnitName(v));
    }
    if let Some(v) = text(sub, "property") {
        changes.push(FieldChange::PropertyName(v));
    }
    if let Some(v) = text(sub, "client-name") {
        changes.push(FieldChange::ClientName(v));
    }
    if let Some(v) = text(sub, "client-email") {
        changes.push(FieldChange::ClientEmail(v));
    }
    if let Some(v) = text(sub, "client-phone") {
        changes.push(FieldChange::ClientPhone(v));
    }
    if let Some(v) = text(sub, "amount") {
        changes.push(FieldChange::Amount(parse_amount(&v)?));
    }
    if let Some(v) = text(sub, "method") {
        changes.push(FieldChange::Method(
            v.parse::<PaymentMethod>().map_err(|e| anyhow!(e))?,
        ));
    }
    if let Some(v) = text(sub, "reservation-date") {
        changes.push(FieldChange::ReservationDate(parse_date(&v)?));
    }
    if let Some(v) = text(sub, "payment-date") {
        changes.push(FieldChange::PaymentDate(parse_optional_date(&v)?));
    }
    if let Some(v) = text(sub, "reference") {
        changes.push(FieldChange::Reference(optional_text(&v)));
    }
    if let Some(v) = text(sub, "note") {
        changes.push(FieldChange::Note(optional_text(&v)));
    }
    if let Some(v) = text(sub, "status") {
        changes.push(FieldChange::Status(
            v.parse::<PaymentStatus>().map_err(|e| anyhow!(e))?,
        ));
    }
    Ok(changes)
}

/// Opens an edit session on `id`, applies the changes and saves.
pub fn apply_edit(
    ctx: &mut AppContext,
    id: &str,
    changes: Vec<FieldChange>,
) -> Result<PaymentRecord> {
    let current = ctx
        .ledger
        .get(id)
        .ok_or_else(|| anyhow!("Payment '{}' not found", id))?;
    let previous = current.clone();
    let mut session = EditSession::open(current);
    for change in changes {
        session.apply(change, &ctx.ledger)?;
    }
    if !session.is_dirty() {
        tracing::info!(id, "edit saved without changes");
    }
    let saved = session
        .save(&mut ctx.ledger)
        .with_context(|| format!("Cannot save payment '{}'", id))?;
    match ctx.store.persist_update(&saved) {
        Ok(persisted) => ctx.report_persist(id, persisted),
        Err(err) => {
            ctx.restore(previous)?;
            return Err(err.context(format!("Cannot save payment '{}'", id)));
        }
    }
    Ok(saved)
}
