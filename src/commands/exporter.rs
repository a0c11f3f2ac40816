// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::list::view_filter;
use crate::context::AppContext;
use anyhow::{Context, Result, anyhow};

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("payments", sub)) => export_payments(ctx, sub),
        Some((other, _)) => Err(anyhow!("Unknown export target: {}", other)),
        None => Err(anyhow!("Nothing to export (try `export payments`)")),
    }
}

fn export_payments(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .context("--format is required")?
        .trim()
        .to_lowercase();
    let out = sub.get_one::<String>("out").context("--out is required")?.trim();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }

    let filter = view_filter(sub)?;
    let rows = ctx.ledger.view(&filter);

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
        wtr.write_record([
            "id",
            "reservation_id",
            "unit",
            "property",
            "client",
            "email",
            "phone",
            "amount",
            "method",
            "status",
            "reservation_date",
            "payment_date",
            "reference",
            "note",
        ])?;
        for r in &rows {
            wtr.write_record([
                r.id.clone(),
                r.reservation_id.clone(),
                r.unit_name.clone(),
                r.property_name.clone(),
                r.client_name.clone(),
                r.client_email.clone(),
                r.client_phone.clone(),
                r.amount.to_string(),
                r.method.to_string(),
                r.status.to_string(),
                r.reservation_date.to_string(),
                r.payment_date.map(|d| d.to_string()).unwrap_or_default(),
                r.reference.clone().unwrap_or_default(),
                r.note.clone().unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&rows)?)
            .with_context(|| format!("Write {}", out))?;
    }
    tracing::info!(count = rows.len(), format = %fmt, out, "exported payments");
    println!("Exported {} payments to {}", rows.len(), out);
    Ok(())
}
