// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::context::AppContext;
use crate::ledger::session::DetailView;
use crate::models::PaymentRecord;
use crate::utils::{
    format_amount, format_date, format_optional_date, maybe_print_json, pretty_table,
};
use anyhow::{Context, Result};

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("--id is required")?.trim();
    let mut detail = DetailView::default();
    let record = detail.open(&ctx.ledger, id)?;
    if !maybe_print_json(sub.get_flag("json"), false, record)? {
        println!("{}", pretty_table(&["Field", "Value"], detail_rows(record, &ctx.settings)));
    }
    Ok(())
}

pub fn detail_rows(r: &PaymentRecord, settings: &Settings) -> Vec<Vec<String>> {
    vec![
        vec!["Payment".into(), r.id.clone()],
        vec!["Reservation".into(), r.reservation_id.clone()],
        vec!["Unit".into(), r.unit_name.clone()],
        vec!["Property".into(), r.property_name.clone()],
        vec!["Client".into(), r.client_name.clone()],
        vec!["Email".into(), r.client_email.clone()],
        vec!["Phone".into(), r.client_phone.clone()],
        vec!["Amount".into(), format_amount(&r.amount, settings)],
        vec!["Method".into(), r.method.label().to_string()],
        vec!["Status".into(), r.status.to_string()],
        vec!["Booked".into(), format_date(&r.reservation_date, settings)],
        vec!["Paid on".into(), format_optional_date(r.payment_date.as_ref(), settings)],
        vec!["Reference".into(), r.reference.clone().unwrap_or_default()],
        vec!["Note".into(), r.note.clone().unwrap_or_default()],
    ]
}
