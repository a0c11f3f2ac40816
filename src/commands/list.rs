// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::context::AppContext;
use crate::ledger::Ledger;
use crate::ledger::filter::{MethodFilter, Tab, ViewFilter};
use crate::models::PaymentRecord;
use crate::utils::{
    format_amount, format_date, format_optional_date, maybe_print_json, pretty_table,
};
use anyhow::{Result, anyhow};

pub const HEADERS: [&str; 9] = [
    "ID", "Client", "Unit", "Property", "Amount", "Method", "Status", "Booked", "Paid on",
];

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(&ctx.ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data.iter().map(|r| record_row(r, &ctx.settings)).collect();
        println!("{}", pretty_table(&HEADERS, rows));
        println!("{} of {} payments", data.len(), ctx.ledger.len());
    }
    Ok(())
}

pub fn view_filter(sub: &clap::ArgMatches) -> Result<ViewFilter> {
    let tab = match sub.get_one::<String>("tab") {
        Some(s) => s.parse::<Tab>().map_err(|e| anyhow!(e))?,
        None => Tab::All,
    };
    let method = match sub.get_one::<String>("method") {
        Some(s) => s.parse::<MethodFilter>().map_err(|e| anyhow!(e))?,
        None => MethodFilter::All,
    };
    let search = sub
        .get_one::<String>("search")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    Ok(ViewFilter::new(tab, search, method))
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<PaymentRecord>> {
    let filter = view_filter(sub)?;
    Ok(ledger.view(&filter).into_iter().cloned().collect())
}

pub fn record_row(r: &PaymentRecord, settings: &Settings) -> Vec<String> {
    vec![
        r.id.clone(),
        r.client_name.clone(),
        r.unit_name.clone(),
        r.property_name.clone(),
        format_amount(&r.amount, settings),
        r.method.label().to_string(),
        r.status.to_string(),
        format_date(&r.reservation_date, settings),
        format_optional_date(r.payment_date.as_ref(), settings),
    ]
}
