// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::context::AppContext;
use crate::ledger::stats::LedgerStats;
use crate::utils::{format_amount, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let stats = ctx.ledger.stats();
    if !maybe_print_json(sub.get_flag("json"), false, &stats)? {
        println!("{}", pretty_table(&["Card", "Value"], cards(&stats, &ctx.settings)));
    }
    Ok(())
}

pub fn cards(stats: &LedgerStats, settings: &Settings) -> Vec<Vec<String>> {
    vec![
        vec!["Total billed".into(), format_amount(&stats.total_all, settings)],
        vec!["Collected".into(), format_amount(&stats.total_paid, settings)],
        vec!["Outstanding".into(), format_amount(&stats.total_pending, settings)],
        vec!["Pending payments".into(), stats.pending_count.to_string()],
    ]
}
