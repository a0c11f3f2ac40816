// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("tab")
            .long("tab")
            .default_value("all")
            .help("all | pending | paid"),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Match client, unit or payment id (case-insensitive)"),
    )
    .arg(
        Arg::new("method")
            .long("method")
            .default_value("all")
            .help("all | bank-transfer | physical-card | cash"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .help("Payment id, e.g. PAG-002")
}

pub fn build_cli() -> Command {
    Command::new("condopay")
        .version(crate_version!())
        .about("Reservation payment ledger for rental and condominium management")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Settings file (JSON)"),
        )
        .arg(
            Arg::new("fixture")
                .long("fixture")
                .global(true)
                .help("Load payments from a JSON file instead of the built-in set"),
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .global(true)
                .help("Base URL of a payments API"),
        )
        .subcommand(json_args(filter_args(
            Command::new("list").about("List payments in collection order"),
        )))
        .subcommand(
            Command::new("stats")
                .about("Summary totals over all payments")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("show")
                .about("Show one payment in detail")
                .arg(id_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("pay")
                .about("Mark a pending payment as paid")
                .arg(id_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a payment")
                .arg(id_arg())
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("method").long("method"))
                .arg(Arg::new("status").long("status").help("pending | paid"))
                .arg(
                    Arg::new("payment-date")
                        .long("payment-date")
                        .help("YYYY-MM-DD, or 'none' to clear"),
                )
                .arg(
                    Arg::new("reference")
                        .long("reference")
                        .help("Empty to clear"),
                )
                .arg(Arg::new("note").long("note").help("Empty to clear"))
                .arg(Arg::new("client-name").long("client-name"))
                .arg(Arg::new("client-email").long("client-email"))
                .arg(Arg::new("client-phone").long("client-phone"))
                .arg(Arg::new("unit").long("unit"))
                .arg(Arg::new("property").long("property"))
                .arg(Arg::new("reservation").long("reservation"))
                .arg(Arg::new("reservation-date").long("reservation-date"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("export")
                .about("Export payments")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(filter_args(
                    Command::new("payments")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv | json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )),
        )
        .subcommand(Command::new("check").about("Report records that break ledger conventions"))
}
