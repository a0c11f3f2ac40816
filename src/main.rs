// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use condopay::{cli, commands, config, context::AppContext};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "condopay=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut settings = config::load(config_path.as_deref())?;
    if let Some(fixture) = matches.get_one::<String>("fixture") {
        settings.fixture_path = Some(PathBuf::from(fixture.trim()));
    }
    if let Some(remote) = matches.get_one::<String>("remote") {
        settings.remote_url = Some(remote.trim().to_string());
    }

    let mut ctx = AppContext::open(settings)?;

    match matches.subcommand() {
        Some(("list", sub)) => commands::list::handle(&ctx, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&ctx, sub)?,
        Some(("show", sub)) => commands::show::handle(&ctx, sub)?,
        Some(("pay", sub)) => commands::pay::handle(&mut ctx, sub)?,
        Some(("edit", sub)) => commands::edit::handle(&mut ctx, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ctx, sub)?,
        Some(("check", _)) => commands::check::handle(&ctx)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
