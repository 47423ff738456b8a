// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Result};
use clap::Parser;
use swapwise::Operation;
use tracing::info;

mod cli;
use cli::cases::{demo_cases, run_case, CaseOutcome};
use cli::{display, logging, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = match &cli.command {
        Commands::Demo { op } => demo_cases(op.map(Operation::from)),
        Commands::Reverse { values } => vec![(Operation::Reverse, values.clone())],
        Commands::PushZeros { values } => vec![(Operation::PushZeros, values.clone())],
    };
    info!(cases = inputs.len(), verify = cli.verify, "running");

    let outcomes: Vec<CaseOutcome> = inputs
        .into_iter()
        .map(|(operation, values)| run_case(operation, values, cli.verify))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        let stdout = std::io::stdout();
        display::print_cases(&mut stdout.lock(), &outcomes)?;
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        bail!("{} of {} case(s) failed verification", failed, outcomes.len());
    }
    Ok(())
}
