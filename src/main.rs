use std::fs::File;

use anyhow::Context;
use clap::Parser;

use bank_ledger::ledger::Ledger;
use bank_ledger::output;
use bank_ledger::parsing;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        // stdout carries the CSV report
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();
    }

    let file = File::open(&args.input_file)
        .with_context(|| format!("Failed to open {}", args.input_file))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let operations = parsing::deserialize_csv(&mut rdr);

    let mut ledger = Ledger::new();
    ledger.process_operations(operations);

    output::print_accounts(&ledger, std::io::stdout())
}

/// Replays a CSV batch of banking operations and prints every account's balance.
#[derive(Parser)]
#[command(version)]
struct Arguments {
    /// CSV file with columns type, owner, counterparty, amount, bank.
    input_file: String,
    /// Enables logging to stderr at this level (error, warn, info, debug, trace).
    log_level: Option<tracing::Level>,
}
