//! Serializes final account state to CSV.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{ledger::Ledger, registry::Bank};

/// Maps directly to the output columns: bank, owner, balance.
/// `bank` is left empty for accounts that were never registered.
#[derive(Debug, Serialize)]
struct OutputCsv<'a> {
    bank: Option<&'a str>,
    owner: &'a str,
    balance: Decimal,
}

pub fn print_accounts(ledger: &Ledger, writer: impl std::io::Write) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (bank, account) in ledger.accounts() {
        let output_csv = OutputCsv {
            bank: bank.map(Bank::name),
            owner: account.owner(),
            balance: account.balance(),
        };
        wtr.serialize(output_csv)?;
    }
    wtr.flush()?;
    Ok(())
}
