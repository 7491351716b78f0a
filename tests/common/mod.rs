use bank_ledger::{
    domain::{Account, Operation},
    ledger::Ledger,
};
use rust_decimal::{Decimal, dec};

#[allow(dead_code)]
pub fn run(operations: Vec<Operation>) -> Ledger {
    let mut ledger = Ledger::new();
    ledger.process_operations(operations.into_iter());
    ledger
}

/// The account every scenario starts from.
#[allow(dead_code)]
pub fn angel() -> Account {
    Account::new("Angel", dec!(10000.12345))
}

/// Flattens a ledger into `(bank name, owner, balance)` rows in lookup order.
#[allow(dead_code)]
pub fn snapshot(ledger: &Ledger) -> Vec<(Option<String>, String, Decimal)> {
    ledger
        .accounts()
        .map(|(bank, account)| {
            (
                bank.map(|bank| bank.name().to_owned()),
                account.owner().to_owned(),
                account.balance(),
            )
        })
        .collect()
}
