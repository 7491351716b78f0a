//! Stateful operation processor.
//!
//! Applies a stream of operations to a set of banks and unaffiliated accounts.
//! Accounts are addressed by owner; when several accounts share an owner the
//! first one in lookup order wins (banks in creation order, then unaffiliated).

use tracing::{debug, info, warn};

use crate::{
    domain::{Account, Credit, Debit, Open, Operation, Transfer},
    ledger::errors::LedgerError,
    registry::{Bank, BankRegistry},
};
pub use types::{AccountLocation, UnaffiliatedAccounts};

pub mod errors;
mod types;

#[derive(Debug, Default)]
pub struct Ledger {
    registry: BankRegistry,
    unaffiliated: UnaffiliatedAccounts,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            registry: BankRegistry::new(),
            unaffiliated: UnaffiliatedAccounts::new(),
        }
    }
    pub fn registry(&self) -> &BankRegistry {
        &self.registry
    }
    pub fn unaffiliated(&self) -> &[Account] {
        self.unaffiliated.as_slice()
    }

    /// Every account with its bank, in lookup order.
    pub fn accounts(&self) -> impl Iterator<Item = (Option<&Bank>, &Account)> {
        self.registry
            .banks()
            .flat_map(|bank| bank.accounts().iter().map(move |account| (Some(bank), account)))
            .chain(self.unaffiliated().iter().map(|account| (None, account)))
    }

    /// Finds the first account owned by `owner`.
    pub fn locate(&self, owner: &str) -> Result<AccountLocation, LedgerError> {
        for bank in self.registry.banks() {
            if let Some(position) = bank
                .accounts()
                .iter()
                .position(|account| account.owner() == owner)
            {
                return Ok(AccountLocation::Registered {
                    bank: bank.id(),
                    position,
                });
            }
        }
        self.unaffiliated
            .position_of(owner)
            .map(AccountLocation::Unaffiliated)
            .ok_or_else(|| LedgerError::AccountNotFound(owner.to_owned()))
    }

    fn account_mut(&mut self, location: AccountLocation) -> Option<&mut Account> {
        match location {
            AccountLocation::Registered { bank, position } => self
                .registry
                .bank_mut(bank)?
                .accounts_mut()
                .get_mut(position),
            AccountLocation::Unaffiliated(position) => self.unaffiliated.get_mut(position),
        }
    }

    fn resolve_mut(&mut self, owner: &str) -> Result<&mut Account, LedgerError> {
        let location = self.locate(owner)?;
        self.account_mut(location)
            .ok_or_else(|| LedgerError::AccountNotFound(owner.to_owned()))
    }

    fn bank_named(&mut self, name: &str) -> &mut Bank {
        if self.registry.find_by_name(name).is_none() {
            info!("Creating bank {name}");
        }
        self.registry.get_or_create_bank_mut(name)
    }

    fn process_operation(&mut self, operation: Operation) -> Result<(), LedgerError> {
        match operation {
            Operation::Open(open) => self.process_open_operation(open),
            Operation::Debit(debit) => self.process_debit_operation(debit)?,
            Operation::Credit(credit) => self.process_credit_operation(credit)?,
            Operation::Transfer(transfer) => self.process_transfer_operation(transfer)?,
        }

        Ok(())
    }

    fn process_open_operation(&mut self, operation: Open) {
        let account = Account::new(operation.owner(), operation.balance());
        match operation.bank() {
            Some(name) => self.bank_named(name).add_account(account),
            None => self.unaffiliated.push(account),
        }
        debug!(
            "Opened account for {} with balance {}",
            operation.owner(),
            operation.balance()
        );
    }

    fn process_debit_operation(&mut self, operation: Debit) -> Result<(), LedgerError> {
        let account = self.resolve_mut(operation.owner())?;
        account.debit(operation.amount())?;
        debug!("Debited {} from {}", operation.amount(), operation.owner());
        Ok(())
    }

    fn process_credit_operation(&mut self, operation: Credit) -> Result<(), LedgerError> {
        let account = self.resolve_mut(operation.owner())?;
        account.credit(operation.amount());
        debug!("Credited {} to {}", operation.amount(), operation.owner());
        Ok(())
    }

    /// Resolves both ends first so an unknown destination never leaves the
    /// source debited.
    fn process_transfer_operation(&mut self, operation: Transfer) -> Result<(), LedgerError> {
        let source = self.locate(operation.source())?;
        let destination = self.locate(operation.destination())?;

        self.account_mut(source)
            .ok_or_else(|| LedgerError::AccountNotFound(operation.source().to_owned()))?
            .debit(operation.amount())?;
        self.account_mut(destination)
            .ok_or_else(|| LedgerError::AccountNotFound(operation.destination().to_owned()))?
            .credit(operation.amount());

        debug!(
            "Transferred {} from {} to {}",
            operation.amount(),
            operation.source(),
            operation.destination()
        );
        Ok(())
    }

    pub fn process_operations(&mut self, operations: impl Iterator<Item = Operation>) {
        for operation in operations {
            if let Err(e) = self.process_operation(operation) {
                warn!("Error processing operation: {e}");
            }
        }
    }
}
