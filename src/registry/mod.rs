//! Banks and the registry that owns them.
//!
//! A bank owns its accounts outright. Each registered account records the
//! [`BankId`] of its bank, which the [`BankRegistry`] resolves back to the bank.

use rust_decimal::Decimal;

use crate::{
    domain::{Account, BankId, DomainError},
    registry::errors::BankError,
};

pub mod errors;

#[derive(Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(id: BankId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            accounts: Vec::new(),
        }
    }
    pub fn id(&self) -> BankId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }
    /// Replaces the account list as-is. Back-references are left alone.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Appends the account and points its back-reference at this bank.
    /// Duplicates are allowed.
    pub fn add_account(&mut self, mut account: Account) {
        account.set_bank(self.id);
        self.accounts.push(account);
    }

    /// First account with the given owner, in registration order.
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Debits `source` then credits `destination`. Neither account has to be
    /// registered with this bank.
    ///
    /// A failed debit returns before the credit runs, so no money moves.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        source.debit(amount)?;
        destination.credit(amount);
        Ok(())
    }

    /// Same as [`Bank::transfer`] for two of this bank's own accounts, addressed
    /// by registration position.
    pub fn transfer_between(
        &mut self,
        source: usize,
        destination: usize,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let count = self.accounts.len();
        for position in [source, destination] {
            if position >= count {
                return Err(BankError::AccountNotFound(position));
            }
        }

        self.accounts[source].debit(amount)?;
        self.accounts[destination].credit(amount);

        Ok(())
    }
}

/// Owns every bank and hands out sequential [`BankId`]s.
#[derive(Debug, Default)]
pub struct BankRegistry(Vec<Bank>);

impl BankRegistry {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn create_bank(&mut self, name: impl Into<String>) -> BankId {
        let id = BankId::from(self.0.len());
        self.0.push(Bank::new(id, name));
        id
    }
    pub fn bank(&self, id: BankId) -> Option<&Bank> {
        self.0.get(usize::from(id))
    }
    pub fn bank_mut(&mut self, id: BankId) -> Option<&mut Bank> {
        self.0.get_mut(usize::from(id))
    }
    /// Resolves an account's back-reference.
    pub fn bank_of(&self, account: &Account) -> Option<&Bank> {
        account.bank().and_then(|id| self.bank(id))
    }
    /// First bank with the given name, created on first mention.
    pub fn get_or_create_bank_mut(&mut self, name: &str) -> &mut Bank {
        let existing = self.0.iter().position(|bank| bank.name() == name);
        let position = match existing {
            Some(position) => position,
            None => usize::from(self.create_bank(name)),
        };
        &mut self.0[position]
    }
    pub fn find_by_name(&self, name: &str) -> Option<BankId> {
        self.0.iter().find(|bank| bank.name() == name).map(Bank::id)
    }
    /// Banks in creation order.
    pub fn banks(&self) -> impl Iterator<Item = &Bank> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
