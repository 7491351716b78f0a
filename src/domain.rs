//! Core domain types: accounts, bank handles, and batch operations.

use derive_more::{Display, From, Into, TryInto};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Handle to a bank held by a [`BankRegistry`](crate::registry::BankRegistry).
///
/// Accounts keep one of these instead of a reference so the bank stays the sole
/// owner of its account list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display,
)]
pub struct BankId(usize);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// A single account. Equality only looks at owner and balance, where balances
/// must agree in both value and scale (`10.0 != 10.00`).
#[derive(Debug, Clone)]
pub struct Account {
    owner: String,
    balance: Decimal,
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }
    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }
    pub fn balance(&self) -> Decimal {
        self.balance
    }
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
    /// The bank this account was registered with, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }
    pub(crate) fn set_bank(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Withdraws `amount`. Fails without touching the balance if the result would
    /// be negative. The sign of `amount` is not checked, and a negative amount
    /// clamps at `Decimal::MAX` instead of overflowing.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let new_balance = self.balance.saturating_sub(amount);
        if new_balance < Decimal::ZERO {
            return Err(DomainError::InsufficientFunds);
        }
        self.balance = new_balance;
        Ok(())
    }

    /// Deposits `amount`. Never fails; the balance clamps at `Decimal::MAX`
    /// (or `Decimal::MIN` for negative amounts) instead of overflowing.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance = self.balance.saturating_add(amount);
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.balance == other.balance
            && self.balance.scale() == other.balance.scale()
    }
}

impl Eq for Account {}

/// Sum type over all operations a [`Ledger`](crate::ledger::Ledger) can apply.
#[derive(Debug, From, TryInto, PartialEq)]
pub enum Operation {
    Open(Open),
    Debit(Debit),
    Credit(Credit),
    Transfer(Transfer),
}

/// Opens an account, optionally registering it with a bank by name.
#[derive(Debug, PartialEq)]
pub struct Open {
    owner: String,
    balance: Decimal,
    bank: Option<String>,
}

// Debit and credit both move an amount on a single account.
#[derive(Debug, PartialEq)]
pub struct Debit(Movement);
#[derive(Debug, PartialEq)]
pub struct Credit(Movement);

#[derive(Debug, PartialEq)]
pub struct Transfer {
    source: String,
    destination: String,
    amount: Decimal,
}

impl Open {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }
    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }
    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn balance(&self) -> Decimal {
        self.balance
    }
    pub fn bank(&self) -> Option<&str> {
        self.bank.as_deref()
    }
}

impl Debit {
    pub fn new(owner: impl Into<String>, amount: Decimal) -> Self {
        Self(Movement::new(owner, amount))
    }
    pub fn owner(&self) -> &str {
        &self.0.owner
    }
    pub fn amount(&self) -> Decimal {
        self.0.amount
    }
}

impl Credit {
    pub fn new(owner: impl Into<String>, amount: Decimal) -> Self {
        Self(Movement::new(owner, amount))
    }
    pub fn owner(&self) -> &str {
        &self.0.owner
    }
    pub fn amount(&self) -> Decimal {
        self.0.amount
    }
}

impl Transfer {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            amount,
        }
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn destination(&self) -> &str {
        &self.destination
    }
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Inner struct shared by Debit and Credit.
#[derive(Debug, PartialEq)]
struct Movement {
    owner: String,
    amount: Decimal,
}

impl Movement {
    fn new(owner: impl Into<String>, amount: Decimal) -> Self {
        Self {
            owner: owner.into(),
            amount,
        }
    }
}
