use crate::domain::{Account, BankId};

/// Where a located account lives inside a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountLocation {
    /// Registered with a bank, at the given position in its account list.
    Registered { bank: BankId, position: usize },
    /// Not registered with any bank.
    Unaffiliated(usize),
}

/// Accounts opened without a bank, in opening order.
#[derive(Debug, Default)]
pub struct UnaffiliatedAccounts(Vec<Account>);

impl UnaffiliatedAccounts {
    pub fn new() -> Self {
        Self(Vec::new())
    }
    pub fn as_slice(&self) -> &[Account] {
        &self.0
    }
    pub fn push(&mut self, account: Account) {
        self.0.push(account);
    }
    pub fn position_of(&self, owner: &str) -> Option<usize> {
        self.0.iter().position(|account| account.owner() == owner)
    }
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Account> {
        self.0.get_mut(position)
    }
}
