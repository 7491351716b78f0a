use crate::domain::DomainError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BankError {
    #[error("No account at position {0}")]
    AccountNotFound(usize),
    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
