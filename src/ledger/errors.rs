use crate::domain::DomainError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No account owned by {0}")]
    AccountNotFound(String),
    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
