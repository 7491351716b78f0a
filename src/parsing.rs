//! CSV deserialization.
//!
//! Parsing happens in two stages:
//! 1. Serde deserializes each CSV row into a flat `CsvOperation`.
//! 2. `TryFrom<CsvOperation>` converts it into the strongly-typed domain `Operation`.
//!
//! Malformed rows or missing required fields are logged and skipped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Credit, Debit, Open, Operation, Transfer};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OperationType {
    Open,
    Debit,
    Credit,
    Transfer,
}

/// Flat representation of a single CSV row. `counterparty` is only read for
/// transfers and `bank` only for opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvOperation {
    r#type: OperationType,
    owner: String,
    counterparty: Option<String>,
    amount: Option<Decimal>,
    bank: Option<String>,
}

/// Returns an iterator that lazily deserializes CSV rows into domain operations,
/// skipping any rows that fail to parse or convert.
pub fn deserialize_csv<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> impl Iterator<Item = Operation> {
    reader
        .deserialize::<CsvOperation>()
        .filter_map(|result| match result {
            Ok(operation) => Some(operation),
            Err(e) => {
                warn!("Failed to parse operation: {e}");
                None
            }
        })
        .filter_map(|csv_operation| match Operation::try_from(csv_operation) {
            Ok(operation) => Some(operation),
            Err(e) => {
                warn!("Failed to convert CsvOperation to Operation: {e}");
                None
            }
        })
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum IntoOperationError {
    #[error("Missing amount for {0:?}")]
    MissingAmount(OperationType),
    #[error("Missing counterparty for transfer")]
    MissingCounterparty,
}

impl TryFrom<CsvOperation> for Operation {
    type Error = IntoOperationError;

    fn try_from(value: CsvOperation) -> Result<Self, Self::Error> {
        let amount = value
            .amount
            .ok_or(IntoOperationError::MissingAmount(value.r#type))?;

        match value.r#type {
            OperationType::Open => {
                let open = Open::new(value.owner, amount);
                Ok(Operation::Open(match value.bank {
                    Some(bank) => open.with_bank(bank),
                    None => open,
                }))
            }
            OperationType::Debit => Ok(Operation::Debit(Debit::new(value.owner, amount))),
            OperationType::Credit => Ok(Operation::Credit(Credit::new(value.owner, amount))),
            OperationType::Transfer => Ok(Operation::Transfer(Transfer::new(
                value.owner,
                value
                    .counterparty
                    .ok_or(IntoOperationError::MissingCounterparty)?,
                amount,
            ))),
        }
    }
}
