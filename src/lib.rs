//! A small banking model: accounts with exact decimal balances, banks that
//! register them, and a ledger that replays CSV batches of operations.

pub mod domain;
pub mod ledger;
pub mod output;
pub mod parsing;
pub mod registry;
