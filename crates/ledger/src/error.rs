// In crates/ledger/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Capital baseline must not be negative, got {0}")]
    NegativeCapital(Decimal),
}

pub type Result<T> = std::result::Result<T, Error>;
