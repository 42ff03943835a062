// In crates/app-config/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration")]
    LoadError(#[from] config::ConfigError),

    #[error("Account capital must not be negative, got {0}")]
    NegativeCapital(Decimal),

    #[error("Invalid lot table: {0}")]
    LotTable(#[from] lots::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
