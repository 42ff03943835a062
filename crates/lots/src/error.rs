// In crates/lots/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Lot table entry '{key}' has non-positive multiplier {multiplier}")]
    InvalidMultiplier { key: String, multiplier: u32 },

    #[error("Lot table entry has an empty symbol key")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, Error>;
