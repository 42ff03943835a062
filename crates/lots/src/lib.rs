// In crates/lots/src/lib.rs

pub mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// One row of the lot-size table: a symbol fragment and its contract multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotEntry {
    pub key: String,
    pub multiplier: u32,
}

/// Maps instrument symbols to their contract multiplier (lot size).
///
/// Lookup is case-insensitive substring containment: the first registered key
/// found inside the upper-cased symbol wins, so keys must be ordered
/// most-specific first (`BANKNIFTY` before `NIFTY`, or every Bank Nifty
/// contract would silently pick up the Nifty multiplier). Unknown symbols
/// fall back to a multiplier of 1, which makes `lot_size` total.
#[derive(Debug, Clone)]
pub struct LotRegistry {
    entries: Vec<LotEntry>,
}

impl Default for LotRegistry {
    /// The NSE/BSE index derivatives table. Changing a multiplier here is a
    /// data change, not a logic change.
    fn default() -> Self {
        Self {
            entries: vec![
                LotEntry { key: "BANKNIFTY".into(), multiplier: 15 },
                LotEntry { key: "FINNIFTY".into(), multiplier: 40 },
                LotEntry { key: "NIFTY".into(), multiplier: 75 },
                LotEntry { key: "SENSEX".into(), multiplier: 20 },
            ],
        }
    }
}

impl LotRegistry {
    /// Builds a registry from a custom table, preserving the given priority
    /// order. Rejects empty keys and non-positive multipliers.
    pub fn from_table(entries: Vec<LotEntry>) -> Result<Self> {
        for entry in &entries {
            if entry.key.trim().is_empty() {
                return Err(Error::EmptyKey);
            }
            if entry.multiplier == 0 {
                return Err(Error::InvalidMultiplier {
                    key: entry.key.clone(),
                    multiplier: entry.multiplier,
                });
            }
        }
        let entries = entries
            .into_iter()
            .map(|e| LotEntry { key: e.key.to_uppercase(), multiplier: e.multiplier })
            .collect();
        Ok(Self { entries })
    }

    /// Returns the contract multiplier for `symbol`. Never fails; unmatched
    /// or empty symbols get a multiplier of 1.
    pub fn lot_size(&self, symbol: &str) -> u32 {
        if symbol.is_empty() {
            return 1;
        }
        let symbol = symbol.to_uppercase();
        self.entries
            .iter()
            .find(|e| symbol.contains(&e.key))
            .map(|e| e.multiplier)
            .unwrap_or(1)
    }
}
