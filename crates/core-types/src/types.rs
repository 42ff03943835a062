// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The execution side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// A single executed trade, as handed to the engine by the import/entry flows.
///
/// Instances are a read-only snapshot: the engine never mutates them. Rows
/// with an empty `symbol` or a missing `trade_time` carry no usable ledger
/// information and are skipped (not rejected) during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    #[serde(default)]
    pub symbol: String,
    pub side: Side,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub trade_time: Option<DateTime<Utc>>,
    /// Label the user settled on, if any. Wins over the suggested one.
    #[serde(default)]
    pub final_strategy: Option<String>,
    /// Label proposed by the upstream classifier, if any.
    #[serde(default)]
    pub suggested_strategy: Option<String>,
}

impl Trade {
    /// The strategy bucket this trade belongs to for cost allocation.
    pub fn strategy_label(&self) -> &str {
        self.final_strategy
            .as_deref()
            .or(self.suggested_strategy.as_deref())
            .unwrap_or("Unclassified")
    }
}
