// In crates/positions/src/lib.rs

use std::collections::BTreeMap;

use core_types::{Side, Trade};
use lots::LotRegistry;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Realized outcome of a symbol's matched buy/sell quantity.
///
/// Only symbols with executed quantity on *both* sides appear; a purely open
/// (one-sided) position has no realized PnL to report. `net_qty` is the signed
/// open remainder (buys minus sells) left after matching.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSummary {
    pub symbol: String,
    pub realized_qty: u64,
    pub net_qty: i64,
    pub lot_size: u32,
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub pnl_points: Decimal,
    pub pnl_amount: Decimal,
}

#[derive(Default)]
struct SymbolAccumulator {
    buy_qty: u64,
    sell_qty: u64,
    buy_value: Decimal,
    sell_value: Decimal,
}

/// Computes realized positions from the full (unordered) trade set.
///
/// Matching is aggregate-average: total buy quantity against total sell
/// quantity at volume-weighted prices, not chronological FIFO lots. The
/// realized quantity is `min(buy_qty, sell_qty)` and the realized amount
/// scales the point difference by the contract multiplier.
pub fn reconcile_positions(trades: &[Trade], registry: &LotRegistry) -> Vec<PositionSummary> {
    let mut book: BTreeMap<&str, SymbolAccumulator> = BTreeMap::new();

    for trade in trades {
        if trade.symbol.is_empty() {
            debug!("skipping trade without symbol in position reconciliation");
            continue;
        }
        let value = Decimal::from(trade.quantity) * trade.price;
        let acc = book.entry(trade.symbol.as_str()).or_default();
        match trade.side {
            Side::Buy => {
                acc.buy_qty += trade.quantity;
                acc.buy_value += value;
            }
            Side::Sell => {
                acc.sell_qty += trade.quantity;
                acc.sell_value += value;
            }
        }
    }

    let mut summaries = Vec::new();
    for (symbol, acc) in book {
        let realized_qty = acc.buy_qty.min(acc.sell_qty);
        if realized_qty == 0 {
            continue;
        }

        // Division is safe: realized_qty > 0 implies both sides are positive.
        let avg_buy = acc.buy_value / Decimal::from(acc.buy_qty);
        let avg_sell = acc.sell_value / Decimal::from(acc.sell_qty);
        let pnl_points = avg_sell - avg_buy;
        let lot_size = registry.lot_size(symbol);
        let pnl_amount = pnl_points * Decimal::from(lot_size) * Decimal::from(realized_qty);

        summaries.push(PositionSummary {
            symbol: symbol.to_string(),
            realized_qty,
            net_qty: acc.buy_qty as i64 - acc.sell_qty as i64,
            lot_size,
            avg_buy_price: avg_buy.round_dp(2),
            avg_sell_price: avg_sell.round_dp(2),
            pnl_points: pnl_points.round_dp(2),
            pnl_amount: pnl_amount.round_dp(2),
        });
    }
    summaries
}
