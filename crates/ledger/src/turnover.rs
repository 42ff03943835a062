// In crates/ledger/src/turnover.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use core_types::{Side, Trade};
use lots::LotRegistry;
use rust_decimal::Decimal;
use tracing::debug;

/// Buy/sell notional accumulated for one grouping key.
#[derive(Debug, Clone, Default)]
pub struct SideTotals {
    pub buy: Decimal,
    pub sell: Decimal,
}

/// Turnover bucketed by calendar date, and by symbol within each date.
///
/// This is the single derivation of daily turnover shared by the ledger and
/// the strategy allocator, so the two reports cannot drift on which trades
/// count or how notional is computed.
#[derive(Debug, Default)]
pub struct DayBuckets {
    pub per_symbol: BTreeMap<NaiveDate, BTreeMap<String, SideTotals>>,
    pub per_day: BTreeMap<NaiveDate, SideTotals>,
}

/// Notional value and ledger date of a single trade, or `None` if the trade
/// carries no usable ledger information (missing symbol or timestamp).
pub fn trade_value(trade: &Trade, registry: &LotRegistry) -> Option<(NaiveDate, Decimal)> {
    let Some(trade_time) = trade.trade_time else {
        debug!(symbol = %trade.symbol, "skipping trade without timestamp");
        return None;
    };
    if trade.symbol.is_empty() {
        debug!("skipping trade without symbol");
        return None;
    }
    let lot = Decimal::from(registry.lot_size(&trade.symbol));
    let value = Decimal::from(trade.quantity) * trade.price * lot;
    Some((trade_time.date_naive(), value))
}

/// Buckets the trade set's turnover by date and symbol. Skippable rows are
/// excluded here once, for every downstream consumer.
pub fn accumulate_turnover(trades: &[Trade], registry: &LotRegistry) -> DayBuckets {
    let mut buckets = DayBuckets::default();

    for trade in trades {
        let Some((date, value)) = trade_value(trade, registry) else {
            continue;
        };

        let symbol_totals = buckets
            .per_symbol
            .entry(date)
            .or_default()
            .entry(trade.symbol.clone())
            .or_default();
        let day_totals = buckets.per_day.entry(date).or_default();

        match trade.side {
            Side::Buy => {
                symbol_totals.buy += value;
                day_totals.buy += value;
            }
            Side::Sell => {
                symbol_totals.sell += value;
                day_totals.sell += value;
            }
        }
    }
    buckets
}
