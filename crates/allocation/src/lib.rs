// In crates/allocation/src/lib.rs

use std::collections::BTreeMap;

use charges::ChargeRates;
use chrono::NaiveDate;
use core_types::{Side, Trade};
use ledger::{accumulate_turnover, trade_value};
use lots::LotRegistry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Net PnL attributed to one strategy label, charges included.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyPnl {
    pub strategy: String,
    pub pnl: Decimal,
    pub trades: u64,
}

#[derive(Default)]
struct StrategyAccumulator {
    gross: Decimal,
    charges: Decimal,
    trades: u64,
}

/// A trade's contribution to its strategy's gross PnL: money out on a buy,
/// money in on a sell.
fn signed_value(side: Side, value: Decimal) -> Decimal {
    match side {
        Side::Buy => -value,
        Side::Sell => value,
    }
}

/// Apportions each day's charges across strategies by turnover share and
/// reports per-strategy net PnL, best performer first.
///
/// Daily turnover and the skip rules come from the ledger's shared
/// accumulation, so the per-strategy figures reconcile with the daily ledger
/// rather than drifting on an independent derivation. A trade's share of a
/// day's charges is `day_charges * trade_value / day_turnover`; days with
/// zero turnover allocate nothing.
pub fn allocate_by_strategy(
    trades: &[Trade],
    registry: &LotRegistry,
    rates: &ChargeRates,
) -> Vec<StrategyPnl> {
    let buckets = accumulate_turnover(trades, registry);
    let daily_charges: BTreeMap<NaiveDate, Decimal> = buckets
        .per_day
        .iter()
        .map(|(date, totals)| (*date, rates.compute(totals.buy, totals.sell).total))
        .collect();

    let mut stats: BTreeMap<&str, StrategyAccumulator> = BTreeMap::new();

    for trade in trades {
        let Some((date, value)) = trade_value(trade, registry) else {
            continue;
        };
        let acc = stats.entry(trade.strategy_label()).or_default();

        acc.gross += signed_value(trade.side, value);
        acc.trades += 1;

        let day_totals = &buckets.per_day[&date];
        let day_turnover = day_totals.buy + day_totals.sell;
        if day_turnover > Decimal::ZERO {
            acc.charges += daily_charges[&date] * value / day_turnover;
        }
    }

    let mut output: Vec<StrategyPnl> = stats
        .into_iter()
        .map(|(strategy, acc)| StrategyPnl {
            strategy: strategy.to_string(),
            pnl: (acc.gross - acc.charges).round_dp(2),
            trades: acc.trades,
        })
        .collect();
    // Descending by PnL; the name tiebreak keeps repeated runs byte-identical.
    output.sort_by(|a, b| b.pnl.cmp(&a.pnl).then_with(|| a.strategy.cmp(&b.strategy)));
    output
}

/// Win/loss quality metrics for one strategy label.
///
/// `win_rate` counts winning trades against all of the label's trades, flat
/// (zero-PnL) rows included. `avg_rr` is the average winning amount over the
/// average losing amount, reported as 0 until the label has at least one of
/// each.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAnalytics {
    pub strategy: String,
    pub trades: u64,
    pub wins: u64,
    pub losses: u64,
    pub total_pnl: Decimal,
    pub win_rate: Decimal,
    pub avg_rr: Decimal,
}

#[derive(Default)]
struct AnalyticsAccumulator {
    trades: u64,
    wins: u64,
    losses: u64,
    total_pnl: Decimal,
    win_pnl: Decimal,
    loss_pnl: Decimal,
}

/// Per-strategy trade quality: counts, win rate and average risk-reward.
///
/// Uses the same signed per-trade notional as [`allocate_by_strategy`] (lot
/// multiplier applied, buys negative), with the same skip rules, so a
/// strategy's `total_pnl` here is its allocator gross before charge
/// apportionment. Output is sorted by strategy label.
pub fn strategy_analytics(trades: &[Trade], registry: &LotRegistry) -> Vec<StrategyAnalytics> {
    let mut stats: BTreeMap<&str, AnalyticsAccumulator> = BTreeMap::new();

    for trade in trades {
        let Some((_, value)) = trade_value(trade, registry) else {
            continue;
        };
        let pnl = signed_value(trade.side, value);

        let acc = stats.entry(trade.strategy_label()).or_default();
        acc.trades += 1;
        acc.total_pnl += pnl;
        if pnl > Decimal::ZERO {
            acc.wins += 1;
            acc.win_pnl += pnl;
        } else if pnl < Decimal::ZERO {
            acc.losses += 1;
            acc.loss_pnl += pnl.abs();
        }
    }

    stats
        .into_iter()
        .map(|(strategy, acc)| {
            // trades > 0 here: a label only exists once a row contributed.
            let win_rate = Decimal::from(acc.wins) / Decimal::from(acc.trades) * dec!(100);
            let avg_rr = if acc.wins > 0 && acc.losses > 0 {
                let avg_win = acc.win_pnl / Decimal::from(acc.wins);
                let avg_loss = acc.loss_pnl / Decimal::from(acc.losses);
                avg_win / avg_loss
            } else {
                Decimal::ZERO
            };

            StrategyAnalytics {
                strategy: strategy.to_string(),
                trades: acc.trades,
                wins: acc.wins,
                losses: acc.losses,
                total_pnl: acc.total_pnl.round_dp(2),
                win_rate: win_rate.round_dp(2),
                avg_rr: avg_rr.round_dp(2),
            }
        })
        .collect()
}

/// Journal insights derived from the per-strategy allocation: which labels
/// are making and losing the money. Returns nothing for an empty allocation.
pub fn generate_insights(allocations: &[StrategyPnl]) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(worst) = allocations.last() {
        if worst.pnl < Decimal::ZERO {
            insights.push(format!(
                "{} loses the most money ({} over {} trades)",
                worst.strategy, worst.pnl, worst.trades
            ));
        }
    }
    if let Some(best) = allocations.first() {
        if best.pnl > Decimal::ZERO {
            insights.push(format!(
                "{} is the most profitable strategy ({} over {} trades)",
                best.strategy, best.pnl, best.trades
            ));
        }
    }
    insights
}
