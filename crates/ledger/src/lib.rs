// In crates/ledger/src/lib.rs

pub mod equity;
pub mod error;
pub mod turnover;

pub use error::{Error, Result};
pub use turnover::{DayBuckets, SideTotals, accumulate_turnover, trade_value};

use charges::{ChargeBreakdown, ChargeRates};
use chrono::{Datelike, NaiveDate, Utc};
use core_types::Trade;
use equity::EquityTracker;
use lots::LotRegistry;
use rust_decimal::Decimal;
use serde::Serialize;

/// One calendar day of ledger output, in ascending date order.
///
/// Days without any contributing trade are simply absent; the ledger never
/// synthesizes zero-activity rows.
#[derive(Debug, Clone, Serialize)]
pub struct DailyLedgerEntry {
    pub date: NaiveDate,
    pub gross_pnl: Decimal,
    pub net_pnl: Decimal,
    pub equity: Decimal,
    pub drawdown: Decimal,
    pub charges: ChargeBreakdown,
    pub risk_pct: Decimal,
}

/// Aggregates across the whole ledger, plus rollups for the windows ending at
/// the last traded date.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    pub today: Decimal,
    pub this_week: Decimal,
    pub this_month: Decimal,
    pub gross_total: Decimal,
    pub charges_total: Decimal,
    pub net_total: Decimal,
    pub capital: Decimal,
    pub remaining_capital: Decimal,
    pub max_drawdown: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerReport {
    pub daily: Vec<DailyLedgerEntry>,
    pub summary: LedgerSummary,
}

/// Builds the chronological daily ledger and its summary.
///
/// A pure function of the trade snapshot and the capital baseline: the same
/// inputs always produce the same report. Trades missing a symbol or a
/// timestamp are skipped; a negative capital baseline is the one input
/// rejected outright, before any computation.
pub fn build_ledger(
    trades: &[Trade],
    capital: Decimal,
    registry: &LotRegistry,
    rates: &ChargeRates,
) -> Result<LedgerReport> {
    if capital < Decimal::ZERO {
        return Err(Error::NegativeCapital(capital));
    }

    let buckets = accumulate_turnover(trades, registry);

    let mut tracker = EquityTracker::new(capital);
    let mut daily = Vec::with_capacity(buckets.per_symbol.len());
    let mut gross_total = Decimal::ZERO;
    let mut net_total = Decimal::ZERO;
    let mut charges_total = Decimal::ZERO;

    // BTreeMap iteration gives the strictly ascending date order the equity
    // tracker depends on.
    for (date, symbols) in &buckets.per_symbol {
        let gross: Decimal = symbols.values().map(|t| t.sell - t.buy).sum();
        let day_totals = &buckets.per_day[date];
        let charge_breakdown = rates.compute(day_totals.buy, day_totals.sell);
        let net = gross - charge_breakdown.total;

        gross_total += gross;
        net_total += net;
        charges_total += charge_breakdown.total;

        let point = tracker.advance(net);
        daily.push(DailyLedgerEntry {
            date: *date,
            gross_pnl: gross.round_dp(2),
            net_pnl: net.round_dp(2),
            equity: point.equity.round_dp(2),
            drawdown: point.drawdown.round_dp(2),
            charges: charge_breakdown,
            risk_pct: point.risk_pct.round_dp(2),
        });
    }

    let (today, this_week, this_month) = window_rollups(&daily);

    let capital_out = capital.round_dp(2);
    let net_total_out = net_total.round_dp(2);
    let summary = LedgerSummary {
        today,
        this_week,
        this_month,
        gross_total: gross_total.round_dp(2),
        charges_total: charges_total.round_dp(2),
        net_total: net_total_out,
        capital: capital_out,
        remaining_capital: capital_out + net_total_out,
        max_drawdown: tracker.max_drawdown().round_dp(2),
    };

    Ok(LedgerReport { daily, summary })
}

/// Sums emitted daily net PnL over the day/ISO-week/month windows anchored at
/// the last ledger date (or the invocation date for an empty ledger).
fn window_rollups(daily: &[DailyLedgerEntry]) -> (Decimal, Decimal, Decimal) {
    let anchor = match daily.last() {
        Some(entry) => entry.date,
        None => Utc::now().date_naive(),
    };
    let anchor_week = anchor.iso_week();

    let today = daily
        .iter()
        .filter(|e| e.date == anchor)
        .map(|e| e.net_pnl)
        .sum();
    let this_week = daily
        .iter()
        .filter(|e| e.date.iso_week() == anchor_week)
        .map(|e| e.net_pnl)
        .sum();
    let this_month = daily
        .iter()
        .filter(|e| e.date.year() == anchor.year() && e.date.month() == anchor.month())
        .map(|e| e.net_pnl)
        .sum();

    (today, this_week, this_month)
}
