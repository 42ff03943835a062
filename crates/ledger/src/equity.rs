// In crates/ledger/src/equity.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-day equity figures produced by one step of the tracker.
#[derive(Debug, Clone, Copy)]
pub struct EquityPoint {
    pub equity: Decimal,
    pub drawdown: Decimal,
    pub risk_pct: Decimal,
}

/// Walks daily net PnL forward from a capital baseline.
///
/// This is the one genuinely sequential piece of the engine: equity, peak and
/// drawdown carry state from day to day, so callers must feed days in
/// ascending date order. Peak equity never decreases and drawdown is never
/// positive by construction.
#[derive(Debug)]
pub struct EquityTracker {
    capital: Decimal,
    running_pnl: Decimal,
    peak_equity: Decimal,
    max_drawdown: Decimal,
}

impl EquityTracker {
    pub fn new(capital: Decimal) -> Self {
        Self {
            capital,
            running_pnl: Decimal::ZERO,
            peak_equity: capital,
            max_drawdown: Decimal::ZERO,
        }
    }

    /// Applies one day's net PnL and returns that day's equity figures.
    pub fn advance(&mut self, net_pnl: Decimal) -> EquityPoint {
        self.running_pnl += net_pnl;
        let equity = self.capital + self.running_pnl;
        self.peak_equity = self.peak_equity.max(equity);
        let drawdown = equity - self.peak_equity;
        self.max_drawdown = self.max_drawdown.min(drawdown);

        // Guard the division: a zero capital base means risk is reported as
        // zero, not infinite.
        let risk_pct = if self.capital > Decimal::ZERO {
            net_pnl.abs() / self.capital * dec!(100)
        } else {
            Decimal::ZERO
        };

        EquityPoint { equity, drawdown, risk_pct }
    }

    pub fn max_drawdown(&self) -> Decimal {
        self.max_drawdown
    }
}
