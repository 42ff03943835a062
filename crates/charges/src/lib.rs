// In crates/charges/src/lib.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The fee schedule applied to a day's turnover.
///
/// The rates are basis-point style multipliers except `brokerage_per_order`,
/// a flat per-side fee. Values must match the jurisdiction's schedule
/// bit-for-bit or the emitted charge figures will drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRates {
    pub brokerage_per_order: Decimal,
    pub exchange_rate: Decimal,
    pub regulatory_rate: Decimal,
    pub stamp_rate: Decimal,
    pub gst_rate: Decimal,
}

impl Default for ChargeRates {
    /// NSE F&O schedule with a flat discount-broker fee.
    fn default() -> Self {
        Self {
            brokerage_per_order: dec!(20),
            exchange_rate: dec!(0.00053),
            regulatory_rate: dec!(0.000001),
            stamp_rate: dec!(0.00003),
            gst_rate: dec!(0.18),
        }
    }
}

/// An itemized charge breakdown for one trading day.
///
/// Every field is rounded to 2 decimal places; `total` is the sum of the five
/// already-rounded components, never a re-rounding of the unrounded sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub brokerage: Decimal,
    pub exchange: Decimal,
    pub regulatory: Decimal,
    pub stamp_duty: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
}

impl ChargeRates {
    /// Computes the full charge breakdown for a day's buy/sell turnover.
    ///
    /// Brokerage is charged once per executed side. Stamp duty applies to the
    /// buy leg only, and GST to brokerage plus exchange charges only.
    pub fn compute(&self, buy_turnover: Decimal, sell_turnover: Decimal) -> ChargeBreakdown {
        let turnover = buy_turnover + sell_turnover;

        let mut brokerage = Decimal::ZERO;
        if buy_turnover > Decimal::ZERO {
            brokerage += self.brokerage_per_order;
        }
        if sell_turnover > Decimal::ZERO {
            brokerage += self.brokerage_per_order;
        }

        let exchange = turnover * self.exchange_rate;
        let regulatory = turnover * self.regulatory_rate;
        let stamp_duty = buy_turnover * self.stamp_rate;
        let gst = (brokerage + exchange) * self.gst_rate;

        // Round each component independently, then sum. Summing first and
        // rounding once produces off-by-a-paisa totals.
        let brokerage = brokerage.round_dp(2);
        let exchange = exchange.round_dp(2);
        let regulatory = regulatory.round_dp(2);
        let stamp_duty = stamp_duty.round_dp(2);
        let gst = gst.round_dp(2);
        let total = brokerage + exchange + regulatory + stamp_duty + gst;

        ChargeBreakdown { brokerage, exchange, regulatory, stamp_duty, gst, total }
    }
}
