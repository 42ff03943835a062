// End-to-end scenarios for the daily ledger, equity tracking and summary.

use charges::ChargeRates;
use chrono::{NaiveDate, TimeZone, Utc};
use core_types::{Side, Trade};
use ledger::{Error, build_ledger};
use lots::LotRegistry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn trade(symbol: &str, side: Side, quantity: u64, price: Decimal, day: u32) -> Trade {
    Trade {
        symbol: symbol.to_string(),
        side,
        quantity,
        price,
        trade_time: Some(Utc.with_ymd_and_hms(2024, 6, day, 10, 30, 0).unwrap()),
        final_strategy: None,
        suggested_strategy: None,
    }
}

fn zero_rates() -> ChargeRates {
    ChargeRates {
        brokerage_per_order: Decimal::ZERO,
        exchange_rate: Decimal::ZERO,
        regulatory_rate: Decimal::ZERO,
        stamp_rate: Decimal::ZERO,
        gst_rate: Decimal::ZERO,
    }
}

#[test]
fn nifty_round_trip_worked_example() {
    let trades = vec![
        trade("NIFTY24000CE", Side::Buy, 75, dec!(100), 3),
        trade("NIFTY24000CE", Side::Sell, 75, dec!(120), 3),
    ];
    let report = build_ledger(
        &trades,
        dec!(100000),
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap();

    assert_eq!(report.daily.len(), 1);
    let day = &report.daily[0];
    assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    // gross = (120 - 100) * 75 qty * 75 lot
    assert_eq!(day.gross_pnl, dec!(112500.00));
    // buy turnover 562500, sell turnover 675000, per the published schedule
    assert_eq!(day.charges.brokerage, dec!(40.00));
    assert_eq!(day.charges.exchange, dec!(655.88));
    assert_eq!(day.charges.regulatory, dec!(1.24));
    assert_eq!(day.charges.stamp_duty, dec!(16.88));
    assert_eq!(day.charges.gst, dec!(125.26));
    assert_eq!(day.charges.total, dec!(839.26));
    assert_eq!(day.net_pnl, dec!(111660.74));
    assert_eq!(day.equity, dec!(211660.74));
    assert_eq!(day.drawdown, dec!(0.00));
    assert_eq!(day.risk_pct, dec!(111.66));

    let summary = &report.summary;
    assert_eq!(summary.gross_total, dec!(112500.00));
    assert_eq!(summary.charges_total, dec!(839.26));
    assert_eq!(summary.net_total, dec!(111660.74));
    assert_eq!(summary.remaining_capital, dec!(211660.74));
    assert_eq!(summary.today, dec!(111660.74));
    assert_eq!(summary.this_week, dec!(111660.74));
    assert_eq!(summary.this_month, dec!(111660.74));
    assert_eq!(summary.max_drawdown, dec!(0.00));
}

#[test]
fn equity_walk_tracks_peak_and_drawdown_across_days() {
    // Lot size 1 and zero charges keep the arithmetic exact.
    let registry = LotRegistry::from_table(vec![]).unwrap();
    let trades = vec![
        trade("XYZ", Side::Buy, 1, dec!(100), 3),
        trade("XYZ", Side::Sell, 1, dec!(50), 4),
        trade("XYZ", Side::Sell, 1, dec!(200), 5),
    ];
    let report = build_ledger(&trades, dec!(1000), &registry, &zero_rates()).unwrap();

    let nets: Vec<Decimal> = report.daily.iter().map(|d| d.net_pnl).collect();
    assert_eq!(nets, vec![dec!(-100.00), dec!(50.00), dec!(200.00)]);

    let equities: Vec<Decimal> = report.daily.iter().map(|d| d.equity).collect();
    assert_eq!(equities, vec![dec!(900.00), dec!(950.00), dec!(1150.00)]);

    let drawdowns: Vec<Decimal> = report.daily.iter().map(|d| d.drawdown).collect();
    assert_eq!(drawdowns, vec![dec!(-100.00), dec!(-50.00), dec!(0.00)]);

    // Peak equity (equity - drawdown) must be non-decreasing.
    let peaks: Vec<Decimal> = report.daily.iter().map(|d| d.equity - d.drawdown).collect();
    assert!(peaks.windows(2).all(|w| w[0] <= w[1]));

    assert_eq!(report.summary.max_drawdown, dec!(-100.00));
    assert_eq!(report.summary.net_total, dec!(150.00));
    assert_eq!(report.summary.remaining_capital, dec!(1150.00));
    // Anchor date is 2024-06-05; the whole set shares its ISO week and month.
    assert_eq!(report.summary.today, dec!(200.00));
    assert_eq!(report.summary.this_week, dec!(150.00));
    assert_eq!(report.summary.this_month, dec!(150.00));
}

#[test]
fn daily_net_sums_to_the_reported_total() {
    let registry = LotRegistry::default();
    let trades = vec![
        trade("NIFTY24000CE", Side::Buy, 75, dec!(101.35), 3),
        trade("NIFTY24000CE", Side::Sell, 75, dec!(99.10), 3),
        trade("BANKNIFTY48000CE", Side::Buy, 30, dec!(311.45), 4),
        trade("BANKNIFTY48000CE", Side::Sell, 30, dec!(340.20), 5),
        trade("SENSEX73000CE", Side::Sell, 20, dec!(88.88), 5),
    ];
    let report = build_ledger(&trades, dec!(250000), &registry, &ChargeRates::default()).unwrap();

    let summed: Decimal = report.daily.iter().map(|d| d.net_pnl).sum();
    let tolerance = Decimal::new(report.daily.len() as i64, 2); // one paisa per day
    assert!((summed - report.summary.net_total).abs() <= tolerance);

    assert_eq!(
        report.summary.remaining_capital,
        report.summary.capital + report.summary.net_total
    );
    assert!(report.daily.iter().all(|d| d.drawdown <= Decimal::ZERO));
}

#[test]
fn zero_capital_forces_risk_pct_to_zero() {
    let trades = vec![
        trade("NIFTY24000CE", Side::Buy, 75, dec!(100), 3),
        trade("NIFTY24000CE", Side::Sell, 75, dec!(120), 3),
    ];
    let report = build_ledger(
        &trades,
        Decimal::ZERO,
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap();
    assert!(report.daily.iter().all(|d| d.risk_pct == Decimal::ZERO));
    assert!(report.daily[0].net_pnl > Decimal::ZERO);
}

#[test]
fn buy_only_day_has_negative_gross() {
    let trades = vec![
        trade("NIFTY24000CE", Side::Buy, 75, dec!(100), 3),
        trade("NIFTY24000CE", Side::Buy, 75, dec!(95), 3),
    ];
    let report = build_ledger(
        &trades,
        dec!(100000),
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap();
    assert!(report.daily[0].gross_pnl < Decimal::ZERO);
    // Single executed side, so brokerage is charged once.
    assert_eq!(report.daily[0].charges.brokerage, dec!(20.00));
}

#[test]
fn empty_trade_set_yields_zeroed_summary() {
    let report = build_ledger(
        &[],
        dec!(50000),
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap();
    assert!(report.daily.is_empty());
    assert_eq!(report.summary.gross_total, Decimal::ZERO);
    assert_eq!(report.summary.charges_total, Decimal::ZERO);
    assert_eq!(report.summary.net_total, Decimal::ZERO);
    assert_eq!(report.summary.today, Decimal::ZERO);
    assert_eq!(report.summary.this_week, Decimal::ZERO);
    assert_eq!(report.summary.this_month, Decimal::ZERO);
    assert_eq!(report.summary.max_drawdown, Decimal::ZERO);
    assert_eq!(report.summary.remaining_capital, dec!(50000));
}

#[test]
fn trades_missing_symbol_or_timestamp_do_not_contribute() {
    let mut orphan = trade("NIFTY24000CE", Side::Sell, 75, dec!(500), 3);
    orphan.trade_time = None;
    let unnamed = trade("", Side::Sell, 75, dec!(500), 3);
    let kept = trade("NIFTY24000CE", Side::Buy, 75, dec!(100), 4);

    let report = build_ledger(
        &[orphan, unnamed, kept],
        dec!(100000),
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap();
    // Only the valid BUY row survives: one day, negative gross.
    assert_eq!(report.daily.len(), 1);
    assert_eq!(report.daily[0].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    assert!(report.daily[0].gross_pnl < Decimal::ZERO);
}

#[test]
fn negative_capital_is_a_configuration_error() {
    let err = build_ledger(
        &[],
        dec!(-0.01),
        &LotRegistry::default(),
        &ChargeRates::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NegativeCapital(_)));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let trades = vec![
        trade("NIFTY24000CE", Side::Buy, 75, dec!(100.55), 3),
        trade("NIFTY24000CE", Side::Sell, 75, dec!(121.10), 4),
        trade("BANKNIFTY48000CE", Side::Sell, 15, dec!(300), 4),
    ];
    let registry = LotRegistry::default();
    let rates = ChargeRates::default();

    let first = build_ledger(&trades, dec!(100000), &registry, &rates).unwrap();
    let second = build_ledger(&trades, dec!(100000), &registry, &rates).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
