// In crates/app-config/src/types.rs

use charges::ChargeRates;
use lots::LotEntry;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The account's risk base. The engine reads it, never writes it.
    pub account: AccountSettings,
    /// Fee schedule overrides. Defaults to the NSE F&O schedule.
    #[serde(default)]
    pub charges: ChargeRates,
    /// Lot table overrides, highest-priority key first. Defaults to the
    /// built-in index table.
    #[serde(default)]
    pub lots: Option<Vec<LotEntry>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AccountSettings {
    pub capital: Decimal,
}
