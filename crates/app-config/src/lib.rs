// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AccountSettings, Settings};

use charges::ChargeRates;
use lots::LotRegistry;
use rust_decimal::Decimal;

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables (e.g., `APP_ACCOUNT__CAPITAL=...`).
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/base"))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

impl Settings {
    /// Rejects invalid configuration before any engine call sees it. Data
    /// defects inside trades degrade gracefully later; these do not.
    pub fn validate(&self) -> Result<()> {
        if self.account.capital < Decimal::ZERO {
            return Err(Error::NegativeCapital(self.account.capital));
        }
        // Builds and discards a registry so a bad multiplier is reported at
        // load time, not on first use.
        self.lot_registry()?;
        Ok(())
    }

    pub fn lot_registry(&self) -> Result<LotRegistry> {
        match &self.lots {
            Some(entries) => Ok(LotRegistry::from_table(entries.clone())?),
            None => Ok(LotRegistry::default()),
        }
    }

    pub fn charge_rates(&self) -> ChargeRates {
        self.charges.clone()
    }
}
