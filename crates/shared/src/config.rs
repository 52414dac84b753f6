//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Financial engine configuration.
    pub finance: FinanceConfig,
}

/// Financial engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// Operating currency code (ISO 4217).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Number of decimal places for monetary amounts.
    #[serde(default = "default_money_scale")]
    pub money_scale: u32,
    /// Default payment terms, in days, used to suggest due dates.
    #[serde(default = "default_payment_terms_days")]
    pub default_payment_terms_days: i64,
}

fn default_currency() -> String {
    "BRL".to_string()
}

fn default_money_scale() -> u32 {
    2
}

fn default_payment_terms_days() -> i64 {
    30
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            money_scale: default_money_scale(),
            default_payment_terms_days: default_payment_terms_days(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            finance: FinanceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINLAB")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("finance.currency", default_currency())?
            .set_default("finance.money_scale", i64::from(default_money_scale()))?
            .set_default(
                "finance.default_payment_terms_days",
                default_payment_terms_days(),
            )?
            .build()?;

        config.try_deserialize()
    }
}
