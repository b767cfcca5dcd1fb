use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

use crate::models::FoodCategory;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "CHECKOUT";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub pricing: PricingConfig,
    pub observability: ObservabilityConfig,
}

/// Unit price for each menu category
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_starter_price")]
    pub starter_price: Decimal,
    #[serde(default = "default_main_price")]
    pub main_price: Decimal,
    #[serde(default = "default_dessert_price")]
    pub dessert_price: Decimal,
    #[serde(default = "default_drink_price")]
    pub drink_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    /// Load configuration from `CHECKOUT_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to read environment: {}", e),
            })?;

        Self::from_settings(settings)
    }

    /// Build configuration from already-collected settings
    pub fn from_settings(settings: config::Config) -> Result<Self, ConfigError> {
        let pricing = PricingConfig::from_settings(&settings)?;
        let observability = ObservabilityConfig::from_settings(&settings)?;

        let config = Config {
            pricing,
            observability,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for category in FoodCategory::ALL {
            let price = self.pricing.price_for(category);
            if price < Decimal::ZERO {
                return Err(ConfigError::ValidationError {
                    message: format!("Price for {} cannot be negative: {}", category, price),
                });
            }
        }

        if self.observability.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.observability.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level: {}", self.observability.log_level),
            });
        }

        Ok(())
    }
}

impl PricingConfig {
    fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        settings
            .clone()
            .try_deserialize()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to deserialize pricing config: {}", e),
            })
    }

    pub fn price_for(&self, category: FoodCategory) -> Decimal {
        match category {
            FoodCategory::Starter => self.starter_price,
            FoodCategory::Main => self.main_price,
            FoodCategory::Dessert => self.dessert_price,
            FoodCategory::Drink => self.drink_price,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            starter_price: default_starter_price(),
            main_price: default_main_price(),
            dessert_price: default_dessert_price(),
            drink_price: default_drink_price(),
        }
    }
}

impl ObservabilityConfig {
    fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        settings
            .clone()
            .try_deserialize()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to deserialize observability config: {}", e),
            })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: default_service_version(),
            log_level: default_log_level(),
            enable_json_logging: false,
        }
    }
}

// Default value functions
pub(crate) fn default_starter_price() -> Decimal {
    dec!(4.40)
}

pub(crate) fn default_main_price() -> Decimal {
    dec!(7.00)
}

pub(crate) fn default_dessert_price() -> Decimal {
    dec!(3.50)
}

pub(crate) fn default_drink_price() -> Decimal {
    dec!(2.00)
}

pub(crate) fn default_service_name() -> String {
    "checkout-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests;
