pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::{Config, ConfigError, ObservabilityConfig, PricingConfig};
pub use handlers::{replay, CheckoutCommand};
pub use models::{
    Cart, CartError, CartSummary, FoodCategory, MenuItem, OrderLine, OrderLineSummary, ServiceError,
    ServiceResult,
};
pub use observability::init_logging;
pub use repositories::{CategoryPriceTable, PriceRepository};
pub use services::CheckoutService;
