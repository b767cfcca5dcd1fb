use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::models::FoodCategory;

/// Source of unit prices keyed by menu category
///
/// Implementations must be synchronous and return a non-negative price for
/// every category.
pub trait PriceRepository: Send + Sync {
    fn price_by_category(&self, category: FoodCategory) -> Decimal;
}

/// Static price table holding one price per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPriceTable {
    starter: Decimal,
    main: Decimal,
    dessert: Decimal,
    drink: Decimal,
}

impl CategoryPriceTable {
    pub fn new(starter: Decimal, main: Decimal, dessert: Decimal, drink: Decimal) -> Self {
        Self {
            starter,
            main,
            dessert,
            drink,
        }
    }

    pub fn from_config(pricing: &PricingConfig) -> Self {
        Self::new(
            pricing.starter_price,
            pricing.main_price,
            pricing.dessert_price,
            pricing.drink_price,
        )
    }
}

impl Default for CategoryPriceTable {
    fn default() -> Self {
        Self::from_config(&PricingConfig::default())
    }
}

impl PriceRepository for CategoryPriceTable {
    fn price_by_category(&self, category: FoodCategory) -> Decimal {
        let price = match category {
            FoodCategory::Starter => self.starter,
            FoodCategory::Main => self.main,
            FoodCategory::Dessert => self.dessert,
            FoodCategory::Drink => self.drink,
        };
        debug!(category = %category, price = %price, "Price table lookup");
        price
    }
}
