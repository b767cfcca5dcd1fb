use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FoodCategory;

/// A purchasable dish, identified by name
///
/// The price is unknown until the item is first added to a cart, at which
/// point the checkout service resolves it from the category price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub category: FoodCategory,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl MenuItem {
    /// Create an unpriced menu item
    pub fn new(name: impl Into<String>, category: FoodCategory) -> Self {
        Self {
            name: name.into(),
            category,
            price: None,
        }
    }

    /// Assign the resolved unit price
    pub fn assign_price(&mut self, price: Decimal) {
        self.price = Some(price);
    }

    /// Consume the item and return a priced copy
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.assign_price(price);
        self
    }
}
