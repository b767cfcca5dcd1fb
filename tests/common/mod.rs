#![allow(dead_code)]

use std::sync::Arc;

use checkout_rs::{Cart, CategoryPriceTable, CheckoutService, FoodCategory, MenuItem, PriceRepository};
use mockall::mock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mock! {
    pub PriceLookup {}

    impl PriceRepository for PriceLookup {
        fn price_by_category(&self, category: FoodCategory) -> Decimal;
    }
}

/// Starters 4.40, mains 7.00
pub fn menu_price_table() -> CategoryPriceTable {
    CategoryPriceTable::new(dec!(4.40), dec!(7.00), dec!(3.50), dec!(2.00))
}

pub fn create_service() -> CheckoutService {
    CheckoutService::new(Arc::new(menu_price_table()), Cart::new())
}

pub fn create_service_with(repository: impl PriceRepository + 'static) -> CheckoutService {
    CheckoutService::new(Arc::new(repository), Cart::new())
}

pub fn starter(name: &str) -> MenuItem {
    MenuItem::new(name, FoodCategory::Starter)
}

pub fn main_course(name: &str) -> MenuItem {
    MenuItem::new(name, FoodCategory::Main)
}
