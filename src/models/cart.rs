use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use uuid::Uuid;

use super::{CartError, CartResult, FoodCategory, MenuItem};

/// Shopping cart for one checkout session
///
/// Order lines keep insertion order. The cart itself does not prevent two
/// lines with the same name; `CheckoutService` only ever adds a line after
/// checking `get_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<OrderLine>,
    updated_at: DateTime<Utc>,
}

/// One menu item in the cart together with the requested quantity
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    menu_item: MenuItem,
    unit_price: Decimal,
    quantity: u32,
}

/// Read-only snapshot of a cart, suitable for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub session_id: Uuid,
    pub lines: Vec<OrderLineSummary>,
    pub unique_items: usize,
    pub total_items: u64,
    pub total_price: Decimal,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineSummary {
    pub name: String,
    pub category: FoodCategory,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create a new empty cart
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Append an order line without checking for an existing line of the same name
    pub fn add(&mut self, order_line: OrderLine) {
        self.items.push(order_line);
        self.touch();
    }

    /// Remove the order line matching `name` and return it
    pub fn remove(&mut self, name: &str) -> CartResult<OrderLine> {
        let index = self.position(name).ok_or_else(|| CartError::NotFound {
            name: name.to_string(),
        })?;

        let removed = self.items.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Get the order line matching `name`
    pub fn get_item(&self, name: &str) -> Option<&OrderLine> {
        self.items.iter().find(|line| line.name() == name)
    }

    /// Increase the quantity of an existing line by one
    ///
    /// The line is left untouched when it is missing or already holds
    /// `u32::MAX` units.
    pub fn increment_item(&mut self, name: &str) -> CartResult<&OrderLine> {
        let index = self.position(name).ok_or_else(|| CartError::NotFound {
            name: name.to_string(),
        })?;

        let line = &mut self.items[index];
        line.quantity = line
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityLimit {
                name: name.to_string(),
            })?;
        self.updated_at = Utc::now();
        Ok(&*line)
    }

    /// Set the quantity of an existing line
    pub fn set_item_quantity(&mut self, name: &str, quantity: NonZeroU32) -> Option<&OrderLine> {
        let index = self.position(name)?;
        self.touch();

        let line = &mut self.items[index];
        line.quantity = quantity.get();
        Some(&*line)
    }

    /// All order lines in insertion order
    pub fn order_lines(&self) -> &[OrderLine] {
        &self.items
    }

    /// Sum of quantity x unit price over every line
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    /// Number of distinct order lines
    pub fn unique_items_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities
    pub fn total_items_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear all order lines from the cart
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Build a summary snapshot tagged with the owning session
    pub fn summary(&self, session_id: Uuid) -> CartSummary {
        CartSummary {
            session_id,
            lines: self.items.iter().map(OrderLine::summary).collect(),
            unique_items: self.unique_items_count(),
            total_items: self.total_items_count(),
            total_price: self.total_price(),
            updated_at: self.updated_at,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|line| line.name() == name)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl OrderLine {
    /// Create a line with quantity 1; the stored menu item carries `unit_price`
    pub fn new(menu_item: MenuItem, unit_price: Decimal) -> Self {
        Self {
            menu_item: menu_item.with_price(unit_price),
            unit_price,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: NonZeroU32) -> Self {
        self.quantity = quantity.get();
        self
    }

    pub fn menu_item(&self) -> &MenuItem {
        &self.menu_item
    }

    pub fn name(&self) -> &str {
        &self.menu_item.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Total price for this line (unit_price * quantity)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    fn summary(&self) -> OrderLineSummary {
        OrderLineSummary {
            name: self.menu_item.name.clone(),
            category: self.menu_item.category,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.line_total(),
        }
    }
}
