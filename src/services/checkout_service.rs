use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::models::{
    Cart, CartError, CartSummary, MenuItem, OrderLine, ServiceError, ServiceResult,
};
use crate::repositories::PriceRepository;

/// Checkout rules on top of a single cart
///
/// Adding an item that is already in the cart bumps its quantity instead of
/// creating a second line, and the unit price is looked up only once per
/// name, on the first add.
pub struct CheckoutService {
    session_id: Uuid,
    price_repository: Arc<dyn PriceRepository>,
    cart: Cart,
}

impl CheckoutService {
    /// Create a new CheckoutService owning `cart`
    pub fn new(price_repository: Arc<dyn PriceRepository>, cart: Cart) -> Self {
        let session_id = Uuid::new_v4();
        info!(session_id = %session_id, "Checkout session started");

        Self {
            session_id,
            price_repository,
            cart,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Add one unit of `menu_item` to the cart
    ///
    /// Fails with `InvalidArgument` when the existing line cannot hold another
    /// unit; the cart is unchanged in that case.
    #[instrument(skip(self, menu_item), fields(session_id = %self.session_id, item = %menu_item.name))]
    pub fn add_to_cart(&mut self, menu_item: &MenuItem) -> ServiceResult<()> {
        match self.cart.increment_item(&menu_item.name) {
            Ok(line) => {
                info!(quantity = line.quantity(), "Item already in cart, quantity increased");
                return Ok(());
            }
            Err(CartError::NotFound { .. }) => {}
            Err(e) => {
                warn!("Rejected add: {}", e);
                return Err(e.into());
            }
        }

        let unit_price = self.price_repository.price_by_category(menu_item.category);
        debug!(category = %menu_item.category, unit_price = %unit_price, "Resolved unit price");

        self.cart.add(OrderLine::new(menu_item.clone(), unit_price));
        info!("Item added to cart");
        Ok(())
    }

    /// Remove the whole order line for `menu_item`
    #[instrument(skip(self, menu_item), fields(session_id = %self.session_id, item = %menu_item.name))]
    pub fn remove_from_cart(&mut self, menu_item: &MenuItem) -> ServiceResult<OrderLine> {
        match self.cart.remove(&menu_item.name) {
            Ok(removed) => {
                info!(quantity = removed.quantity(), "Item removed from cart");
                Ok(removed)
            }
            Err(e) => {
                warn!("Rejected removal: {}", e);
                Err(e.into())
            }
        }
    }

    /// Set the quantity of an item already in the cart; zero removes it
    #[instrument(skip(self, menu_item), fields(session_id = %self.session_id, item = %menu_item.name))]
    pub fn update_quantity(&mut self, menu_item: &MenuItem, quantity: i32) -> ServiceResult<()> {
        let quantity = match u32::try_from(quantity) {
            Ok(quantity) => quantity,
            Err(_) => {
                warn!(quantity, "Rejected negative quantity");
                return Err(ServiceError::invalid_argument(
                    "Please specify a quantity greater than 0",
                ));
            }
        };

        let Some(quantity) = NonZeroU32::new(quantity) else {
            info!("Quantity set to 0, removing item");
            return self.remove_from_cart(menu_item).map(|_| ());
        };

        match self.cart.set_item_quantity(&menu_item.name, quantity) {
            Some(line) => {
                info!(quantity = line.quantity(), "Item quantity updated");
                Ok(())
            }
            None => {
                warn!("Rejected update of item not in cart");
                Err(ServiceError::invalid_argument(
                    "Cannot update an item that is not in cart",
                ))
            }
        }
    }

    /// Empty the cart
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        info!("Cart cleared");
    }

    pub fn unique_items_count(&self) -> usize {
        self.cart.unique_items_count()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items_count()
    }

    pub fn calculate_total_bill(&self) -> Decimal {
        self.cart.total_price()
    }

    /// Get the order line for `menu_item`, if it has been added
    pub fn get_added_item(&self, menu_item: &MenuItem) -> Option<&OrderLine> {
        self.get_added_item_by_name(&menu_item.name)
    }

    pub fn get_added_item_by_name(&self, name: &str) -> Option<&OrderLine> {
        self.cart.get_item(name)
    }

    pub fn order_lines(&self) -> &[OrderLine] {
        self.cart.order_lines()
    }

    /// Snapshot of the cart tagged with this session's id
    pub fn summary(&self) -> CartSummary {
        self.cart.summary(self.session_id)
    }
}
