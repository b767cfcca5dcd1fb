use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::models::{CartSummary, FoodCategory, MenuItem, ServiceResult};
use crate::services::CheckoutService;

/// One step of a scripted checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CheckoutCommand {
    Add {
        name: String,
        category: FoodCategory,
    },
    Remove {
        name: String,
        category: FoodCategory,
    },
    UpdateQuantity {
        name: String,
        category: FoodCategory,
        quantity: i32,
    },
    Clear,
}

/// Apply a single command to the service
pub fn apply(service: &mut CheckoutService, command: &CheckoutCommand) -> ServiceResult<()> {
    match command {
        CheckoutCommand::Add { name, category } => {
            service.add_to_cart(&MenuItem::new(name.clone(), *category))?;
        }
        CheckoutCommand::Remove { name, category } => {
            service.remove_from_cart(&MenuItem::new(name.clone(), *category))?;
        }
        CheckoutCommand::UpdateQuantity {
            name,
            category,
            quantity,
        } => {
            service.update_quantity(&MenuItem::new(name.clone(), *category), *quantity)?;
        }
        CheckoutCommand::Clear => service.clear_cart(),
    }
    Ok(())
}

/// Replay `commands` in order, stopping at the first rejected command
#[instrument(skip(service, commands), fields(session_id = %service.session_id(), commands = commands.len()))]
pub fn replay(
    service: &mut CheckoutService,
    commands: &[CheckoutCommand],
) -> ServiceResult<CartSummary> {
    for command in commands {
        apply(service, command)?;
    }

    let summary = service.summary();
    info!(
        unique_items = summary.unique_items,
        total_items = summary.total_items,
        total_price = %summary.total_price,
        "Session replayed"
    );
    Ok(summary)
}
