use anyhow::Context;
use std::io::{self, Read};
use std::sync::Arc;
use tracing::{debug, error, info};

use checkout_rs::{
    init_logging, replay, Cart, CategoryPriceTable, CheckoutCommand, CheckoutService, Config,
};

/// Reads a JSON array of checkout commands from stdin and prints the
/// resulting cart summary as JSON.
fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(&config.observability).context("Failed to initialize logging")?;
    info!("Configuration loaded from environment");
    debug!("Configuration: {:?}", config);

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read commands from stdin")?;

    let commands: Vec<CheckoutCommand> =
        serde_json::from_str(&input).context("Failed to parse checkout commands")?;
    info!("Loaded {} checkout commands", commands.len());

    let price_table = CategoryPriceTable::from_config(&config.pricing);
    let mut service = CheckoutService::new(Arc::new(price_table), Cart::new());

    let summary = match replay(&mut service, &commands) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Checkout session failed: {}", e);
            return Err(e).context("Checkout session rejected a command");
        }
    };

    let output = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    println!("{}", output);

    Ok(())
}
