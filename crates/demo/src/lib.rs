//! Demonstration routine: stock two products, reprice one, log the result.

use tracing::Dispatch;

use stockroom_core::DomainResult;
use stockroom_inventory::{Inventory, Product};

/// Run the demo against a fresh inventory and return it.
pub fn run(logger: &Dispatch) -> Inventory {
    let mut inventory = Inventory::new();
    run_on(logger, &mut inventory);
    inventory
}

/// Run the demo against `inventory`, logging through `logger` only.
///
/// Writes one `Inventory Item:` line per product on success. A domain error
/// at any step is logged as a single `Error:` line and the routine returns.
pub fn run_on(logger: &Dispatch, inventory: &mut Inventory) {
    tracing::dispatcher::with_default(logger, || match stock_and_reprice(inventory) {
        Ok(()) => {
            for item in inventory.list_products() {
                tracing::info!("Inventory Item: {item}");
            }
        }
        Err(err) => tracing::error!("Error: {err}"),
    });
}

fn stock_and_reprice(inventory: &mut Inventory) -> DomainResult<()> {
    inventory.add_product(Product::new(1, "Laptop", 10, 75000.00)?)?;
    inventory.add_product(Product::new(2, "Mouse", 50, 500.00)?)?;
    inventory.update_product(2, None, Some(550.00))
}
