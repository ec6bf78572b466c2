//! Order list commands.

use harvest_hearth_client::orders::OrderManager;
use harvest_hearth_core::ItemId;
use rust_decimal::Decimal;

use super::Context;

/// Add one of an item to the order list.
///
/// # Errors
///
/// Returns an error if the menu has no such item or the store rejects the write.
pub async fn add(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let item = ctx.item(id).await?;
    let orders = OrderManager::new(ctx.store.clone());
    orders.add_to_order(&item)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{} added to your order!", item.name);
    }
    Ok(())
}

/// Remove an item's line from the order list.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn remove(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    OrderManager::new(ctx.store.clone()).remove_from_order(ItemId::new(id))?;
    Ok(())
}

/// Set an item's quantity. Zero or less removes the line.
///
/// # Errors
///
/// Returns an error if the item is not in the order or the store rejects the write.
pub fn set(ctx: &Context, id: i32, quantity: i64) -> Result<(), Box<dyn std::error::Error>> {
    let orders = OrderManager::new(ctx.store.clone());
    let updated = orders.update_order_quantity(ItemId::new(id), quantity)?;
    if !updated {
        return Err(format!("item {id} is not in the order").into());
    }
    Ok(())
}

/// Print the order summary, as text or JSON.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn show(ctx: &Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = OrderManager::new(ctx.store.clone()).get_order_summary();

    #[allow(clippy::print_stdout)]
    {
        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }
        if summary.items.is_empty() {
            println!("Your order is empty.");
            return Ok(());
        }
        for line in &summary.items {
            let amount = line.line_total().unwrap_or(Decimal::MAX);
            let line_total = format!("${amount:.2}");
            println!("{:>3} x {:<32} {line_total:>8}", line.quantity, line.item.name);
        }
        println!(
            "{} item(s), {} line(s), total ${}",
            summary.total_quantity, summary.item_count, summary.total
        );
    }
    Ok(())
}

/// Clear the order list.
///
/// # Errors
///
/// Returns an error if the store rejects the removal.
pub fn clear(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    OrderManager::new(ctx.store.clone()).clear_orders()?;
    tracing::info!("Order cleared");
    Ok(())
}
