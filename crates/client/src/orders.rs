//! Persisted order list.
//!
//! The order list is a JSON array of [`OrderLine`]s under
//! [`keys::ORDERS`](crate::store::keys::ORDERS). Every operation loads the
//! whole collection, changes it, and writes it back. There is at most one
//! line per item: adding an item that is already present bumps its quantity.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use harvest_hearth_core::{CatalogItem, ItemId, OrderLine, OrderSummary};

use crate::clock::{Clock, LineIdGenerator, SystemClock, UuidLineIds};
use crate::store::{self, DataStore, keys};

/// Order list operations over a [`DataStore`].
#[derive(Clone)]
pub struct OrderManager {
    store: DataStore,
    clock: Arc<dyn Clock>,
    line_ids: Arc<dyn LineIdGenerator>,
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager").finish_non_exhaustive()
    }
}

impl OrderManager {
    /// Order manager stamping lines with wall-clock time and UUIDs.
    #[must_use]
    pub fn new(store: DataStore) -> Self {
        Self::with_sources(store, Arc::new(SystemClock), Arc::new(UuidLineIds))
    }

    /// Order manager with explicit time and line ID sources.
    #[must_use]
    pub fn with_sources(
        store: DataStore,
        clock: Arc<dyn Clock>,
        line_ids: Arc<dyn LineIdGenerator>,
    ) -> Self {
        Self {
            store,
            clock,
            line_ids,
        }
    }

    /// All order lines, in insertion order. Empty when nothing is stored or
    /// the stored value is malformed.
    #[must_use]
    pub fn get_orders(&self) -> Vec<OrderLine> {
        self.store.get_or_default(keys::ORDERS)
    }

    fn save(&self, orders: &[OrderLine]) -> store::Result<()> {
        self.store.set(keys::ORDERS, orders)
    }

    /// Add one of `item` to the order.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated order list cannot be written.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub fn add_to_order(&self, item: &CatalogItem) -> store::Result<()> {
        let mut orders = self.get_orders();

        if let Some(line) = orders.iter_mut().find(|line| line.item_id() == item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            orders.push(OrderLine::new(
                item.clone(),
                self.clock.now(),
                self.line_ids.next_id(),
            ));
        }

        self.save(&orders)
    }

    /// Remove the line for `item_id`. Removing an absent item rewrites the
    /// list unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated order list cannot be written.
    pub fn remove_from_order(&self, item_id: ItemId) -> store::Result<()> {
        let orders: Vec<OrderLine> = self
            .get_orders()
            .into_iter()
            .filter(|line| line.item_id() != item_id)
            .collect();
        self.save(&orders)
    }

    /// Set the quantity for `item_id`. A quantity of zero or less removes the
    /// line.
    ///
    /// Returns `Ok(false)` when no line exists for `item_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated order list cannot be written.
    pub fn update_order_quantity(&self, item_id: ItemId, quantity: i64) -> store::Result<bool> {
        let mut orders = self.get_orders();
        let Some(line) = orders.iter_mut().find(|line| line.item_id() == item_id) else {
            return Ok(false);
        };

        if quantity <= 0 {
            self.remove_from_order(item_id)?;
            return Ok(true);
        }

        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.save(&orders)?;
        Ok(true)
    }

    /// Remove the whole order list.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the removal.
    pub fn clear_orders(&self) -> store::Result<()> {
        self.store.remove(keys::ORDERS)
    }

    /// Sum of price times quantity over all lines; zero when empty.
    #[must_use]
    pub fn get_order_total(&self) -> Decimal {
        order_total(&self.get_orders())
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn get_order_count(&self) -> u32 {
        order_count(&self.get_orders())
    }

    /// Lines plus totals, computed from one read of the collection.
    #[must_use]
    pub fn get_order_summary(&self) -> OrderSummary {
        let items = self.get_orders();
        let total = order_total(&items);
        OrderSummary {
            item_count: items.len(),
            total_quantity: order_count(&items),
            total: format!("{:.2}", total.round_dp(2)),
            items,
        }
    }
}

/// Sum of line totals, saturating at `Decimal::MAX` when stored prices
/// overflow.
fn order_total(lines: &[OrderLine]) -> Decimal {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| {
            line.line_total().and_then(|amount| total.checked_add(amount))
        })
        .unwrap_or_else(|| {
            tracing::warn!(lines = lines.len(), "Order total overflowed, saturating");
            Decimal::MAX
        })
}

fn order_count(lines: &[OrderLine]) -> u32 {
    lines
        .iter()
        .fold(0_u32, |count, line| count.saturating_add(line.quantity))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::{TimeZone, Utc};

    use harvest_hearth_core::Price;

    use super::*;
    use crate::clock::{FixedClock, SequentialLineIds};

    fn manager() -> OrderManager {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 15, 18, 30, 0).unwrap());
        OrderManager::with_sources(
            DataStore::in_memory(),
            Arc::new(clock),
            Arc::new(SequentialLineIds::new()),
        )
    }

    fn soup() -> CatalogItem {
        CatalogItem::new(ItemId::new(1), "Soup", Price::from_cents(500), "starter").vegetarian(true)
    }

    fn trout() -> CatalogItem {
        CatalogItem::new(ItemId::new(2), "Pan-Seared Trout", Price::from_cents(2450), "main")
    }

    #[test]
    fn test_soup_scenario() {
        let orders = manager();

        orders.add_to_order(&soup()).unwrap();
        assert_eq!(orders.get_order_count(), 1);
        assert_eq!(orders.get_order_total(), Decimal::new(5, 0));

        orders.add_to_order(&soup()).unwrap();
        assert_eq!(orders.get_order_count(), 2);
        assert_eq!(orders.get_order_total(), Decimal::new(10, 0));

        assert!(orders.update_order_quantity(ItemId::new(1), 0).unwrap());
        assert_eq!(orders.get_order_count(), 0);
        assert!(orders.get_orders().is_empty());
    }

    #[test]
    fn test_adding_twice_keeps_one_line() {
        let orders = manager();
        orders.add_to_order(&trout()).unwrap();
        orders.add_to_order(&trout()).unwrap();

        let lines = orders.get_orders();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        // The line keeps the ID it was created with.
        assert_eq!(lines[0].line_id.as_str(), "line-1");
    }

    #[test]
    fn test_new_lines_are_stamped() {
        let orders = manager();
        orders.add_to_order(&soup()).unwrap();
        orders.add_to_order(&trout()).unwrap();

        let lines = orders.get_orders();
        assert_eq!(lines[1].line_id.as_str(), "line-2");
        assert_eq!(
            lines[0].added_at,
            Utc.with_ymd_and_hms(2026, 2, 15, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_non_positive_quantities_remove_the_line() {
        for quantity in [0, -1, -40] {
            let orders = manager();
            orders.add_to_order(&soup()).unwrap();
            orders.add_to_order(&trout()).unwrap();

            assert!(orders.update_order_quantity(ItemId::new(2), quantity).unwrap());
            let lines = orders.get_orders();
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].item_id(), ItemId::new(1));
        }
    }

    #[test]
    fn test_update_quantity_sets_in_place() {
        let orders = manager();
        orders.add_to_order(&soup()).unwrap();
        orders.add_to_order(&trout()).unwrap();

        assert!(orders.update_order_quantity(ItemId::new(1), 4).unwrap());
        let lines = orders.get_orders();
        assert_eq!(lines[0].quantity, 4);
        assert_eq!(lines[0].item_id(), ItemId::new(1));
        assert_eq!(orders.get_order_total(), Decimal::new(4450, 2));
    }

    #[test]
    fn test_update_missing_item_reports_false() {
        let orders = manager();
        assert!(!orders.update_order_quantity(ItemId::new(99), 3).unwrap());
        assert!(!orders.update_order_quantity(ItemId::new(99), 0).unwrap());
    }

    #[test]
    fn test_remove_and_clear() {
        let orders = manager();
        orders.add_to_order(&soup()).unwrap();
        orders.add_to_order(&trout()).unwrap();

        orders.remove_from_order(ItemId::new(1)).unwrap();
        assert_eq!(orders.get_orders().len(), 1);

        orders.clear_orders().unwrap();
        assert!(orders.get_orders().is_empty());
        assert_eq!(orders.get_order_total(), Decimal::ZERO);
    }

    #[test]
    fn test_summary() {
        let orders = manager();
        orders.add_to_order(&soup()).unwrap();
        orders.add_to_order(&soup()).unwrap();
        orders.add_to_order(&trout()).unwrap();

        let summary = orders.get_order_summary();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total, "34.50");
    }

    #[test]
    fn test_empty_summary() {
        let summary = manager().get_order_summary();
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total, "0.00");
    }

    #[test]
    fn test_total_reads_price_strings() {
        let store = DataStore::in_memory();
        store
            .set_raw(
                keys::ORDERS,
                r#"[{"id":5,"name":"Pie","price":"6.25","category":"dessert",
                     "quantity":2,"addedAt":"2026-02-15T18:30:00Z","orderId":"1234"}]"#,
            )
            .unwrap();
        let orders = OrderManager::new(store);
        assert_eq!(orders.get_order_total(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_total_saturates_on_huge_stored_price() {
        let store = DataStore::in_memory();
        store
            .set_raw(
                keys::ORDERS,
                r#"[{"id":5,"name":"Pie","price":"50000000000000000000000000000","category":"dessert",
                     "quantity":2,"addedAt":"2026-02-15T18:30:00Z","orderId":"1234"}]"#,
            )
            .unwrap();
        let orders = OrderManager::new(store);
        assert_eq!(orders.get_order_total(), Decimal::MAX);
        assert_eq!(orders.get_order_count(), 2);

        let summary = orders.get_order_summary();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total, format!("{:.2}", Decimal::MAX));
    }
}
