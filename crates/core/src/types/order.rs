//! Order lines and order summaries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use super::id::{ItemId, LineId};

/// A catalog item plus a quantity: one pending selection in the order list.
///
/// The item's fields are flattened into the line, matching the persisted
/// shape `{ ...item, quantity, addedAt, orderId }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
    #[serde(rename = "orderId")]
    pub line_id: LineId,
}

impl OrderLine {
    /// Start a new line with quantity 1.
    #[must_use]
    pub fn new(item: CatalogItem, added_at: DateTime<Utc>, line_id: LineId) -> Self {
        Self {
            item,
            quantity: 1,
            added_at,
            line_id,
        }
    }

    /// The item identifier this line holds.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        self.item.id
    }

    /// Unit price multiplied by quantity, or `None` if the product
    /// overflows `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.item.price.amount().checked_mul(Decimal::from(self.quantity))
    }
}

/// Snapshot of the order list for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<OrderLine>,
    /// Number of distinct lines.
    pub item_count: usize,
    /// Sum of all line quantities.
    pub total_quantity: u32,
    /// Order total formatted with two decimals, e.g. `"17.50"`.
    pub total: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::price::Price;

    fn soup() -> CatalogItem {
        CatalogItem::new(ItemId::new(1), "Soup", Price::from_cents(500), "starter")
    }

    #[test]
    fn test_line_total() {
        let mut line = OrderLine::new(soup(), Utc::now(), LineId::new("a"));
        line.quantity = 3;
        assert_eq!(line.line_total(), Some(Decimal::new(15, 0)));
    }

    #[test]
    fn test_line_total_overflow() {
        let item = CatalogItem::new(
            ItemId::new(5),
            "Pie",
            "50000000000000000000000000000".parse::<Price>().unwrap(),
            "dessert",
        );
        let mut line = OrderLine::new(item, Utc::now(), LineId::new("a"));
        line.quantity = 2;
        assert_eq!(line.line_total(), None);
    }

    #[test]
    fn test_persisted_shape_is_flat() {
        let line = OrderLine::new(soup(), Utc::now(), LineId::new("abc"));
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Soup");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["orderId"], "abc");
        assert!(value.get("addedAt").is_some());
        assert!(value.get("item").is_none());

        let back: OrderLine = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
    }
}
