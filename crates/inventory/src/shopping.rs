//! Shopping list derivation.

use crate::item::InventoryItem;

/// Items below their reorder threshold, in inventory order.
///
/// Membership is strict: an item sitting exactly at `min_quantity` is stocked.
pub fn shopping_list(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| item.is_low()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Unit;
    use chrono::Utc;
    use pantry_core::ItemId;
    use proptest::prelude::*;

    fn item(id: usize, quantity: f64, min_quantity: f64) -> InventoryItem {
        InventoryItem {
            id: ItemId::parse(id.to_string()).unwrap(),
            name: format!("item-{id}"),
            category: "Pantry".to_string(),
            quantity,
            min_quantity,
            unit: Unit::Pack,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn threshold_is_strict() {
        let items = vec![item(1, 2.0, 2.0), item(2, 1.0, 2.0), item(3, 0.0, 1.0), item(4, 3.0, 2.0)];
        let list = shopping_list(&items);
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn empty_inventory_needs_nothing() {
        assert!(shopping_list(&[]).is_empty());
    }

    proptest! {
        /// Property: the list is exactly the items with quantity < min_quantity.
        #[test]
        fn list_is_exactly_the_low_items(
            levels in prop::collection::vec((0u32..10, 0u32..10), 0..40)
        ) {
            let items: Vec<InventoryItem> = levels
                .iter()
                .enumerate()
                .map(|(i, (q, m))| item(i, *q as f64, *m as f64))
                .collect();

            let list = shopping_list(&items);
            let expected = levels.iter().filter(|(q, m)| q < m).count();
            prop_assert_eq!(list.len(), expected);
            prop_assert!(list.iter().all(|i| i.quantity < i.min_quantity));
        }
    }
}
