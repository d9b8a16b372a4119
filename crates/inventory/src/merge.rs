//! Merge-on-add policy.
//!
//! Adding an item whose name (case-insensitive) and unit match an existing
//! stock line tops up that line instead of creating a duplicate.

use pantry_core::ItemId;

use crate::item::{InventoryItem, ItemDraft, Unit};

/// Outcome of adding a draft to the current inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum AddPlan {
    /// Increment an existing line.
    Merge { item_id: ItemId, new_quantity: f64 },
    /// No matching line; create a new item.
    Create,
}

/// Existing item on the same stock line as `name`/`unit`, if any.
pub fn find_stock_line<'a>(
    items: &'a [InventoryItem],
    name: &str,
    unit: Unit,
) -> Option<&'a InventoryItem> {
    items.iter().find(|item| item.is_same_line(name, unit))
}

/// Decide how adding `draft` lands in `items`.
pub fn plan_add(items: &[InventoryItem], draft: &ItemDraft) -> AddPlan {
    match find_stock_line(items, &draft.name, draft.unit) {
        Some(existing) => AddPlan::Merge {
            item_id: existing.id.clone(),
            new_quantity: existing.quantity + draft.quantity,
        },
        None => AddPlan::Create,
    }
}
