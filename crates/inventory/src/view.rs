//! Filtered and sorted inventory listing.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use pantry_core::DomainError;

use crate::collation::locale_compare;
use crate::item::InventoryItem;

/// Sort key for the inventory list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventorySort {
    #[default]
    Name,
    Category,
    QuantityAsc,
    QuantityDesc,
    /// Most recently updated first.
    LastUpdated,
}

impl InventorySort {
    fn compare(self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            InventorySort::Name => locale_compare(&a.name, &b.name),
            InventorySort::Category => locale_compare(&a.category, &b.category),
            InventorySort::QuantityAsc => a.quantity.total_cmp(&b.quantity),
            InventorySort::QuantityDesc => b.quantity.total_cmp(&a.quantity),
            InventorySort::LastUpdated => b.last_updated.cmp(&a.last_updated),
        }
    }
}

impl core::str::FromStr for InventorySort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(InventorySort::Name),
            "category" => Ok(InventorySort::Category),
            "quantityAsc" => Ok(InventorySort::QuantityAsc),
            "quantityDesc" => Ok(InventorySort::QuantityDesc),
            "lastUpdated" => Ok(InventorySort::LastUpdated),
            other => Err(DomainError::validation(format!("unknown sort option: {other}"))),
        }
    }
}

/// Items whose name or category contains `query` (case-insensitive), stably
/// ordered by `sort`.
///
/// An empty query keeps every item.
pub fn filter_and_sort<'a>(
    items: &'a [InventoryItem],
    query: &str,
    sort: InventorySort,
) -> Vec<&'a InventoryItem> {
    let needle = query.to_lowercase();
    let mut view: Vec<&InventoryItem> = items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect();

    // `sort_by` is stable: ties keep their input order.
    view.sort_by(|a, b| sort.compare(a, b));
    view
}
