use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{Entity, ItemId, PurchaseId};

/// One price paid for a quantity of an item at a store.
///
/// Records are immutable and the history is append-only. `item_id` is a weak
/// reference: the item may have been deleted since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    pub item_id: ItemId,
    /// Item name at the time of purchase.
    pub item_name: String,
    pub store_name: String,
    pub price: f64,
    pub quantity: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl PurchaseRecord {
    /// Price per unit of quantity. Zero-quantity records yield 0.0.
    pub fn unit_price(&self) -> f64 {
        if self.quantity == 0.0 {
            return 0.0;
        }
        self.price / self.quantity
    }
}

impl Entity for PurchaseRecord {
    type Id = PurchaseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
