//! Average unit price per store, across all items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::PurchaseRecord;

/// Mean unit price paid at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAverage {
    pub store_name: String,
    /// Rounded to cents.
    pub average_unit_price: f64,
    pub purchase_count: usize,
}

/// Round to two decimal places for display.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per store, the mean of `price / quantity` over every record, stores in
/// first-seen order.
///
/// Zero-quantity records contribute a unit price of 0.0.
pub fn average_unit_price_by_store(history: &[PurchaseRecord]) -> Vec<StoreAverage> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64, usize)> = Vec::new();

    for record in history {
        let slot = *index.entry(record.store_name.as_str()).or_insert_with(|| {
            totals.push((record.store_name.as_str(), 0.0, 0));
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.1 += record.unit_price();
        entry.2 += 1;
    }

    totals
        .into_iter()
        .map(|(store_name, total, count)| StoreAverage {
            store_name: store_name.to_string(),
            average_unit_price: round_cents(total / count as f64),
            purchase_count: count,
        })
        .collect()
}
