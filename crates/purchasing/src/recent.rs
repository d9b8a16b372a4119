//! Most recent price reference per item.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::PurchaseRecord;

/// Last known price of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReference {
    pub item_name: String,
    pub store_name: String,
    pub price: f64,
    pub date: NaiveDate,
}

/// Newest purchase per item name, newest first, at most `limit` entries.
///
/// Recency is purchase date, then recording time.
pub fn latest_price_references(history: &[PurchaseRecord], limit: usize) -> Vec<PriceReference> {
    let mut sorted: Vec<&PurchaseRecord> = history.iter().collect();
    sorted.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));

    let mut seen: HashSet<&str> = HashSet::new();
    sorted
        .into_iter()
        .filter(|r| seen.insert(r.item_name.as_str()))
        .take(limit)
        .map(|r| PriceReference {
            item_name: r.item_name.clone(),
            store_name: r.store_name.clone(),
            price: r.price,
            date: r.date,
        })
        .collect()
}
