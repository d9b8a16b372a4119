//! Per-item price comparison across stores.
//!
//! Turns the append-only purchase history into one summary per distinct item
//! name. Ordering within the history is the order records were appended, not
//! their purchase date: "latest" and "first/last" below all refer to
//! insertion order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pantry_core::DomainError;

use crate::record::PurchaseRecord;

/// Prices paid for one item at one store, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePrices {
    pub store_name: String,
    pub prices: Vec<f64>,
    /// Last-inserted price at this store.
    pub latest_price: f64,
}

/// Comparison summary for a single item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub item_name: String,
    /// Minimum over every recorded price.
    pub lowest_price: f64,
    /// Store whose *latest* price is lowest.
    pub lowest_store: String,
    /// Maximum over every recorded price.
    pub highest_price: f64,
    /// Store whose *latest* price is highest.
    pub highest_store: String,
    /// Mean over every individual purchase price.
    pub average_price: f64,
    /// Per-store series, stores in first-seen order.
    pub stores: Vec<StorePrices>,
    /// Percent change from the first to the last recorded price.
    ///
    /// 0.0 when the first price is zero.
    pub price_change: f64,
    pub purchase_count: usize,
}

impl PriceComparison {
    /// Spread between the highest and lowest recorded price.
    pub fn savings(&self) -> f64 {
        self.highest_price - self.lowest_price
    }

    pub fn store(&self, store_name: &str) -> Option<&StorePrices> {
        self.stores.iter().find(|s| s.store_name == store_name)
    }

    pub fn trend(&self, threshold_percent: f64) -> PriceTrend {
        PriceTrend::classify(self.price_change, threshold_percent)
    }
}

/// Direction of an item's price over its history.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

impl PriceTrend {
    /// Changes strictly beyond `±threshold_percent` count as a trend.
    pub fn classify(price_change: f64, threshold_percent: f64) -> Self {
        if price_change > threshold_percent {
            PriceTrend::Rising
        } else if price_change < -threshold_percent {
            PriceTrend::Falling
        } else {
            PriceTrend::Stable
        }
    }
}

/// Ordering for the comparison list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonSort {
    /// Ascending lowest price.
    #[default]
    Lowest,
    /// Descending highest price.
    Highest,
    /// Descending spread between highest and lowest price.
    Savings,
}

impl core::str::FromStr for ComparisonSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowest" => Ok(ComparisonSort::Lowest),
            "highest" => Ok(ComparisonSort::Highest),
            "savings" => Ok(ComparisonSort::Savings),
            other => Err(DomainError::validation(format!(
                "unknown comparison sort: {other}"
            ))),
        }
    }
}

/// Running aggregate for one item while scanning the history.
struct ItemAccumulator<'a> {
    item_name: &'a str,
    stores: Vec<StorePrices>,
    first_price: f64,
    last_price: f64,
    lowest: f64,
    highest: f64,
    sum: f64,
    count: usize,
}

impl<'a> ItemAccumulator<'a> {
    fn new(record: &'a PurchaseRecord) -> Self {
        Self {
            item_name: &record.item_name,
            stores: Vec::new(),
            first_price: record.price,
            last_price: record.price,
            lowest: record.price,
            highest: record.price,
            sum: 0.0,
            count: 0,
        }
    }

    fn push(&mut self, record: &PurchaseRecord) {
        let price = record.price;

        match self
            .stores
            .iter_mut()
            .find(|s| s.store_name == record.store_name)
        {
            Some(series) => {
                series.prices.push(price);
                series.latest_price = price;
            }
            None => self.stores.push(StorePrices {
                store_name: record.store_name.clone(),
                prices: vec![price],
                latest_price: price,
            }),
        }

        self.last_price = price;
        self.lowest = self.lowest.min(price);
        self.highest = self.highest.max(price);
        self.sum += price;
        self.count += 1;
    }

    fn finish(self) -> PriceComparison {
        // Floating-point summation can land a hair outside [lowest, highest].
        let average_price = (self.sum / self.count as f64)
            .max(self.lowest)
            .min(self.highest);

        let price_change = if self.first_price == 0.0 {
            0.0
        } else {
            (self.last_price - self.first_price) / self.first_price * 100.0
        };

        // Strict comparisons: ties go to the first-seen store.
        let mut lowest_store: Option<&StorePrices> = None;
        let mut highest_store: Option<&StorePrices> = None;
        for series in &self.stores {
            if lowest_store.is_none_or(|s| series.latest_price < s.latest_price) {
                lowest_store = Some(series);
            }
            if highest_store.is_none_or(|s| series.latest_price > s.latest_price) {
                highest_store = Some(series);
            }
        }
        let lowest_store = lowest_store.map(|s| s.store_name.clone()).unwrap_or_default();
        let highest_store = highest_store.map(|s| s.store_name.clone()).unwrap_or_default();

        PriceComparison {
            item_name: self.item_name.to_string(),
            lowest_price: self.lowest,
            lowest_store,
            highest_price: self.highest,
            highest_store,
            average_price,
            stores: self.stores,
            price_change,
            purchase_count: self.count,
        }
    }
}

/// Summaries for every item in `history`, in first-seen item order.
///
/// An empty history yields an empty list.
pub fn price_comparisons(history: &[PurchaseRecord]) -> Vec<PriceComparison> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut items: Vec<ItemAccumulator<'_>> = Vec::new();

    for record in history {
        let slot = *index.entry(record.item_name.as_str()).or_insert_with(|| {
            items.push(ItemAccumulator::new(record));
            items.len() - 1
        });
        items[slot].push(record);
    }

    items.into_iter().map(ItemAccumulator::finish).collect()
}

/// Stable in-place sort of comparison summaries.
pub fn sort_comparisons(comparisons: &mut [PriceComparison], sort: ComparisonSort) {
    match sort {
        ComparisonSort::Lowest => {
            comparisons.sort_by(|a, b| a.lowest_price.total_cmp(&b.lowest_price))
        }
        ComparisonSort::Highest => {
            comparisons.sort_by(|a, b| b.highest_price.total_cmp(&a.highest_price))
        }
        ComparisonSort::Savings => comparisons.sort_by(|a, b| b.savings().total_cmp(&a.savings())),
    }
}

/// Summaries for every item in `history`, ordered by `sort`.
pub fn compare_prices(history: &[PurchaseRecord], sort: ComparisonSort) -> Vec<PriceComparison> {
    let mut comparisons = price_comparisons(history);
    sort_comparisons(&mut comparisons, sort);
    comparisons
}

/// Summaries whose item name contains `query` (case-insensitive).
pub fn filter_comparisons<'a>(
    comparisons: &'a [PriceComparison],
    query: &str,
) -> Vec<&'a PriceComparison> {
    let needle = query.to_lowercase();
    comparisons
        .iter()
        .filter(|c| c.item_name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_history_yields_nothing() {
        assert!(price_comparisons(&[]).is_empty());
        assert!(compare_prices(&[], ComparisonSort::Savings).is_empty());
    }

    #[test]
    fn rice_across_two_stores() {
        let history = vec![
            record("Rice", "StoreA", 10.0),
            record("Rice", "StoreB", 8.0),
            record("Rice", "StoreA", 9.0),
        ];

        let comparisons = price_comparisons(&history);
        assert_eq!(comparisons.len(), 1);

        let rice = &comparisons[0];
        assert_eq!(rice.item_name, "Rice");
        assert_eq!(rice.lowest_price, 8.0);
        assert_eq!(rice.lowest_store, "StoreB");
        assert_eq!(rice.highest_price, 10.0);
        assert_eq!(rice.highest_store, "StoreA");
        assert!(approx(rice.average_price, 9.0));
        assert!(approx(rice.price_change, -10.0));
        assert_eq!(rice.purchase_count, 3);

        let store_a = rice.store("StoreA").unwrap();
        assert_eq!(store_a.prices, vec![10.0, 9.0]);
        assert_eq!(store_a.latest_price, 9.0);
        assert!(rice.store("StoreC").is_none());
    }

    #[test]
    fn store_extremes_use_latest_prices_not_global_ones() {
        // StoreA once charged 3.0 but its latest price is 7.0.
        let history = vec![
            record("Milk", "StoreA", 3.0),
            record("Milk", "StoreB", 5.0),
            record("Milk", "StoreA", 7.0),
        ];

        let milk = &price_comparisons(&history)[0];
        assert_eq!(milk.lowest_price, 3.0);
        assert_eq!(milk.lowest_store, "StoreB");
        assert_eq!(milk.highest_store, "StoreA");
    }

    #[test]
    fn ties_go_to_first_seen_store() {
        let history = vec![
            record("Eggs", "Corner", 4.0),
            record("Eggs", "Market", 4.0),
        ];

        let eggs = &price_comparisons(&history)[0];
        assert_eq!(eggs.lowest_store, "Corner");
        assert_eq!(eggs.highest_store, "Corner");
    }

    #[test]
    fn price_change_follows_insertion_order_across_stores() {
        let history = vec![
            record("Coffee", "A", 18.0),
            record("Coffee", "B", 16.5),
            record("Coffee", "A", 19.8),
        ];

        let coffee = &price_comparisons(&history)[0];
        assert!(approx(coffee.price_change, 10.0));
        assert_eq!(coffee.trend(5.0), PriceTrend::Rising);
    }

    #[test]
    fn zero_first_price_reports_no_change() {
        let history = vec![record("Sample", "Fair", 0.0), record("Sample", "Fair", 2.0)];
        assert_eq!(price_comparisons(&history)[0].price_change, 0.0);
    }

    #[test]
    fn sorting_orders() {
        let history = vec![
            record("Rice", "A", 10.0),
            record("Rice", "B", 8.0),
            record("Milk", "A", 4.0),
            record("Milk", "B", 6.5),
            record("Coffee", "A", 18.0),
        ];

        let names = |cs: &[PriceComparison]| -> Vec<String> {
            cs.iter().map(|c| c.item_name.clone()).collect()
        };

        assert_eq!(
            names(&compare_prices(&history, ComparisonSort::Lowest)),
            vec!["Milk", "Rice", "Coffee"]
        );
        assert_eq!(
            names(&compare_prices(&history, ComparisonSort::Highest)),
            vec!["Coffee", "Rice", "Milk"]
        );
        assert_eq!(
            names(&compare_prices(&history, ComparisonSort::Savings)),
            vec!["Milk", "Rice", "Coffee"]
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let history = vec![record("Leite Integral", "A", 4.59), record("Café", "A", 18.0)];
        let comparisons = price_comparisons(&history);

        let hits = filter_comparisons(&comparisons, "LEITE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_name, "Leite Integral");
        assert_eq!(filter_comparisons(&comparisons, "").len(), 2);
    }

    #[test]
    fn trend_thresholds_are_exclusive() {
        assert_eq!(PriceTrend::classify(5.0, 5.0), PriceTrend::Stable);
        assert_eq!(PriceTrend::classify(5.1, 5.0), PriceTrend::Rising);
        assert_eq!(PriceTrend::classify(-5.1, 5.0), PriceTrend::Falling);
    }

    #[test]
    fn sort_option_parses() {
        assert_eq!("savings".parse::<ComparisonSort>().unwrap(), ComparisonSort::Savings);
        assert!("cheapest".parse::<ComparisonSort>().is_err());
    }

    fn arb_history() -> impl Strategy<Value = Vec<PurchaseRecord>> {
        prop::collection::vec((0usize..4, 0usize..3, 1u32..100_000), 0..40).prop_map(|rows| {
            rows.into_iter()
                .map(|(item, store, cents)| {
                    record(
                        &format!("item-{item}"),
                        &format!("store-{store}"),
                        cents as f64 / 100.0,
                    )
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: lowest <= average <= highest for every item.
        #[test]
        fn average_lies_between_extremes(history in arb_history()) {
            for c in price_comparisons(&history) {
                prop_assert!(c.lowest_price <= c.average_price);
                prop_assert!(c.average_price <= c.highest_price);
            }
        }

        /// Property: sorting by savings is a permutation of the unsorted set.
        #[test]
        fn savings_sort_keeps_the_same_items(history in arb_history()) {
            let mut unsorted: Vec<String> = price_comparisons(&history)
                .into_iter()
                .map(|c| c.item_name)
                .collect();
            let mut sorted: Vec<String> = compare_prices(&history, ComparisonSort::Savings)
                .into_iter()
                .map(|c| c.item_name)
                .collect();

            unsorted.sort();
            sorted.sort();
            prop_assert_eq!(unsorted, sorted);
        }

        /// Property: every purchase is counted exactly once.
        #[test]
        fn purchase_counts_cover_history(history in arb_history()) {
            let total: usize = price_comparisons(&history)
                .iter()
                .map(|c| c.purchase_count)
                .sum();
            prop_assert_eq!(total, history.len());
        }
    }
}
