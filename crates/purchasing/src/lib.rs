//! Purchasing domain module: purchase history and price analytics.
//!
//! Every function here is a pure computation over an already-loaded, append-only
//! purchase history (no IO, no storage).

pub mod comparison;
pub mod recent;
pub mod record;
pub mod store_average;

pub use comparison::{
    ComparisonSort, PriceComparison, PriceTrend, StorePrices, compare_prices, filter_comparisons,
    price_comparisons, sort_comparisons,
};
pub use recent::{PriceReference, latest_price_references};
pub use record::PurchaseRecord;
pub use store_average::{StoreAverage, average_unit_price_by_store, round_cents};
