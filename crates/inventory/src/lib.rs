//! Inventory domain module.
//!
//! Stock items plus the pure derivations the household views are built from:
//! the filtered/sorted listing, the shopping list and the merge-on-add lookup.
//! No IO, no storage.

pub mod collation;
pub mod item;
pub mod merge;
pub mod shopping;
pub mod view;

pub use collation::locale_compare;
pub use item::{InventoryItem, ItemDraft, Unit};
pub use merge::{AddPlan, find_stock_line, plan_add};
pub use shopping::shopping_list;
pub use view::{InventorySort, filter_and_sort};
