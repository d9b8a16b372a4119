//! Household domain module.
//!
//! Ties inventory and purchasing together behind one aggregate: commands are
//! decided by `handle`, state evolves through `apply`, and every user-visible
//! change lands in a capped activity log.

pub mod activity;
pub mod catalog;
pub mod config;
pub mod household;

pub use activity::{ActivityAction, ActivityEntry, ActivityLog};
pub use catalog::{DEFAULT_CATEGORIES, KnownNames};
pub use config::HouseholdConfig;
pub use household::{
    AdjustQuantity, DeleteItem, EditItem, Household, HouseholdCommand, HouseholdEvent,
    HouseholdSnapshot, ItemDeleted, ItemEdited, ItemRestocked, NameChange, PurchaseDraft,
    QuantityAdjusted, SaveItem,
};
