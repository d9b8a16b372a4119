use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, Entity, ItemId};

/// Unit an item is stocked in.
///
/// Serialized with the short codes used by the storage layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "un")]
    Unit,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "pct")]
    Pack,
}

impl Unit {
    pub fn code(self) -> &'static str {
        match self {
            Unit::Unit => "un",
            Unit::Kg => "kg",
            Unit::Liter => "l",
            Unit::Pack => "pct",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl core::str::FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "un" | "unit" => Ok(Unit::Unit),
            "kg" => Ok(Unit::Kg),
            "l" | "liter" | "litre" => Ok(Unit::Liter),
            "pct" | "pack" => Ok(Unit::Pack),
            other => Err(DomainError::validation(format!("unknown unit: {other}"))),
        }
    }
}

/// Editable fields of an item, as entered on the add/edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub min_quantity: f64,
    pub unit: Unit,
}

impl ItemDraft {
    /// Reject drafts that would break item invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !(self.quantity.is_finite() && self.quantity >= 0.0) {
            return Err(DomainError::validation("quantity must be a non-negative number"));
        }
        if !(self.min_quantity.is_finite() && self.min_quantity >= 0.0) {
            return Err(DomainError::validation(
                "min_quantity must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// A stocked household item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    /// Reorder threshold.
    pub min_quantity: f64,
    pub unit: Unit,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    pub fn from_draft(id: ItemId, draft: ItemDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity.max(0.0),
            min_quantity: draft.min_quantity,
            unit: draft.unit,
            last_updated: now,
        }
    }

    /// Below the reorder threshold (strict).
    pub fn is_low(&self) -> bool {
        self.quantity < self.min_quantity
    }

    /// How much is missing to reach the reorder threshold.
    pub fn shortfall(&self) -> f64 {
        (self.min_quantity - self.quantity).max(0.0)
    }

    /// Quantity after applying `delta`, clamped at zero.
    pub fn adjusted_quantity(&self, delta: f64) -> f64 {
        (self.quantity + delta).max(0.0)
    }

    /// Same stock line: case-insensitive name and identical unit.
    pub fn is_same_line(&self, name: &str, unit: Unit) -> bool {
        self.unit == unit && self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match against name or category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    pub fn apply_draft(&mut self, draft: ItemDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.category = draft.category;
        self.quantity = draft.quantity.max(0.0);
        self.min_quantity = draft.min_quantity;
        self.unit = draft.unit;
        self.last_updated = now;
    }

    pub fn set_quantity(&mut self, quantity: f64, now: DateTime<Utc>) {
        self.quantity = quantity.max(0.0);
        self.last_updated = now;
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
