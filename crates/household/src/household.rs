use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::entity::{find_by_id, position_of};
use pantry_core::{
    ActivityId, Aggregate, AggregateRoot, DomainError, DomainResult, Event, HouseholdId, ItemId,
    PurchaseId,
};
use pantry_inventory::{
    AddPlan, InventoryItem, InventorySort, ItemDraft, Unit, filter_and_sort, plan_add,
    shopping_list,
};
use pantry_purchasing::{
    ComparisonSort, PriceComparison, PriceReference, PriceTrend, PurchaseRecord, StoreAverage,
    average_unit_price_by_store, compare_prices, latest_price_references,
};

use crate::activity::{ActivityAction, ActivityEntry, ActivityLog};
use crate::catalog::{DEFAULT_CATEGORIES, KnownNames};
use crate::config::HouseholdConfig;

/// Everything the persistence collaborator loads for one household.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub history: Vec<PurchaseRecord>,
    #[serde(default)]
    pub categories: KnownNames,
    #[serde(default)]
    pub stores: KnownNames,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    /// Activity entries ever recorded, including dropped or cleared ones.
    #[serde(default)]
    pub activity_recorded: u64,
}

/// Aggregate root: Household.
///
/// Holds the active inventory, the append-only purchase history, the known
/// categories/stores and the activity log. All changes go through
/// [`Aggregate::handle`] / [`Aggregate::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    id: HouseholdId,
    config: HouseholdConfig,
    items: Vec<InventoryItem>,
    history: Vec<PurchaseRecord>,
    categories: KnownNames,
    stores: KnownNames,
    activity: ActivityLog,
    version: u64,
}

impl Household {
    /// Fresh household with the default categories.
    pub fn new(id: HouseholdId, config: HouseholdConfig) -> Self {
        Self::from_snapshot(id, config, HouseholdSnapshot::default())
    }

    /// Rehydrate from loaded collections.
    pub fn from_snapshot(id: HouseholdId, config: HouseholdConfig, snapshot: HouseholdSnapshot) -> Self {
        let categories = if snapshot.categories.is_empty() {
            DEFAULT_CATEGORIES.into_iter().collect()
        } else {
            snapshot.categories
        };

        Self {
            activity: ActivityLog::from_entries(
                config.activity_capacity,
                snapshot.activity_recorded,
                snapshot.activity,
            ),
            id,
            config,
            items: snapshot.items,
            history: snapshot.history,
            categories,
            stores: snapshot.stores,
            version: 0,
        }
    }

    pub fn snapshot(&self) -> HouseholdSnapshot {
        HouseholdSnapshot {
            items: self.items.clone(),
            history: self.history.clone(),
            categories: self.categories.clone(),
            stores: self.stores.clone(),
            activity: self.activity.iter().cloned().collect(),
            activity_recorded: self.activity.total_recorded(),
        }
    }

    pub fn config(&self) -> &HouseholdConfig {
        &self.config
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&InventoryItem> {
        find_by_id(&self.items, item_id)
    }

    pub fn history(&self) -> &[PurchaseRecord] {
        &self.history
    }

    pub fn categories(&self) -> &KnownNames {
        &self.categories
    }

    pub fn stores(&self) -> &KnownNames {
        &self.stores
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn unread_activity(&self) -> usize {
        self.activity.unread_count()
    }

    pub fn inventory_view(&self, query: &str, sort: InventorySort) -> Vec<&InventoryItem> {
        filter_and_sort(&self.items, query, sort)
    }

    pub fn shopping_list(&self) -> Vec<&InventoryItem> {
        shopping_list(&self.items)
    }

    pub fn price_comparisons(&self, sort: ComparisonSort) -> Vec<PriceComparison> {
        compare_prices(&self.history, sort)
    }

    pub fn price_trend(&self, comparison: &PriceComparison) -> PriceTrend {
        comparison.trend(self.config.trend_threshold)
    }

    pub fn store_averages(&self) -> Vec<StoreAverage> {
        average_unit_price_by_store(&self.history)
    }

    pub fn recent_references(&self) -> Vec<PriceReference> {
        latest_price_references(&self.history, self.config.recent_references)
    }

    /// Handle and apply a command.
    ///
    /// A rejected command leaves state untouched apart from an `error` entry in
    /// the activity log; the error is still returned to the caller.
    pub fn execute(&mut self, command: HouseholdCommand) -> DomainResult<Vec<HouseholdEvent>> {
        match self.handle(&command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        household = %self.id,
                        event_type = event.event_type(),
                        "applying household event"
                    );
                    self.apply(event);
                }
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(
                    household = %self.id,
                    command = command.name(),
                    error = %err,
                    "household command rejected"
                );
                self.log(
                    ActivityAction::Error,
                    format!("Failed to {}", command.name()),
                    Some(err.to_string()),
                    command.occurred_at(),
                );
                Err(err)
            }
        }
    }

    fn log(
        &mut self,
        action: ActivityAction,
        message: String,
        details: Option<String>,
        at: DateTime<Utc>,
    ) {
        let id = ActivityId::derived(&self.id, self.activity.total_recorded() + 1);
        self.activity.push(ActivityEntry {
            id,
            action,
            message,
            details,
            timestamp: at,
            is_read: false,
        });
    }
}

impl AggregateRoot for Household {
    type Id = HouseholdId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Optional purchase captured together with an item on the add/edit form.
///
/// A blank store name means no purchase was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub purchase_id: PurchaseId,
    pub store_name: String,
    /// Total price paid; no purchase record is written without one.
    pub price: Option<f64>,
    /// Defaults to the day the command occurred.
    pub date: Option<NaiveDate>,
}

/// Command: SaveItem (add new stock, merging into an existing line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveItem {
    /// Id to use if a new item is created.
    pub item_id: ItemId,
    pub draft: ItemDraft,
    pub purchase: Option<PurchaseDraft>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: EditItem (overwrite fields, optionally recording a purchase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditItem {
    pub item_id: ItemId,
    pub draft: ItemDraft,
    #[serde(default)]
    pub purchase: Option<PurchaseDraft>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustQuantity (consume or restock by a delta).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustQuantity {
    pub item_id: ItemId,
    pub delta: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Command payload for category/store registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChange {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HouseholdCommand {
    SaveItem(SaveItem),
    EditItem(EditItem),
    AdjustQuantity(AdjustQuantity),
    DeleteItem(DeleteItem),
    AddCategory(NameChange),
    RemoveCategory(NameChange),
    AddStore(NameChange),
    MarkActivityRead { occurred_at: DateTime<Utc> },
    ClearActivity { occurred_at: DateTime<Utc> },
}

impl HouseholdCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HouseholdCommand::SaveItem(_) => "save item",
            HouseholdCommand::EditItem(_) => "edit item",
            HouseholdCommand::AdjustQuantity(_) => "adjust quantity",
            HouseholdCommand::DeleteItem(_) => "delete item",
            HouseholdCommand::AddCategory(_) => "add category",
            HouseholdCommand::RemoveCategory(_) => "remove category",
            HouseholdCommand::AddStore(_) => "add store",
            HouseholdCommand::MarkActivityRead { .. } => "mark activity read",
            HouseholdCommand::ClearActivity { .. } => "clear activity",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            HouseholdCommand::SaveItem(c) => c.occurred_at,
            HouseholdCommand::EditItem(c) => c.occurred_at,
            HouseholdCommand::AdjustQuantity(c) => c.occurred_at,
            HouseholdCommand::DeleteItem(c) => c.occurred_at,
            HouseholdCommand::AddCategory(c)
            | HouseholdCommand::RemoveCategory(c)
            | HouseholdCommand::AddStore(c) => c.occurred_at,
            HouseholdCommand::MarkActivityRead { occurred_at }
            | HouseholdCommand::ClearActivity { occurred_at } => *occurred_at,
        }
    }
}

/// Event: ItemRestocked (merge-on-add topped up an existing line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRestocked {
    pub item_id: ItemId,
    pub name: String,
    pub unit: Unit,
    pub added: f64,
    pub new_quantity: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemEdited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEdited {
    pub item_id: ItemId,
    pub draft: ItemDraft,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityAdjusted. `new_quantity` is already clamped at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub item_id: ItemId,
    pub name: String,
    pub unit: Unit,
    pub delta: f64,
    pub new_quantity: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDeleted. Purchase history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub item_id: ItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HouseholdEvent {
    ItemCreated(InventoryItem),
    ItemRestocked(ItemRestocked),
    ItemEdited(ItemEdited),
    QuantityAdjusted(QuantityAdjusted),
    ItemDeleted(ItemDeleted),
    StoreAdded(NameChange),
    PurchaseRecorded(PurchaseRecord),
    CategoryAdded(NameChange),
    CategoryRemoved(NameChange),
    ActivityMarkedRead { occurred_at: DateTime<Utc> },
    ActivityCleared { occurred_at: DateTime<Utc> },
}

impl Event for HouseholdEvent {
    fn event_type(&self) -> &'static str {
        match self {
            HouseholdEvent::ItemCreated(_) => "household.item.created",
            HouseholdEvent::ItemRestocked(_) => "household.item.restocked",
            HouseholdEvent::ItemEdited(_) => "household.item.edited",
            HouseholdEvent::QuantityAdjusted(_) => "household.item.quantity_adjusted",
            HouseholdEvent::ItemDeleted(_) => "household.item.deleted",
            HouseholdEvent::StoreAdded(_) => "household.store.added",
            HouseholdEvent::PurchaseRecorded(_) => "household.purchase.recorded",
            HouseholdEvent::CategoryAdded(_) => "household.category.added",
            HouseholdEvent::CategoryRemoved(_) => "household.category.removed",
            HouseholdEvent::ActivityMarkedRead { .. } => "household.activity.marked_read",
            HouseholdEvent::ActivityCleared { .. } => "household.activity.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            HouseholdEvent::ItemCreated(item) => item.last_updated,
            HouseholdEvent::ItemRestocked(e) => e.occurred_at,
            HouseholdEvent::ItemEdited(e) => e.occurred_at,
            HouseholdEvent::QuantityAdjusted(e) => e.occurred_at,
            HouseholdEvent::ItemDeleted(e) => e.occurred_at,
            HouseholdEvent::PurchaseRecorded(r) => r.created_at,
            HouseholdEvent::StoreAdded(e)
            | HouseholdEvent::CategoryAdded(e)
            | HouseholdEvent::CategoryRemoved(e) => e.occurred_at,
            HouseholdEvent::ActivityMarkedRead { occurred_at }
            | HouseholdEvent::ActivityCleared { occurred_at } => *occurred_at,
        }
    }
}

impl HouseholdEvent {
    /// Activity log line describing this event, if it is user-visible.
    fn activity(&self) -> Option<(ActivityAction, String, Option<String>)> {
        match self {
            HouseholdEvent::ItemCreated(item) => Some((
                ActivityAction::Create,
                format!("New item added: {}", item.name),
                Some(format!("Stock: {}", item.quantity)),
            )),
            HouseholdEvent::ItemRestocked(e) => Some((
                ActivityAction::Restock,
                format!("Added to stock: {}", e.name),
                Some(format!("+{} {}", e.added, e.unit)),
            )),
            HouseholdEvent::ItemEdited(e) => Some((
                ActivityAction::Update,
                format!("Item updated: {}", e.draft.name),
                Some("Details changed".to_string()),
            )),
            HouseholdEvent::QuantityAdjusted(e) if e.delta > 0.0 => Some((
                ActivityAction::Restock,
                format!("Stock added: {}", e.name),
                Some(format!("+{} {}", e.delta, e.unit)),
            )),
            HouseholdEvent::QuantityAdjusted(e) => Some((
                ActivityAction::Consume,
                format!("Item consumed: {}", e.name),
                Some(format!("{} {}", e.delta, e.unit)),
            )),
            HouseholdEvent::ItemDeleted(e) => Some((
                ActivityAction::Delete,
                format!("Item removed: {}", e.name),
                Some("Removed from stock".to_string()),
            )),
            HouseholdEvent::StoreAdded(e) => Some((
                ActivityAction::Create,
                format!("New store saved: {}", e.name),
                None,
            )),
            HouseholdEvent::PurchaseRecorded(r) => Some((
                ActivityAction::Purchase,
                format!("Purchase recorded: {}", r.item_name),
                Some(format!("{:.2} at {}", r.price, r.store_name)),
            )),
            HouseholdEvent::CategoryAdded(e) => Some((
                ActivityAction::Create,
                format!("New category: {}", e.name),
                None,
            )),
            HouseholdEvent::CategoryRemoved(e) => Some((
                ActivityAction::Delete,
                format!("Category removed: {}", e.name),
                None,
            )),
            HouseholdEvent::ActivityMarkedRead { .. } | HouseholdEvent::ActivityCleared { .. } => {
                None
            }
        }
    }
}

impl Aggregate for Household {
    type Command = HouseholdCommand;
    type Event = HouseholdEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            HouseholdEvent::ItemCreated(item) => {
                self.items.push(item.clone());
            }
            HouseholdEvent::ItemRestocked(e) => {
                if let Some(idx) = position_of(&self.items, &e.item_id) {
                    self.items[idx].set_quantity(e.new_quantity, e.occurred_at);
                }
            }
            HouseholdEvent::ItemEdited(e) => {
                if let Some(idx) = position_of(&self.items, &e.item_id) {
                    self.items[idx].apply_draft(e.draft.clone(), e.occurred_at);
                }
            }
            HouseholdEvent::QuantityAdjusted(e) => {
                if let Some(idx) = position_of(&self.items, &e.item_id) {
                    self.items[idx].set_quantity(e.new_quantity, e.occurred_at);
                }
            }
            HouseholdEvent::ItemDeleted(e) => {
                self.items.retain(|item| item.id != e.item_id);
            }
            HouseholdEvent::StoreAdded(e) => {
                self.stores.insert(e.name.clone());
            }
            HouseholdEvent::PurchaseRecorded(record) => {
                self.history.push(record.clone());
            }
            HouseholdEvent::CategoryAdded(e) => {
                self.categories.insert(e.name.clone());
            }
            HouseholdEvent::CategoryRemoved(e) => {
                self.categories.remove(&e.name);
            }
            HouseholdEvent::ActivityMarkedRead { .. } => {
                self.activity.mark_all_read();
            }
            HouseholdEvent::ActivityCleared { .. } => {
                self.activity.clear();
            }
        }

        if let Some((action, message, details)) = event.activity() {
            self.log(action, message, details, event.occurred_at());
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            HouseholdCommand::SaveItem(cmd) => self.handle_save(cmd),
            HouseholdCommand::EditItem(cmd) => self.handle_edit(cmd),
            HouseholdCommand::AdjustQuantity(cmd) => self.handle_adjust(cmd),
            HouseholdCommand::DeleteItem(cmd) => self.handle_delete(cmd),
            HouseholdCommand::AddCategory(cmd) => self.handle_add_category(cmd),
            HouseholdCommand::RemoveCategory(cmd) => self.handle_remove_category(cmd),
            HouseholdCommand::AddStore(cmd) => Ok(self.store_registration(&cmd.name, cmd.occurred_at)?
                .into_iter()
                .collect()),
            HouseholdCommand::MarkActivityRead { occurred_at } => {
                if self.activity.unread_count() == 0 {
                    return Ok(Vec::new());
                }
                Ok(vec![HouseholdEvent::ActivityMarkedRead {
                    occurred_at: *occurred_at,
                }])
            }
            HouseholdCommand::ClearActivity { occurred_at } => {
                if self.activity.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(vec![HouseholdEvent::ActivityCleared {
                    occurred_at: *occurred_at,
                }])
            }
        }
    }
}

impl Household {
    fn existing_item(&self, item_id: &ItemId) -> DomainResult<&InventoryItem> {
        self.item(item_id)
            .ok_or_else(|| DomainError::not_found(format!("item {item_id}")))
    }

    /// `StoreAdded` for a store not seen before; `None` if already known.
    fn store_registration(
        &self,
        name: &str,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Option<HouseholdEvent>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("store name cannot be empty"));
        }
        if self.stores.contains(name) {
            return Ok(None);
        }
        Ok(Some(HouseholdEvent::StoreAdded(NameChange {
            name: name.to_string(),
            occurred_at,
        })))
    }

    /// The purchase draft, unless its store is blank.
    fn entered_purchase(purchase: Option<&PurchaseDraft>) -> DomainResult<Option<&PurchaseDraft>> {
        let Some(purchase) = purchase.filter(|p| !p.store_name.trim().is_empty()) else {
            return Ok(None);
        };
        if let Some(price) = purchase.price {
            if !(price.is_finite() && price > 0.0) {
                return Err(DomainError::validation("price must be a positive number"));
            }
        }
        Ok(Some(purchase))
    }

    /// `StoreAdded` (if new) and `PurchaseRecorded` (if priced) for `item_id`.
    fn purchase_events(
        &self,
        item_id: ItemId,
        draft: &ItemDraft,
        purchase: &PurchaseDraft,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Vec<HouseholdEvent>> {
        let mut events: Vec<HouseholdEvent> = self
            .store_registration(&purchase.store_name, occurred_at)?
            .into_iter()
            .collect();

        if let Some(price) = purchase.price {
            if find_by_id(&self.history, &purchase.purchase_id).is_some() {
                return Err(DomainError::conflict(format!(
                    "purchase {} already recorded",
                    purchase.purchase_id
                )));
            }
            events.push(HouseholdEvent::PurchaseRecorded(PurchaseRecord {
                id: purchase.purchase_id.clone(),
                item_id,
                item_name: draft.name.clone(),
                store_name: purchase.store_name.trim().to_string(),
                price,
                quantity: draft.quantity,
                date: purchase.date.unwrap_or_else(|| occurred_at.date_naive()),
                created_at: occurred_at,
            }));
        }

        Ok(events)
    }

    fn handle_save(&self, cmd: &SaveItem) -> DomainResult<Vec<HouseholdEvent>> {
        cmd.draft.validate()?;
        let purchase = Self::entered_purchase(cmd.purchase.as_ref())?;

        let mut events = Vec::new();

        let item_id = match plan_add(&self.items, &cmd.draft) {
            AddPlan::Merge {
                item_id,
                new_quantity,
            } => {
                let existing = self.existing_item(&item_id)?;
                events.push(HouseholdEvent::ItemRestocked(ItemRestocked {
                    item_id: item_id.clone(),
                    name: existing.name.clone(),
                    unit: existing.unit,
                    added: cmd.draft.quantity,
                    new_quantity,
                    occurred_at: cmd.occurred_at,
                }));
                item_id
            }
            AddPlan::Create => {
                if self.item(&cmd.item_id).is_some() {
                    return Err(DomainError::conflict(format!(
                        "item {} already exists",
                        cmd.item_id
                    )));
                }
                events.push(HouseholdEvent::ItemCreated(InventoryItem::from_draft(
                    cmd.item_id.clone(),
                    cmd.draft.clone(),
                    cmd.occurred_at,
                )));
                cmd.item_id.clone()
            }
        };

        if let Some(purchase) = purchase {
            events.extend(self.purchase_events(item_id, &cmd.draft, purchase, cmd.occurred_at)?);
        }

        Ok(events)
    }

    fn handle_edit(&self, cmd: &EditItem) -> DomainResult<Vec<HouseholdEvent>> {
        cmd.draft.validate()?;
        let purchase = Self::entered_purchase(cmd.purchase.as_ref())?;
        self.existing_item(&cmd.item_id)?;

        let mut events = vec![HouseholdEvent::ItemEdited(ItemEdited {
            item_id: cmd.item_id.clone(),
            draft: cmd.draft.clone(),
            occurred_at: cmd.occurred_at,
        })];

        if let Some(purchase) = purchase {
            events.extend(self.purchase_events(
                cmd.item_id.clone(),
                &cmd.draft,
                purchase,
                cmd.occurred_at,
            )?);
        }

        Ok(events)
    }

    fn handle_adjust(&self, cmd: &AdjustQuantity) -> DomainResult<Vec<HouseholdEvent>> {
        if !cmd.delta.is_finite() {
            return Err(DomainError::validation("delta must be a finite number"));
        }
        if cmd.delta == 0.0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }
        let item = self.existing_item(&cmd.item_id)?;

        Ok(vec![HouseholdEvent::QuantityAdjusted(QuantityAdjusted {
            item_id: cmd.item_id.clone(),
            name: item.name.clone(),
            unit: item.unit,
            delta: cmd.delta,
            new_quantity: item.adjusted_quantity(cmd.delta),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteItem) -> DomainResult<Vec<HouseholdEvent>> {
        let item = self.existing_item(&cmd.item_id)?;

        Ok(vec![HouseholdEvent::ItemDeleted(ItemDeleted {
            item_id: cmd.item_id.clone(),
            name: item.name.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_category(&self, cmd: &NameChange) -> DomainResult<Vec<HouseholdEvent>> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        if self.categories.contains(name) {
            return Ok(Vec::new());
        }

        Ok(vec![HouseholdEvent::CategoryAdded(NameChange {
            name: name.to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_category(&self, cmd: &NameChange) -> DomainResult<Vec<HouseholdEvent>> {
        if !self.categories.contains(&cmd.name) {
            return Err(DomainError::not_found(format!("category {}", cmd.name)));
        }

        Ok(vec![HouseholdEvent::CategoryRemoved(cmd.clone())])
    }
}
