//! Household report: every derived view of a snapshot in one JSON document.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;

use pantry_household::{Household, HouseholdSnapshot};
use pantry_inventory::{InventoryItem, InventorySort};
use pantry_purchasing::{
    ComparisonSort, PriceComparison, PriceReference, PriceTrend, StoreAverage, filter_comparisons,
};

/// Environment variable consulted when no snapshot path is given.
pub const SNAPSHOT_VAR: &str = "PANTRY_SNAPSHOT";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportArgs {
    pub snapshot: PathBuf,
    pub query: String,
    pub inventory_sort: InventorySort,
    pub comparison_sort: ComparisonSort,
}

impl ReportArgs {
    /// `pantry-report [SNAPSHOT] [--query TEXT] [--sort KEY] [--compare KEY]`
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        snapshot_env: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut snapshot: Option<PathBuf> = None;
        let mut query = String::new();
        let mut inventory_sort = InventorySort::default();
        let mut comparison_sort = ComparisonSort::default();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--query" => query = flag_value(&mut args, "--query")?,
                "--sort" => inventory_sort = flag_value(&mut args, "--sort")?.parse()?,
                "--compare" => comparison_sort = flag_value(&mut args, "--compare")?.parse()?,
                flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
                path => {
                    if snapshot.is_some() {
                        bail!("unexpected argument: {path}");
                    }
                    snapshot = Some(PathBuf::from(path));
                }
            }
        }

        let snapshot = snapshot
            .or_else(|| snapshot_env.map(PathBuf::from))
            .with_context(|| format!("no snapshot path given (argument or {SNAPSHOT_VAR})"))?;

        Ok(Self {
            snapshot,
            query,
            inventory_sort,
            comparison_sort,
        })
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .with_context(|| format!("{flag} expects a value"))
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<HouseholdSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct ComparisonRow {
    #[serde(flatten)]
    pub comparison: PriceComparison,
    pub trend: PriceTrend,
}

#[derive(Debug, Serialize)]
pub struct HouseholdReport<'a> {
    pub inventory: Vec<&'a InventoryItem>,
    pub shopping_list: Vec<&'a InventoryItem>,
    pub price_comparisons: Vec<ComparisonRow>,
    pub store_averages: Vec<StoreAverage>,
    pub recent_references: Vec<PriceReference>,
    pub unread_activity: usize,
}

pub fn build_report<'a>(household: &'a Household, args: &ReportArgs) -> HouseholdReport<'a> {
    let comparisons = household.price_comparisons(args.comparison_sort);
    let price_comparisons = filter_comparisons(&comparisons, &args.query)
        .into_iter()
        .map(|c| ComparisonRow {
            trend: household.price_trend(c),
            comparison: c.clone(),
        })
        .collect();

    HouseholdReport {
        inventory: household.inventory_view(&args.query, args.inventory_sort),
        shopping_list: household.shopping_list(),
        price_comparisons,
        store_averages: household.store_averages(),
        recent_references: household.recent_references(),
        unread_activity: household.unread_activity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pantry_core::{HouseholdId, ItemId, PurchaseId};
    use pantry_household::{HouseholdCommand, HouseholdConfig, PurchaseDraft, SaveItem};
    use pantry_inventory::{ItemDraft, Unit};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_path() {
        let parsed = ReportArgs::parse(
            args(&["home.json", "--sort", "quantityAsc", "--compare", "savings", "--query", "rice"]),
            None,
        )
        .unwrap();

        assert_eq!(parsed.snapshot, PathBuf::from("home.json"));
        assert_eq!(parsed.inventory_sort, InventorySort::QuantityAsc);
        assert_eq!(parsed.comparison_sort, ComparisonSort::Savings);
        assert_eq!(parsed.query, "rice");
    }

    #[test]
    fn falls_back_to_env_path() {
        let parsed = ReportArgs::parse(Vec::new(), Some("/tmp/h.json".to_string())).unwrap();
        assert_eq!(parsed.snapshot, PathBuf::from("/tmp/h.json"));
        assert!(ReportArgs::parse(Vec::new(), None).is_err());
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(ReportArgs::parse(args(&["a.json", "--verbose"]), None).is_err());
        assert!(ReportArgs::parse(args(&["a.json", "--sort"]), None).is_err());
        assert!(ReportArgs::parse(args(&["a.json", "--sort", "price"]), None).is_err());
    }

    #[test]
    fn report_covers_all_views() {
        let mut household = Household::new(HouseholdId::parse("home").unwrap(), HouseholdConfig::default());
        for (store, price) in [("StoreA", 10.0), ("StoreB", 8.0), ("StoreA", 9.0)] {
            household
                .execute(HouseholdCommand::SaveItem(SaveItem {
                    item_id: ItemId::parse("rice").unwrap(),
                    draft: ItemDraft {
                        name: "Rice".to_string(),
                        category: "Pantry".to_string(),
                        quantity: 1.0,
                        min_quantity: 5.0,
                        unit: Unit::Kg,
                    },
                    purchase: Some(PurchaseDraft {
                        purchase_id: PurchaseId::new(),
                        store_name: store.to_string(),
                        price: Some(price),
                        date: None,
                    }),
                    occurred_at: Utc::now(),
                }))
                .unwrap();
        }

        let report_args = ReportArgs::parse(args(&["unused.json"]), None).unwrap();
        let report = build_report(&household, &report_args);

        assert_eq!(report.inventory.len(), 1);
        assert_eq!(report.shopping_list.len(), 1);
        assert_eq!(report.price_comparisons.len(), 1);
        assert_eq!(report.price_comparisons[0].trend, PriceTrend::Falling);
        assert_eq!(report.store_averages.len(), 2);
        assert!(report.unread_activity > 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["price_comparisons"][0]["lowest_store"], "StoreB");
        assert_eq!(json["price_comparisons"][0]["trend"], "falling");
    }

    #[test]
    fn demo_snapshot_parses_and_reports() {
        let snapshot: HouseholdSnapshot =
            serde_json::from_str(include_str!("../../../demos/household.json")).unwrap();
        let household = Household::from_snapshot(
            HouseholdId::parse("demo").unwrap(),
            HouseholdConfig::default(),
            snapshot,
        );

        let report_args = ReportArgs::parse(args(&["demo.json", "--compare", "savings"]), None).unwrap();
        let report = build_report(&household, &report_args);

        let low: Vec<&str> = report.shopping_list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(low, vec!["2", "3", "5"]);
        assert_eq!(report.price_comparisons[0].comparison.item_name, "Arroz Branco");
        assert_eq!(report.unread_activity, 1);
        assert_eq!(household.categories().len(), 6);
    }

    #[test]
    fn load_snapshot_reports_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/pantry.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read snapshot"));
    }
}
