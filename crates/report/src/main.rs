use anyhow::Context;

use pantry_core::HouseholdId;
use pantry_household::{Household, HouseholdConfig};
use pantry_report::{ReportArgs, SNAPSHOT_VAR, build_report, load_snapshot};

fn main() -> anyhow::Result<()> {
    pantry_observability::init();

    let args = ReportArgs::parse(std::env::args().skip(1), std::env::var(SNAPSHOT_VAR).ok())?;
    let config = HouseholdConfig::from_env().context("invalid PANTRY_* configuration")?;
    let snapshot = load_snapshot(&args.snapshot)?;

    tracing::info!(
        snapshot = %args.snapshot.display(),
        items = snapshot.items.len(),
        purchases = snapshot.history.len(),
        "loaded household snapshot"
    );

    let household = Household::from_snapshot(HouseholdId::new(), config, snapshot);
    let report = build_report(&household, &args);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
