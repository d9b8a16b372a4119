//! Runtime configuration for a household.

use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult};

/// Tunables with the defaults the household views were designed around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdConfig {
    /// Entries kept in the activity log before the oldest are dropped.
    pub activity_capacity: usize,
    /// Percent change beyond which a price counts as rising/falling.
    pub trend_threshold: f64,
    /// Entries in the "latest price references" list.
    pub recent_references: usize,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            activity_capacity: 50,
            trend_threshold: 5.0,
            recent_references: 5,
        }
    }
}

impl HouseholdConfig {
    pub const ACTIVITY_CAPACITY_VAR: &'static str = "PANTRY_ACTIVITY_CAPACITY";
    pub const TREND_THRESHOLD_VAR: &'static str = "PANTRY_TREND_THRESHOLD";
    pub const RECENT_REFERENCES_VAR: &'static str = "PANTRY_RECENT_REFERENCES";

    /// Defaults overridden by `PANTRY_*` environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::ACTIVITY_CAPACITY_VAR) {
            config.activity_capacity = parse_var(Self::ACTIVITY_CAPACITY_VAR, &raw)?;
        }
        if let Some(raw) = lookup(Self::TREND_THRESHOLD_VAR) {
            config.trend_threshold = parse_var(Self::TREND_THRESHOLD_VAR, &raw)?;
        }
        if let Some(raw) = lookup(Self::RECENT_REFERENCES_VAR) {
            config.recent_references = parse_var(Self::RECENT_REFERENCES_VAR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.activity_capacity == 0 {
            return Err(DomainError::validation("activity_capacity must be positive"));
        }
        if !(self.trend_threshold.is_finite() && self.trend_threshold >= 0.0) {
            return Err(DomainError::validation(
                "trend_threshold must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

fn parse_var<T: core::str::FromStr>(key: &str, raw: &str) -> DomainResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("{key}: cannot parse {raw:?}")))
}
