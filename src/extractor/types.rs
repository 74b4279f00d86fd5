//! Wire types for the extraction service.
//!
//! Field names match the JSON shape the service is instructed to return:
//! storeName, weekStartDate, dailyData, weeklyTotal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store identifier. Not unique across input: several reports may carry the
/// same name and are merged downstream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreName(String);

impl StoreName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One store's actuals for one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub revenue: f64,
    pub costs: f64,
}

/// Store-reported weekly total. Trusted as-given; the source data may
/// disagree with the sum of the daily values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeeklyTotal {
    pub revenue: f64,
    pub costs: f64,
}

/// One week of actuals for one store, as extracted from a screenshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReport {
    pub store_name: StoreName,
    pub week_start_date: NaiveDate,
    /// Nominally 7 entries, one per weekday, but not guaranteed.
    pub daily_data: Vec<DailyRecord>,
    pub weekly_total: WeeklyTotal,
}
