//! Pivot aggregation: flat store reports -> date-aligned per-store structure.
//!
//! The same pivot feeds the results table and the CSV export; it is
//! recomputed from the report list on every render, never cached.

use crate::extractor::{StoreName, StoreReport, WeeklyTotal};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyFigures {
    pub revenue: f64,
    pub costs: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StorePivot {
    pub daily: BTreeMap<NaiveDate, DailyFigures>,
    pub total: WeeklyTotal,
}

/// Ordered mapping store -> daily figures + weekly total. The ordered maps
/// make store rows and date columns deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct PivotTable {
    pub stores: BTreeMap<StoreName, StorePivot>,
}

impl PivotTable {
    /// Union of all dates across all stores, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = BTreeSet::new();
        for pivot in self.stores.values() {
            dates.extend(pivot.daily.keys().copied());
        }
        dates.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Build the pivot from reports in input order.
///
/// Reports sharing a store name merge: daily entries union per date with
/// last write winning, and the total is overwritten (not accumulated) so it
/// reflects only the last report seen for that store.
pub fn aggregate(reports: &[StoreReport]) -> PivotTable {
    let mut stores: BTreeMap<StoreName, StorePivot> = BTreeMap::new();

    for report in reports {
        let entry = stores.entry(report.store_name.clone()).or_default();

        for day in &report.daily_data {
            entry.daily.insert(
                day.date,
                DailyFigures {
                    revenue: day.revenue,
                    costs: day.costs,
                },
            );
        }

        entry.total = report.weekly_total;
    }

    PivotTable { stores }
}
