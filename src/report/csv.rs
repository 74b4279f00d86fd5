//! CSV export.
//!
//! Same logical rows as the results table, but plain decimals (no currency
//! symbol, no grouping) and a "0.00%" fallback wherever revenue is zero.
//! Fields are joined with bare commas; values are not quoted or escaped.

use crate::aggregator::PivotTable;
use crate::error::Result;
use crate::report::{
    format_amount, format_percent, INDICATOR_COSTS, INDICATOR_COST_RATIO, INDICATOR_REVENUE,
};
use std::path::Path;

/// Render the pivot as CSV text.
pub fn to_csv(pivot: &PivotTable) -> String {
    let dates = pivot.dates();

    let mut header = vec!["Store".to_string(), "Indicator".to_string()];
    header.extend(dates.iter().map(|d| d.to_string()));
    header.push("Total".to_string());

    let mut lines = vec![header.join(",")];

    for (name, store) in &pivot.stores {
        let mut revenue_row = vec![name.to_string(), INDICATOR_REVENUE.to_string()];
        for date in &dates {
            let revenue = store.daily.get(date).map(|f| f.revenue).unwrap_or(0.0);
            revenue_row.push(format_amount(revenue));
        }
        revenue_row.push(format_amount(store.total.revenue));
        lines.push(revenue_row.join(","));

        let mut costs_row = vec![name.to_string(), INDICATOR_COSTS.to_string()];
        for date in &dates {
            let costs = store.daily.get(date).map(|f| f.costs).unwrap_or(0.0);
            costs_row.push(format_amount(costs));
        }
        costs_row.push(format_amount(store.total.costs));
        lines.push(costs_row.join(","));

        let mut percent_row = vec![name.to_string(), INDICATOR_COST_RATIO.to_string()];
        for date in &dates {
            let cell = match store.daily.get(date) {
                Some(figures) if figures.revenue != 0.0 => {
                    format_percent(figures.costs / figures.revenue)
                }
                _ => "0.00%".to_string(),
            };
            percent_row.push(cell);
        }
        // Unlike the table adapter, a zero-revenue total exports as a
        // literal 0.00%
        let total_cell = if store.total.revenue != 0.0 {
            format_percent(store.total.costs / store.total.revenue)
        } else {
            "0.00%".to_string()
        };
        percent_row.push(total_cell);
        lines.push(percent_row.join(","));
    }

    lines.join("\n")
}

/// Write the CSV to `path`.
pub fn write_csv(pivot: &PivotTable, path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(pivot))?;
    Ok(())
}

/// Default export filename, dated with the current local day.
pub fn default_filename() -> String {
    format!("rapport_skello_{}.csv", chrono::Local::now().format("%Y-%m-%d"))
}
