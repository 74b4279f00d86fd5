//! Results table rendering.

use crate::aggregator::PivotTable;
use crate::report::{
    format_eur, format_percent, INDICATOR_COSTS, INDICATOR_COST_RATIO, INDICATOR_REVENUE,
};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Ratio cell for the table: "N/A" when the ratio is not arithmetically
/// finite (zero-revenue total), otherwise a fixed 2-decimal percentage.
fn format_ratio(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "N/A".to_string();
    }
    format_percent(ratio)
}

/// Render the pivot as a text table: three rows per store (revenue, costs,
/// cost ratio) against the sorted date columns plus a Total column.
pub fn render_table(pivot: &PivotTable) -> String {
    let dates = pivot.dates();

    let mut builder = Builder::default();

    let mut header = vec!["Store".to_string(), "Indicator".to_string()];
    header.extend(dates.iter().map(|d| d.to_string()));
    header.push("Total".to_string());
    builder.push_record(header);

    for (name, store) in &pivot.stores {
        let mut revenue_row = vec![name.to_string(), INDICATOR_REVENUE.to_string()];
        for date in &dates {
            let revenue = store.daily.get(date).map(|f| f.revenue).unwrap_or(0.0);
            revenue_row.push(format_eur(revenue));
        }
        revenue_row.push(format_eur(store.total.revenue));
        builder.push_record(revenue_row);

        // Store name only on the first of the three rows
        let mut costs_row = vec![String::new(), INDICATOR_COSTS.to_string()];
        for date in &dates {
            let costs = store.daily.get(date).map(|f| f.costs).unwrap_or(0.0);
            costs_row.push(format_eur(costs));
        }
        costs_row.push(format_eur(store.total.costs));
        builder.push_record(costs_row);

        let mut ratio_row = vec![String::new(), INDICATOR_COST_RATIO.to_string()];
        for date in &dates {
            // Per-day fallback is 0, not N/A
            let ratio = store
                .daily
                .get(date)
                .map(|f| if f.revenue > 0.0 { f.costs / f.revenue } else { 0.0 })
                .unwrap_or(0.0);
            ratio_row.push(format_ratio(ratio));
        }
        // The total ratio is the raw division: a zero-revenue total goes
        // non-finite and renders as N/A
        ratio_row.push(format_ratio(store.total.costs / store.total.revenue));
        builder.push_record(ratio_row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}
